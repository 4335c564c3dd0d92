pub mod admin;
pub mod auth;
pub mod contact;
pub mod events;
pub mod metrics;
pub mod registrations;
