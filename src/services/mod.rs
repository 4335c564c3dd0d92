pub mod auth_gate;
pub mod hashing;
pub mod jwt;
pub mod metrics;
pub mod rate_limit;
pub mod security;
