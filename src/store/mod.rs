pub mod memory;

use std::sync::Arc;

use crate::config::DbPool;
use crate::modules::auth::{crud::UserCrud, interface::UserRepository};
use crate::modules::contact::{crud::ContactCrud, interface::ContactRepository};
use crate::modules::events::{crud::EventCrud, interface::EventRepository};
use crate::modules::registrations::{crud::RegistrationCrud, interface::RegistrationRepository};

pub use memory::MemoryStore;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique key (user email) already holds this value.
    #[error("duplicate entry")]
    Duplicate,

    /// A foreign key points at a row that does not exist.
    #[error("referenced row does not exist")]
    MissingReference,

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return StoreError::Duplicate;
            }
            if db_err.is_foreign_key_violation() {
                return StoreError::MissingReference;
            }
        }
        StoreError::Database(err)
    }
}

/// Repository handles shared by every request.
#[derive(Clone)]
pub struct Store {
    pub users: Arc<dyn UserRepository>,
    pub events: Arc<dyn EventRepository>,
    pub registrations: Arc<dyn RegistrationRepository>,
    pub contacts: Arc<dyn ContactRepository>,
}

impl Store {
    pub fn mysql(pool: DbPool) -> Self {
        Self {
            users: Arc::new(UserCrud::new(pool.clone())),
            events: Arc::new(EventCrud::new(pool.clone())),
            registrations: Arc::new(RegistrationCrud::new(pool.clone())),
            contacts: Arc::new(ContactCrud::new(pool)),
        }
    }

    /// All four repositories backed by one shared in-process store.
    pub fn in_memory(memory: Arc<MemoryStore>) -> Self {
        Self {
            users: memory.clone(),
            events: memory.clone(),
            registrations: memory.clone(),
            contacts: memory,
        }
    }
}
