use async_trait::async_trait;

use super::model::{ContactMessage, NewContactMessage};
use crate::store::StoreResult;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, message: &NewContactMessage) -> StoreResult<i64>;
    /// Newest first.
    async fn list(&self) -> StoreResult<Vec<ContactMessage>>;
    /// `false` when no message has this id.
    async fn delete(&self, id: i64) -> StoreResult<bool>;
}
