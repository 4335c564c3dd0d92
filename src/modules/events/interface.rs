use async_trait::async_trait;

use super::model::{Event, EventInput};
use crate::store::StoreResult;

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Newest date first.
    async fn list(&self) -> StoreResult<Vec<Event>>;
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Event>>;
    async fn create(&self, event: &EventInput) -> StoreResult<i64>;
    /// `false` when no event has this id.
    async fn update(&self, id: i64, event: &EventInput) -> StoreResult<bool>;
    /// Removes the event and every registration pointing at it as one unit.
    /// `None` when the event does not exist (nothing is removed), otherwise
    /// the number of registrations removed with it.
    async fn delete_with_registrations(&self, id: i64) -> StoreResult<Option<u64>>;
}
