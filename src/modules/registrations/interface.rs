use async_trait::async_trait;

use super::model::{AdminRegistration, NewRegistration, Registration, RegistrationOverview, UserRegistration};
use crate::store::StoreResult;

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// `StoreError::MissingReference` when the event does not exist.
    async fn create(&self, registration: &NewRegistration) -> StoreResult<i64>;
    async fn list_by_event(&self, event_id: i64) -> StoreResult<Vec<Registration>>;

    // Listings are newest first.
    async fn list_for_user(&self, user_id: i64) -> StoreResult<Vec<UserRegistration>>;
    async fn list_overview(&self) -> StoreResult<Vec<RegistrationOverview>>;
    async fn list_for_admin(&self) -> StoreResult<Vec<AdminRegistration>>;

    /// `false` when no registration has this id.
    async fn delete(&self, id: i64) -> StoreResult<bool>;
    /// Switches the event foreign key to `ON DELETE CASCADE`.
    async fn enable_event_cascade(&self) -> StoreResult<()>;
}
