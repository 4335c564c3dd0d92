use async_trait::async_trait;

use super::model::{NewUser, Role, User};
use crate::store::StoreResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user and returns its id. `StoreError::Duplicate` when the
    /// email is taken.
    async fn create(&self, user: &NewUser) -> StoreResult<i64>;
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;
    async fn email_exists(&self, email: &str) -> StoreResult<bool>;
    /// Out-of-band role assignment; no route calls this. `false` when no
    /// user has that email.
    async fn set_role(&self, email: &str, role: Role) -> StoreResult<bool>;
}
