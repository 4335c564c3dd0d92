use async_trait::async_trait;
use sqlx::{MySql, Pool};

use super::interface::ContactRepository;
use super::model::{ContactMessage, NewContactMessage};
use crate::store::StoreResult;

pub struct ContactCrud {
    pool: Pool<MySql>,
}

impl ContactCrud {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for ContactCrud {
    async fn create(&self, message: &NewContactMessage) -> StoreResult<i64> {
        let result = sqlx::query("INSERT INTO contacts (name, email, message) VALUES (?, ?, ?)")
            .bind(&message.name)
            .bind(&message.email)
            .bind(&message.message)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_id() as i64)
    }

    async fn list(&self) -> StoreResult<Vec<ContactMessage>> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            "SELECT id, name, email, message, submitted_at FROM contacts ORDER BY submitted_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
