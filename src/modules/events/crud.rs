use async_trait::async_trait;
use sqlx::{MySql, Pool};

use super::interface::EventRepository;
use super::model::{Event, EventInput};
use crate::store::StoreResult;

pub struct EventCrud {
    pool: Pool<MySql>,
}

impl EventCrud {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for EventCrud {
    async fn list(&self) -> StoreResult<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT id, title, category, date, description, image FROM events ORDER BY date DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, title, category, date, description, image FROM events WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    async fn create(&self, event: &EventInput) -> StoreResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO events (title, category, date, description, image)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&event.title)
        .bind(&event.category)
        .bind(event.date)
        .bind(&event.description)
        .bind(&event.image)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id() as i64)
    }

    async fn update(&self, id: i64, event: &EventInput) -> StoreResult<bool> {
        let mut tx = self.pool.begin().await?;

        // MySQL counts an UPDATE that changes nothing as 0 affected rows,
        // so existence is checked under a row lock instead.
        let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM events WHERE id = ? FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if existing.is_none() {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query(
            r#"
            UPDATE events
            SET title = ?, category = ?, date = ?, description = ?, image = ?
            WHERE id = ?
            "#,
        )
        .bind(&event.title)
        .bind(&event.category)
        .bind(event.date)
        .bind(&event.description)
        .bind(&event.image)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    async fn delete_with_registrations(&self, id: i64) -> StoreResult<Option<u64>> {
        let mut tx = self.pool.begin().await?;

        let registrations = sqlx::query("DELETE FROM registrations WHERE event_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let events = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if events == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        Ok(Some(registrations))
    }
}
