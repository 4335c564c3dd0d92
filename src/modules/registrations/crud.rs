use async_trait::async_trait;
use sqlx::{MySql, Pool};

use super::interface::RegistrationRepository;
use super::model::{
    AdminRegistration, NewRegistration, Registration, RegistrationOverview, UserRegistration, DEFAULT_STATUS,
};
use crate::store::{StoreError, StoreResult};

pub struct RegistrationCrud {
    pool: Pool<MySql>,
}

impl RegistrationCrud {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for RegistrationCrud {
    async fn create(&self, registration: &NewRegistration) -> StoreResult<i64> {
        // Selecting from events makes the existence check and the insert
        // a single statement.
        let result = sqlx::query(
            r#"
            INSERT INTO registrations
                (user_id, event_id, name, email, phone, preferred_date, notes, status)
            SELECT ?, e.id, ?, ?, ?, ?, ?, ?
            FROM events e
            WHERE e.id = ?
            "#,
        )
        .bind(registration.user_id)
        .bind(&registration.name)
        .bind(&registration.email)
        .bind(&registration.phone)
        .bind(registration.preferred_date)
        .bind(&registration.notes)
        .bind(DEFAULT_STATUS)
        .bind(registration.event_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::MissingReference);
        }

        Ok(result.last_insert_id() as i64)
    }

    async fn list_by_event(&self, event_id: i64) -> StoreResult<Vec<Registration>> {
        let rows = sqlx::query_as::<_, Registration>(
            r#"
            SELECT id, user_id, event_id, name, email, phone, preferred_date, notes, status, created_at
            FROM registrations
            WHERE event_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn list_for_user(&self, user_id: i64) -> StoreResult<Vec<UserRegistration>> {
        let rows = sqlx::query_as::<_, UserRegistration>(
            r#"
            SELECT
                r.id,
                e.title AS event_title,
                e.category AS event_category,
                e.date AS event_date,
                r.preferred_date,
                r.notes,
                r.created_at,
                r.status
            FROM registrations r
            JOIN events e ON r.event_id = e.id
            WHERE r.user_id = ?
            ORDER BY r.created_at DESC, r.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn list_overview(&self) -> StoreResult<Vec<RegistrationOverview>> {
        let rows = sqlx::query_as::<_, RegistrationOverview>(
            r#"
            SELECT
                r.id AS registration_id,
                r.name AS user_name,
                r.email AS user_email,
                r.phone AS user_phone,
                e.title AS event_title,
                e.date AS event_date,
                r.preferred_date,
                r.status,
                r.created_at
            FROM registrations r
            JOIN events e ON r.event_id = e.id
            ORDER BY r.created_at DESC, r.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn list_for_admin(&self) -> StoreResult<Vec<AdminRegistration>> {
        let rows = sqlx::query_as::<_, AdminRegistration>(
            r#"
            SELECT
                r.id,
                u.name AS user_name,
                u.email AS user_email,
                e.title AS event_title,
                r.preferred_date,
                r.status,
                r.created_at
            FROM registrations r
            JOIN users u ON r.user_id = u.id
            JOIN events e ON r.event_id = e.id
            ORDER BY r.created_at DESC, r.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM registrations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn enable_event_cascade(&self) -> StoreResult<()> {
        // DDL commits implicitly in MySQL; there is no transaction to wrap.
        sqlx::query("ALTER TABLE registrations DROP FOREIGN KEY registrations_ibfk_2")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r#"
            ALTER TABLE registrations
            ADD CONSTRAINT registrations_ibfk_2
            FOREIGN KEY (event_id) REFERENCES events (id)
            ON DELETE CASCADE
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
