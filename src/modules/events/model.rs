use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Every mutable column of an event; create and update both write all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInput {
    pub title: String,
    pub category: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub image: Option<String>,
}
