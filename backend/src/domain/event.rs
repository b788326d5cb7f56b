//! Agenda Event Entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A single-day agenda entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaEvent {
    /// Unique identifier
    pub id: u32,
    /// Owning user
    pub owner_id: u32,
    pub title: String,
    /// Day the event falls on
    pub date: NaiveDate,
    pub created_at: Option<i64>,
}

impl AgendaEvent {
    pub fn new(id: u32, owner_id: u32, title: String, date: NaiveDate) -> Self {
        Self {
            id,
            owner_id,
            title,
            date,
            created_at: None,
        }
    }
}

impl Entity for AgendaEvent {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
