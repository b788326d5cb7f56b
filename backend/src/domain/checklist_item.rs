//! Checklist Item Entity
//!
//! One entry of a card's checklist, ordered within the card.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A checklist entry on a card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Unique identifier
    pub id: u32,
    /// Owning card (scope key for the checklist ordering)
    pub card_id: u32,
    /// Entry text
    pub text: String,
    /// Checked off
    pub done: bool,
    /// Position within the card's checklist
    pub position: i32,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl ChecklistItem {
    pub fn new(id: u32, card_id: u32, text: String, position: i32) -> Self {
        Self {
            id,
            card_id,
            text,
            done: false,
            position,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for ChecklistItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
