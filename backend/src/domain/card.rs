//! Card Entity
//!
//! A kanban card. Cards are ordered within one (board, status) column and
//! may carry an amount so the dashboard can total them.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Kanban column a card sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    #[default]
    Todo,
    Doing,
    Done,
}

impl CardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardStatus::Todo => "todo",
            CardStatus::Doing => "doing",
            CardStatus::Done => "done",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "doing" => CardStatus::Doing,
            "done" => CardStatus::Done,
            _ => CardStatus::Todo,
        }
    }
}

/// A kanban card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier
    pub id: u32,
    /// Owning board
    pub board_id: u32,
    /// Card title
    pub title: String,
    /// Column within the board
    pub status: CardStatus,
    /// Optional amount in cents (negative = expense, positive = income)
    pub amount_cents: Option<i64>,
    /// Position within the (board, status) column
    pub position: i32,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Card {
    pub fn new(id: u32, board_id: u32, title: String, status: CardStatus) -> Self {
        Self {
            id,
            board_id,
            title,
            status,
            amount_cents: None,
            position: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for Card {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let card = Card::new(1, 3, "Rent".to_string(), CardStatus::Todo);
        assert_eq!(card.id(), 1);
        assert_eq!(card.board_id, 3);
        assert_eq!(card.status, CardStatus::Todo);
        assert!(card.amount_cents.is_none());
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(CardStatus::Doing.as_str(), "doing");
        assert_eq!(CardStatus::from_str("done"), CardStatus::Done);
        // Unknown strings fall back to the default column
        assert_eq!(CardStatus::from_str("archived"), CardStatus::Todo);
    }
}
