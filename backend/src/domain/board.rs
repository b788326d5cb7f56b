//! Board Entity
//!
//! A kanban board owned by one user. Boards render as the reorderable
//! tab bar, so position matters.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A kanban board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    /// Unique identifier
    pub id: u32,
    /// Owning user (scope key for the tab ordering)
    pub owner_id: u32,
    /// Board name shown on the tab
    pub name: String,
    /// Position within the owner's tab bar
    pub position: i32,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Board {
    pub fn new(id: u32, owner_id: u32, name: String, position: i32) -> Self {
        Self {
            id,
            owner_id,
            name,
            position,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for Board {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_creation() {
        let board = Board::new(1, 7, "Budget".to_string(), 0);
        assert_eq!(board.id(), 1);
        assert_eq!(board.owner_id, 7);
        assert_eq!(board.position, 0);
    }
}
