//! Card Positioning Operations
//!
//! Column ordering for cards: one ordered collection per (board, status)
//! pair, plus the cross-column move used when a card is dragged into a
//! different column.

use async_trait::async_trait;
use rusqlite::params;

use crate::domain::{Card, CardStatus, DomainError, DomainResult};
use super::super::board_repo::{current_positions, validate_order};
use super::super::traits::{OrderedRepository, Repository};
use super::card_repo::{row_to_card, CardRepository, CARD_COLS};

/// Scope key for card ordering: one kanban column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnScope {
    pub board_id: u32,
    pub status: CardStatus,
}

impl ColumnScope {
    pub fn new(board_id: u32, status: CardStatus) -> Self {
        Self { board_id, status }
    }
}

/// Trait for cross-column card moves
#[async_trait]
pub trait CardColumnOperations {
    /// Move a card into `new_status` at `position`, shifting and then
    /// reindexing both affected columns
    async fn move_to_column(&self, id: u32, new_status: CardStatus, position: i32) -> DomainResult<Card>;
}

#[async_trait]
impl OrderedRepository<Card> for CardRepository {
    type Scope = ColumnScope;

    async fn list_by_scope(&self, scope: &ColumnScope) -> DomainResult<Vec<Card>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM cards WHERE board_id = ? AND status = ? ORDER BY position, created_at",
                CARD_COLS
            ))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let rows = stmt
            .query_map(params![scope.board_id, scope.status.as_str()], row_to_card)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    async fn next_position(&self, scope: &ColumnScope) -> DomainResult<i32> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.query_row(
            "SELECT COALESCE(MAX(position), -1) + 1 FROM cards WHERE board_id = ? AND status = ?",
            params![scope.board_id, scope.status.as_str()],
            |row| row.get(0),
        )
        .map_err(|e| DomainError::Internal(e.to_string()))
    }

    async fn reorder(&self, scope: &ColumnScope, order: &[u32]) -> DomainResult<u32> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let persisted = current_positions(
            conn,
            "cards",
            "board_id = ? AND status = ?",
            params![scope.board_id, scope.status.as_str()],
        )?;
        validate_order(&persisted, order)?;

        let now = chrono::Utc::now().timestamp_millis();
        let mut written = 0u32;
        for (idx, id) in order.iter().enumerate() {
            let new_pos = idx as i32;
            if persisted.iter().any(|(pid, pos)| pid == id && *pos == new_pos) {
                continue;
            }
            conn.execute(
                "UPDATE cards SET position = ?, updated_at = ? WHERE id = ?",
                params![new_pos, now, id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;
            written += 1;
        }
        Ok(written)
    }

    async fn reindex(&self, scope: &ColumnScope) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let persisted = current_positions(
            conn,
            "cards",
            "board_id = ? AND status = ?",
            params![scope.board_id, scope.status.as_str()],
        )?;
        let now = chrono::Utc::now().timestamp_millis();
        for (new_pos, (id, pos)) in persisted.iter().enumerate() {
            if *pos == new_pos as i32 {
                continue;
            }
            conn.execute(
                "UPDATE cards SET position = ?, updated_at = ? WHERE id = ?",
                params![new_pos as i32, now, id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl CardColumnOperations for CardRepository {
    async fn move_to_column(&self, id: u32, new_status: CardStatus, position: i32) -> DomainResult<Card> {
        let card = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Card {} not found", id)))?;
        let old_scope = ColumnScope::new(card.board_id, card.status);

        {
            let guard = self.conn.lock().await;
            let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

            // Make room in the target column
            conn.execute(
                "UPDATE cards SET position = position + 1
                 WHERE board_id = ? AND status = ? AND position >= ? AND id != ?",
                params![card.board_id, new_status.as_str(), position, id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

            let now = chrono::Utc::now().timestamp_millis();
            conn.execute(
                "UPDATE cards SET status = ?, position = ?, updated_at = ? WHERE id = ?",
                params![new_status.as_str(), position, now, id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        }
        // Tokio's mutex is not reentrant: the guard must be gone before the
        // reindex calls take it again.

        self.reindex(&old_scope).await?;
        self.reindex(&ColumnScope::new(card.board_id, new_status)).await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Card {} not found", id)))
    }
}
