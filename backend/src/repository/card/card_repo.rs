//! Card Repository - Core CRUD Operations
//!
//! SQLite-backed implementation for Card CRUD. Column ordering lives in
//! card_positioning.

use async_trait::async_trait;
use rusqlite::params;

use crate::domain::{Card, CardStatus, DomainError, DomainResult};
use super::super::db::SharedConn;
use super::super::traits::Repository;

pub struct CardRepository {
    pub(super) conn: SharedConn,
}

pub(super) const CARD_COLS: &str =
    "id, board_id, title, status, amount_cents, position, created_at, updated_at";

pub(super) fn row_to_card(row: &rusqlite::Row<'_>) -> rusqlite::Result<Card> {
    let status: String = row.get(3)?;
    Ok(Card {
        id: row.get(0)?,
        board_id: row.get(1)?,
        title: row.get(2)?,
        status: CardStatus::from_str(&status),
        amount_cents: row.get(4)?,
        position: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

impl CardRepository {
    pub fn new(conn: SharedConn) -> Self {
        Self { conn }
    }

    /// All cards of a board, every column, display order
    pub async fn list_by_board(&self, board_id: u32) -> DomainResult<Vec<Card>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM cards WHERE board_id = ? ORDER BY status, position, created_at",
                CARD_COLS
            ))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let rows = stmt
            .query_map(params![board_id], row_to_card)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    /// Income/expense totals over done cards in a month (millis range)
    pub async fn amount_totals(&self, from_millis: i64, to_millis: i64) -> DomainResult<(i64, i64)> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.query_row(
            "SELECT
                COALESCE(SUM(CASE WHEN amount_cents > 0 THEN amount_cents END), 0),
                COALESCE(SUM(CASE WHEN amount_cents < 0 THEN amount_cents END), 0)
             FROM cards
             WHERE status = 'done' AND amount_cents IS NOT NULL
               AND updated_at >= ? AND updated_at < ?",
            params![from_millis, to_millis],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .map_err(|e| DomainError::Internal(e.to_string()))
    }
}

#[async_trait]
impl Repository<Card> for CardRepository {
    async fn create(&self, entity: &Card) -> DomainResult<Card> {
        if entity.title.trim().is_empty() {
            return Err(DomainError::InvalidInput("Card title is required".into()));
        }

        use super::super::traits::OrderedRepository;
        let scope = super::ColumnScope::new(entity.board_id, entity.status);
        let position = self.next_position(&scope).await?;

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let now = chrono::Utc::now().timestamp_millis();
        conn.execute(
            "INSERT INTO cards (board_id, title, status, amount_cents, position, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                entity.board_id,
                entity.title,
                entity.status.as_str(),
                entity.amount_cents,
                position,
                now,
                now
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let id = conn.last_insert_rowid() as u32;
        let mut created = entity.clone();
        created.id = id;
        created.position = position;
        created.created_at = Some(now);
        created.updated_at = Some(now);
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Card>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM cards WHERE id = ?", CARD_COLS))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query_map(params![id], row_to_card)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        match rows.next() {
            Some(row) => Ok(Some(row.map_err(|e| DomainError::Internal(e.to_string()))?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> DomainResult<Vec<Card>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM cards ORDER BY board_id, status, position, created_at",
                CARD_COLS
            ))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let rows = stmt
            .query_map([], row_to_card)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    async fn update(&self, entity: &Card) -> DomainResult<Card> {
        if entity.title.trim().is_empty() {
            return Err(DomainError::InvalidInput("Card title is required".into()));
        }

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let now = chrono::Utc::now().timestamp_millis();
        let changed = conn
            .execute(
                "UPDATE cards SET title = ?, status = ?, amount_cents = ?, position = ?, updated_at = ?
                 WHERE id = ?",
                params![
                    entity.title,
                    entity.status.as_str(),
                    entity.amount_cents,
                    entity.position,
                    now,
                    entity.id
                ],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("Card {} not found", entity.id)));
        }

        let mut updated = entity.clone();
        updated.updated_at = Some(now);
        Ok(updated)
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute("DELETE FROM checklist_items WHERE card_id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        conn.execute("DELETE FROM cards WHERE id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }
}
