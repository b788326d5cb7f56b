//! Checklist Repository
//!
//! CRUD and per-card ordering for checklist items.

use async_trait::async_trait;
use rusqlite::params;

use crate::domain::{ChecklistItem, DomainError, DomainResult};
use super::board_repo::{current_positions, validate_order};
use super::db::SharedConn;
use super::traits::{OrderedRepository, Repository};

pub struct ChecklistRepository {
    conn: SharedConn,
}

const ITEM_COLS: &str = "id, card_id, text, done, position, created_at, updated_at";

fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<ChecklistItem> {
    Ok(ChecklistItem {
        id: row.get(0)?,
        card_id: row.get(1)?,
        text: row.get(2)?,
        done: row.get::<_, i32>(3)? != 0,
        position: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

impl ChecklistRepository {
    pub fn new(conn: SharedConn) -> Self {
        Self { conn }
    }

    /// Flip the done flag, returning the new value
    pub async fn toggle_done(&self, id: u32) -> DomainResult<ChecklistItem> {
        let mut item = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Checklist item {} not found", id)))?;
        item.done = !item.done;
        self.update(&item).await
    }
}

#[async_trait]
impl Repository<ChecklistItem> for ChecklistRepository {
    async fn create(&self, entity: &ChecklistItem) -> DomainResult<ChecklistItem> {
        if entity.text.trim().is_empty() {
            return Err(DomainError::InvalidInput("Checklist text is required".into()));
        }

        let position = self.next_position(&entity.card_id).await?;

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let now = chrono::Utc::now().timestamp_millis();
        conn.execute(
            "INSERT INTO checklist_items (card_id, text, done, position, created_at, updated_at)
             VALUES (?, ?, 0, ?, ?, ?)",
            params![entity.card_id, entity.text, position, now, now],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let id = conn.last_insert_rowid() as u32;
        let mut created = ChecklistItem::new(id, entity.card_id, entity.text.clone(), position);
        created.created_at = Some(now);
        created.updated_at = Some(now);
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<ChecklistItem>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM checklist_items WHERE id = ?", ITEM_COLS))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query_map(params![id], row_to_item)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        match rows.next() {
            Some(row) => Ok(Some(row.map_err(|e| DomainError::Internal(e.to_string()))?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> DomainResult<Vec<ChecklistItem>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM checklist_items ORDER BY card_id, position, created_at",
                ITEM_COLS
            ))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let rows = stmt
            .query_map([], row_to_item)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    async fn update(&self, entity: &ChecklistItem) -> DomainResult<ChecklistItem> {
        if entity.text.trim().is_empty() {
            return Err(DomainError::InvalidInput("Checklist text is required".into()));
        }

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let now = chrono::Utc::now().timestamp_millis();
        let changed = conn
            .execute(
                "UPDATE checklist_items SET text = ?, done = ?, position = ?, updated_at = ? WHERE id = ?",
                params![
                    entity.text,
                    if entity.done { 1 } else { 0 },
                    entity.position,
                    now,
                    entity.id
                ],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("Checklist item {} not found", entity.id)));
        }

        let mut updated = entity.clone();
        updated.updated_at = Some(now);
        Ok(updated)
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute("DELETE FROM checklist_items WHERE id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl OrderedRepository<ChecklistItem> for ChecklistRepository {
    type Scope = u32; // card_id

    async fn list_by_scope(&self, card_id: &u32) -> DomainResult<Vec<ChecklistItem>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM checklist_items WHERE card_id = ? ORDER BY position, created_at",
                ITEM_COLS
            ))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let rows = stmt
            .query_map(params![card_id], row_to_item)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    async fn next_position(&self, card_id: &u32) -> DomainResult<i32> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.query_row(
            "SELECT COALESCE(MAX(position), -1) + 1 FROM checklist_items WHERE card_id = ?",
            params![card_id],
            |row| row.get(0),
        )
        .map_err(|e| DomainError::Internal(e.to_string()))
    }

    async fn reorder(&self, card_id: &u32, order: &[u32]) -> DomainResult<u32> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let persisted = current_positions(conn, "checklist_items", "card_id = ?", params![card_id])?;
        validate_order(&persisted, order)?;

        let now = chrono::Utc::now().timestamp_millis();
        let mut written = 0u32;
        for (idx, id) in order.iter().enumerate() {
            let new_pos = idx as i32;
            if persisted.iter().any(|(pid, pos)| pid == id && *pos == new_pos) {
                continue;
            }
            conn.execute(
                "UPDATE checklist_items SET position = ?, updated_at = ? WHERE id = ?",
                params![new_pos, now, id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;
            written += 1;
        }
        Ok(written)
    }

    async fn reindex(&self, card_id: &u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let persisted = current_positions(conn, "checklist_items", "card_id = ?", params![card_id])?;
        let now = chrono::Utc::now().timestamp_millis();
        for (new_pos, (id, pos)) in persisted.iter().enumerate() {
            if *pos == new_pos as i32 {
                continue;
            }
            conn.execute(
                "UPDATE checklist_items SET position = ?, updated_at = ? WHERE id = ?",
                params![new_pos as i32, now, id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        }
        Ok(())
    }
}
