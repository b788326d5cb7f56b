//! Board Repository
//!
//! SQLite-backed CRUD and tab-order management for boards.

use async_trait::async_trait;
use rusqlite::params;

use crate::domain::{Board, DomainError, DomainResult};
use super::db::SharedConn;
use super::traits::{OrderedRepository, Repository};

pub struct BoardRepository {
    conn: SharedConn,
}

fn row_to_board(row: &rusqlite::Row<'_>) -> rusqlite::Result<Board> {
    Ok(Board {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        name: row.get(2)?,
        position: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

const BOARD_COLS: &str = "id, owner_id, name, position, created_at, updated_at";

impl BoardRepository {
    pub fn new(conn: SharedConn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Board> for BoardRepository {
    async fn create(&self, entity: &Board) -> DomainResult<Board> {
        if entity.name.trim().is_empty() {
            return Err(DomainError::InvalidInput("Board name is required".into()));
        }

        // New boards go to the end of the owner's tab bar
        let position = self.next_position(&entity.owner_id).await?;

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let now = chrono::Utc::now().timestamp_millis();
        conn.execute(
            "INSERT INTO boards (owner_id, name, position, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
            params![entity.owner_id, entity.name, position, now, now],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let id = conn.last_insert_rowid() as u32;
        let mut created = Board::new(id, entity.owner_id, entity.name.clone(), position);
        created.created_at = Some(now);
        created.updated_at = Some(now);
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Board>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM boards WHERE id = ?", BOARD_COLS))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query_map(params![id], row_to_board)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        match rows.next() {
            Some(row) => Ok(Some(row.map_err(|e| DomainError::Internal(e.to_string()))?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> DomainResult<Vec<Board>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM boards ORDER BY owner_id, position, created_at", BOARD_COLS))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let rows = stmt
            .query_map([], row_to_board)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    async fn update(&self, entity: &Board) -> DomainResult<Board> {
        if entity.name.trim().is_empty() {
            return Err(DomainError::InvalidInput("Board name is required".into()));
        }

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let now = chrono::Utc::now().timestamp_millis();
        let changed = conn
            .execute(
                "UPDATE boards SET name = ?, position = ?, updated_at = ? WHERE id = ?",
                params![entity.name, entity.position, now, entity.id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("Board {} not found", entity.id)));
        }

        let mut updated = entity.clone();
        updated.updated_at = Some(now);
        Ok(updated)
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        // Cards and their checklists go with the board
        conn.execute(
            "DELETE FROM checklist_items WHERE card_id IN (SELECT id FROM cards WHERE board_id = ?)",
            params![id],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        conn.execute("DELETE FROM cards WHERE board_id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        conn.execute("DELETE FROM boards WHERE id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl OrderedRepository<Board> for BoardRepository {
    type Scope = u32; // owner_id

    async fn list_by_scope(&self, owner_id: &u32) -> DomainResult<Vec<Board>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM boards WHERE owner_id = ? ORDER BY position, created_at",
                BOARD_COLS
            ))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let rows = stmt
            .query_map(params![owner_id], row_to_board)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    async fn next_position(&self, owner_id: &u32) -> DomainResult<i32> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.query_row(
            "SELECT COALESCE(MAX(position), -1) + 1 FROM boards WHERE owner_id = ?",
            params![owner_id],
            |row| row.get(0),
        )
        .map_err(|e| DomainError::Internal(e.to_string()))
    }

    async fn reorder(&self, owner_id: &u32, order: &[u32]) -> DomainResult<u32> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let persisted = current_positions(conn, "boards", "owner_id = ?", params![owner_id])?;
        validate_order(&persisted, order)?;

        // Per-row updates, no transaction: the store's per-record update is
        // the unit of atomicity; callers re-fetch on partial failure.
        let now = chrono::Utc::now().timestamp_millis();
        let mut written = 0u32;
        for (idx, id) in order.iter().enumerate() {
            let new_pos = idx as i32;
            if persisted.iter().any(|(pid, pos)| pid == id && *pos == new_pos) {
                continue;
            }
            conn.execute(
                "UPDATE boards SET position = ?, updated_at = ? WHERE id = ?",
                params![new_pos, now, id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;
            written += 1;
        }
        Ok(written)
    }

    async fn reindex(&self, owner_id: &u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let persisted = current_positions(conn, "boards", "owner_id = ?", params![owner_id])?;
        let now = chrono::Utc::now().timestamp_millis();
        for (new_pos, (id, pos)) in persisted.iter().enumerate() {
            if *pos == new_pos as i32 {
                continue;
            }
            conn.execute(
                "UPDATE boards SET position = ?, updated_at = ? WHERE id = ?",
                params![new_pos as i32, now, id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        }
        Ok(())
    }
}

/// (id, position) pairs of one scope in display order
pub(super) fn current_positions(
    conn: &rusqlite::Connection,
    table: &str,
    scope_clause: &str,
    scope_params: &[&dyn rusqlite::ToSql],
) -> DomainResult<Vec<(u32, i32)>> {
    let sql = format!(
        "SELECT id, position FROM {} WHERE {} ORDER BY position, created_at, id",
        table, scope_clause
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| DomainError::Internal(e.to_string()))?;

    let rows = stmt
        .query_map(scope_params, |row| Ok((row.get::<_, u32>(0)?, row.get::<_, i32>(1)?)))
        .map_err(|e| DomainError::Internal(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| DomainError::Internal(e.to_string()))
}

/// A reorder must name exactly the ids in the scope, each once.
/// Validated before any write so a malformed request touches nothing.
pub(super) fn validate_order(persisted: &[(u32, i32)], order: &[u32]) -> DomainResult<()> {
    if order.len() != persisted.len() {
        return Err(DomainError::InvalidInput(format!(
            "Order names {} items, scope has {}",
            order.len(),
            persisted.len()
        )));
    }
    for id in order {
        if !persisted.iter().any(|(pid, _)| pid == id) {
            return Err(DomainError::InvalidInput(format!("Item {} is not in this scope", id)));
        }
    }
    let mut seen = std::collections::HashSet::new();
    for id in order {
        if !seen.insert(id) {
            return Err(DomainError::InvalidInput(format!("Item {} appears twice", id)));
        }
    }
    Ok(())
}
