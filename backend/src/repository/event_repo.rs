//! Agenda Event Repository
//!
//! Stores agenda entries by day. Dates are kept as ISO-8601 text so SQLite
//! range comparisons match chrono's ordering.

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::params;

use crate::domain::{AgendaEvent, DomainError, DomainResult};
use super::db::SharedConn;
use super::traits::Repository;

pub struct EventRepository {
    conn: SharedConn,
}

const EVENT_COLS: &str = "id, owner_id, title, date, created_at";

fn row_to_event(row: &rusqlite::Row<'_>) -> rusqlite::Result<AgendaEvent> {
    let date: String = row.get(3)?;
    Ok(AgendaEvent {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        title: row.get(2)?,
        date: date.parse().unwrap_or_default(),
        created_at: row.get(4)?,
    })
}

impl EventRepository {
    pub fn new(conn: SharedConn) -> Self {
        Self { conn }
    }

    /// Events of one owner within `[from, to]`, by day then insertion order
    pub async fn list_by_range(
        &self,
        owner_id: u32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<Vec<AgendaEvent>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM agenda_events
                 WHERE owner_id = ? AND date >= ? AND date <= ?
                 ORDER BY date, created_at, id",
                EVENT_COLS
            ))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let rows = stmt
            .query_map(
                params![owner_id, from.to_string(), to.to_string()],
                row_to_event,
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }
}

#[async_trait]
impl Repository<AgendaEvent> for EventRepository {
    async fn create(&self, entity: &AgendaEvent) -> DomainResult<AgendaEvent> {
        if entity.title.trim().is_empty() {
            return Err(DomainError::InvalidInput("Event title is required".into()));
        }

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let now = chrono::Utc::now().timestamp_millis();
        conn.execute(
            "INSERT INTO agenda_events (owner_id, title, date, created_at) VALUES (?, ?, ?, ?)",
            params![entity.owner_id, entity.title, entity.date.to_string(), now],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let id = conn.last_insert_rowid() as u32;
        let mut created = AgendaEvent::new(id, entity.owner_id, entity.title.clone(), entity.date);
        created.created_at = Some(now);
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<AgendaEvent>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM agenda_events WHERE id = ?", EVENT_COLS))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query_map(params![id], row_to_event)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        match rows.next() {
            Some(row) => Ok(Some(row.map_err(|e| DomainError::Internal(e.to_string()))?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> DomainResult<Vec<AgendaEvent>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM agenda_events ORDER BY date, id", EVENT_COLS))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let rows = stmt
            .query_map([], row_to_event)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    async fn update(&self, entity: &AgendaEvent) -> DomainResult<AgendaEvent> {
        if entity.title.trim().is_empty() {
            return Err(DomainError::InvalidInput("Event title is required".into()));
        }

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let changed = conn
            .execute(
                "UPDATE agenda_events SET title = ?, date = ? WHERE id = ?",
                params![entity.title, entity.date.to_string(), entity.id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("Event {} not found", entity.id)));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute("DELETE FROM agenda_events WHERE id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }
}
