//! User Repository
//!
//! Handles user records for the admin view: CRUD, role changes, and paged
//! name/email search backing the debounced filter input.

use async_trait::async_trait;
use rusqlite::params;

use crate::domain::{DomainError, DomainResult, User, UserRole};
use super::db::SharedConn;
use super::traits::{Repository, SearchableRepository};

pub struct UserRepository {
    conn: SharedConn,
}

const USER_COLS: &str = "id, name, email, role, created_at";

fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    let role: String = row.get(3)?;
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        role: UserRole::from_str(&role),
        created_at: row.get(4)?,
    })
}

/// LIKE patterns treat % and _ as wildcards; user input must not
fn like_pattern(query: &str) -> String {
    let escaped = query.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
    format!("%{}%", escaped)
}

impl UserRepository {
    pub fn new(conn: SharedConn) -> Self {
        Self { conn }
    }

    /// Change a user's role
    pub async fn set_role(&self, id: u32, role: UserRole) -> DomainResult<User> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let changed = conn
            .execute("UPDATE users SET role = ? WHERE id = ?", params![role.as_str(), id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("User {} not found", id)));
        }
        drop(guard);

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("User {} not found", id)))
    }
}

#[async_trait]
impl Repository<User> for UserRepository {
    async fn create(&self, entity: &User) -> DomainResult<User> {
        if entity.name.trim().is_empty() || entity.email.trim().is_empty() {
            return Err(DomainError::InvalidInput("Name and email are required".into()));
        }

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let now = chrono::Utc::now().timestamp_millis();
        conn.execute(
            "INSERT INTO users (name, email, role, created_at) VALUES (?, ?, ?, ?)",
            params![entity.name, entity.email, entity.role.as_str(), now],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(err, _)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                DomainError::Conflict(format!("Email {} is already registered", entity.email))
            }
            other => DomainError::Internal(other.to_string()),
        })?;

        let id = conn.last_insert_rowid() as u32;
        let mut created = User::new(id, entity.name.clone(), entity.email.clone(), entity.role);
        created.created_at = Some(now);
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<User>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM users WHERE id = ?", USER_COLS))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query_map(params![id], row_to_user)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        match rows.next() {
            Some(row) => Ok(Some(row.map_err(|e| DomainError::Internal(e.to_string()))?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM users ORDER BY created_at, id", USER_COLS))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let rows = stmt
            .query_map([], row_to_user)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    async fn update(&self, entity: &User) -> DomainResult<User> {
        if entity.name.trim().is_empty() || entity.email.trim().is_empty() {
            return Err(DomainError::InvalidInput("Name and email are required".into()));
        }

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let changed = conn
            .execute(
                "UPDATE users SET name = ?, email = ?, role = ? WHERE id = ?",
                params![entity.name, entity.email, entity.role.as_str(), entity.id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("User {} not found", entity.id)));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute("DELETE FROM users WHERE id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl SearchableRepository<User> for UserRepository {
    async fn search_page(&self, query: &str, limit: u32, offset: u32) -> DomainResult<(Vec<User>, u32)> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let pattern = like_pattern(query.trim());

        let total: u32 = conn
            .query_row(
                "SELECT COUNT(*) FROM users
                 WHERE name LIKE ? ESCAPE '\\' OR email LIKE ? ESCAPE '\\'",
                params![pattern, pattern],
                |row| row.get(0),
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM users
                 WHERE name LIKE ? ESCAPE '\\' OR email LIKE ? ESCAPE '\\'
                 ORDER BY created_at, id LIMIT ? OFFSET ?",
                USER_COLS
            ))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let rows = stmt
            .query_map(params![pattern, pattern, limit, offset], row_to_user)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let users = rows
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok((users, total))
    }
}
