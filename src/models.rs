//! Frontend Models
//!
//! Data structures matching backend entities. The bridge returns loose
//! JSON; deserializing into these is the boundary validation.

use serde::{Deserialize, Serialize};

/// Board data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: u32,
    pub owner_id: u32,
    pub name: String,
    pub position: i32,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Card data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub board_id: u32,
    pub title: String,
    pub status: String,
    pub amount_cents: Option<i64>,
    pub position: i32,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Checklist entry on a card (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: u32,
    pub card_id: u32,
    pub text: String,
    pub done: bool,
    pub position: i32,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// User row in the admin view (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: Option<i64>,
}

/// One page of users plus the total match count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPage {
    pub users: Vec<User>,
    pub total: u32,
}

/// Agenda entry (matches backend; date is ISO `YYYY-MM-DD`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaEvent {
    pub id: u32,
    pub owner_id: u32,
    pub title: String,
    pub date: String,
    pub created_at: Option<i64>,
}

/// Dashboard month totals (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub income_cents: i64,
    pub expense_cents: i64,
}

/// Toast severity for the notification sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Transient user feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

/// Kanban columns in display order
pub const CARD_STATUSES: [&str; 3] = ["todo", "doing", "done"];

/// Column label for headers
pub fn status_label(status: &str) -> &'static str {
    match status {
        "doing" => "Doing",
        "done" => "Done",
        _ => "To do",
    }
}
