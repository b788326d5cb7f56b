//! Card and Checklist Commands
//!
//! Kanban operations: card CRUD, in-column and cross-column moves,
//! checklist CRUD/reorder, and the dashboard summary.

use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Card, CardStatus, ChecklistItem};
use crate::repository::{CardColumnOperations, ColumnScope, OrderedRepository, Repository};
use crate::AppState;

/// All cards of a board, every column, display order
pub async fn list_cards(state: &AppState, board_id: u32) -> Result<Vec<Card>, String> {
    state.card_repo.list_by_board(board_id).await.map_err(|e| e.to_string())
}

/// Create a card at the bottom of a column
pub async fn create_card(
    state: &AppState,
    board_id: u32,
    title: String,
    status: Option<String>,
    amount_cents: Option<i64>,
) -> Result<Card, String> {
    let status = status.as_deref().map(CardStatus::from_str).unwrap_or_default();
    let mut card = Card::new(0, board_id, title, status);
    card.amount_cents = amount_cents;
    state.card_repo.create(&card).await.map_err(|e| e.to_string())
}

/// Update card title/amount
pub async fn update_card(
    state: &AppState,
    id: u32,
    title: Option<String>,
    amount_cents: Option<i64>,
) -> Result<Card, String> {
    let existing = state
        .card_repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Card {} not found", id))?;

    let updated = Card {
        title: title.unwrap_or(existing.title),
        amount_cents: amount_cents.or(existing.amount_cents),
        ..existing
    };
    state.card_repo.update(&updated).await.map_err(|e| e.to_string())
}

/// Delete a card and its checklist
pub async fn delete_card(state: &AppState, id: u32) -> Result<(), String> {
    let card = state
        .card_repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Card {} not found", id))?;

    state.card_repo.delete(id).await.map_err(|e| e.to_string())?;
    state
        .card_repo
        .reindex(&ColumnScope::new(card.board_id, card.status))
        .await
        .map_err(|e| e.to_string())
}

/// Persist a new order within one column; returns rows written
pub async fn reorder_cards(
    state: &AppState,
    board_id: u32,
    status: String,
    order: Vec<u32>,
) -> Result<u32, String> {
    let scope = ColumnScope::new(board_id, CardStatus::from_str(&status));
    state.card_repo.reorder(&scope, &order).await.map_err(|e| e.to_string())
}

/// Move a card into another column at a position
pub async fn move_card(state: &AppState, id: u32, status: String, position: i32) -> Result<Card, String> {
    state
        .card_repo
        .move_to_column(id, CardStatus::from_str(&status), position)
        .await
        .map_err(|e| e.to_string())
}

// ========================
// Checklist
// ========================

/// A card's checklist in display order
pub async fn list_checklist(state: &AppState, card_id: u32) -> Result<Vec<ChecklistItem>, String> {
    state
        .checklist_repo
        .list_by_scope(&card_id)
        .await
        .map_err(|e| e.to_string())
}

/// Append a checklist entry
pub async fn create_checklist_item(state: &AppState, card_id: u32, text: String) -> Result<ChecklistItem, String> {
    state
        .checklist_repo
        .create(&ChecklistItem::new(0, card_id, text, 0))
        .await
        .map_err(|e| e.to_string())
}

/// Check/uncheck an entry
pub async fn toggle_checklist_item(state: &AppState, id: u32) -> Result<ChecklistItem, String> {
    state.checklist_repo.toggle_done(id).await.map_err(|e| e.to_string())
}

/// Remove an entry and close the position gap
pub async fn delete_checklist_item(state: &AppState, id: u32) -> Result<(), String> {
    let item = state
        .checklist_repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Checklist item {} not found", id))?;

    state.checklist_repo.delete(id).await.map_err(|e| e.to_string())?;
    state
        .checklist_repo
        .reindex(&item.card_id)
        .await
        .map_err(|e| e.to_string())
}

/// Persist a new checklist order; returns rows written
pub async fn reorder_checklist(state: &AppState, card_id: u32, order: Vec<u32>) -> Result<u32, String> {
    state
        .checklist_repo
        .reorder(&card_id, &order)
        .await
        .map_err(|e| e.to_string())
}

// ========================
// Dashboard
// ========================

/// Month totals over done cards with amounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub income_cents: i64,
    pub expense_cents: i64,
}

/// Income/expense summary for one month
pub async fn month_summary(state: &AppState, year: i32, month: u32) -> Result<MonthSummary, String> {
    let from = NaiveDate::from_ymd_opt(year, month, 1).ok_or("Invalid month")?;
    let to = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or("Invalid month")?;

    let from_millis = Utc
        .from_utc_datetime(&from.and_hms_opt(0, 0, 0).ok_or("Invalid month")?)
        .timestamp_millis();
    let to_millis = Utc
        .from_utc_datetime(&to.and_hms_opt(0, 0, 0).ok_or("Invalid month")?)
        .timestamp_millis();

    let (income_cents, expense_cents) = state
        .card_repo
        .amount_totals(from_millis, to_millis)
        .await
        .map_err(|e| e.to_string())?;

    Ok(MonthSummary {
        year: from.year(),
        month: from.month(),
        income_cents,
        expense_cents,
    })
}
