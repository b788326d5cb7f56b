//! Ordered Collection Sync
//!
//! Commits drag reorders to the backend and reconciles the store
//! afterwards. The store is updated optimistically before the call;
//! when the backend rejects the write we re-fetch the authoritative
//! order instead of guessing at a local rollback.

use crate::commands;
use crate::models::Severity;
use crate::store::{store_push_toast, AppStateStoreFields, AppStore};
use leptos::prelude::*;

/// Rearrange the store's boards to match `order`. Unknown ids are kept
/// at the tail so a stale snapshot never loses rows.
pub fn apply_board_order(store: &AppStore, order: &[u32]) {
    let boards_field = store.boards();
    let mut boards = boards_field.write();
    boards.sort_by_key(|b| {
        order
            .iter()
            .position(|id| *id == b.id)
            .unwrap_or(usize::MAX)
    });
}

/// Rearrange one column's cards in the store to match `order`.
pub fn apply_card_order(store: &AppStore, status: &str, order: &[u32]) {
    let cards_field = store.cards();
    let mut cards = cards_field.write();
    cards.sort_by_key(|c| {
        if c.status != status {
            return (0usize, c.position as i64);
        }
        let rank = order
            .iter()
            .position(|id| *id == c.id)
            .unwrap_or(usize::MAX);
        (1usize, rank as i64)
    });
}

/// Rearrange the expanded checklist in the store to match `order`.
pub fn apply_checklist_order(store: &AppStore, order: &[u32]) {
    let items_field = store.checklist();
    let mut items = items_field.write();
    items.sort_by_key(|i| {
        order
            .iter()
            .position(|id| *id == i.id)
            .unwrap_or(usize::MAX)
    });
}

/// Persist a board tab order; on failure, re-fetch the server's order.
pub async fn commit_board_order(store: AppStore, owner_id: u32, order: Vec<u32>) {
    if let Err(e) = commands::reorder_boards(owner_id, &order).await {
        store_push_toast(&store, "Reorder failed", &e, Severity::Error);
        if let Ok(boards) = commands::list_boards(owner_id).await {
            store.boards().set(boards);
        }
    }
}

/// Persist a card order within one column; on failure, re-fetch the board.
pub async fn commit_card_order(store: AppStore, board_id: u32, status: String, order: Vec<u32>) {
    if let Err(e) = commands::reorder_cards(board_id, &status, &order).await {
        store_push_toast(&store, "Reorder failed", &e, Severity::Error);
        if let Ok(cards) = commands::list_cards(board_id).await {
            store.cards().set(cards);
        }
    }
}

/// Persist a checklist order; on failure, re-fetch the checklist.
pub async fn commit_checklist_order(store: AppStore, card_id: u32, order: Vec<u32>) {
    if let Err(e) = commands::reorder_checklist(card_id, &order).await {
        store_push_toast(&store, "Reorder failed", &e, Severity::Error);
        if let Ok(items) = commands::list_checklist(card_id).await {
            store.checklist().set(items);
        }
    }
}
