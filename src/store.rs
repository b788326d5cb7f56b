//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{AgendaEvent, Board, Card, ChecklistItem, Severity, Toast};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All boards for the current user, in tab order
    pub boards: Vec<Board>,
    /// All cards on the current board
    pub cards: Vec<Card>,
    /// Checklist items for the currently expanded card
    pub checklist: Vec<ChecklistItem>,
    /// Agenda events for the visible month
    pub events: Vec<AgendaEvent>,
    /// Current board ID
    pub current_board_id: u32,
    /// Current user ID
    pub current_user_id: u32,
    /// Pending toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Counter for toast IDs
    pub next_toast_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_board_id: 1,
            current_user_id: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Update a card in the store by ID
pub fn store_update_card(store: &AppStore, updated_card: Card) {
    store.cards().write().iter_mut()
        .find(|card| card.id == updated_card.id)
        .map(|card| *card = updated_card);
}

/// Remove a card from the store by ID
pub fn store_remove_card(store: &AppStore, card_id: u32) {
    store.cards().write().retain(|card| card.id != card_id);
}

/// Add a board to the store
pub fn store_add_board(store: &AppStore, board: Board) {
    store.boards().write().push(board);
}

/// Update a board in the store by ID
pub fn store_update_board(store: &AppStore, updated_board: Board) {
    store.boards().write().iter_mut()
        .find(|board| board.id == updated_board.id)
        .map(|board| *board = updated_board);
}

/// Remove a board from the store by ID
pub fn store_remove_board(store: &AppStore, board_id: u32) {
    store.boards().write().retain(|board| board.id != board_id);
}

/// Push a toast onto the notification stack
pub fn store_push_toast(store: &AppStore, title: &str, description: &str, severity: Severity) {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id + 1);
    store.toasts().write().push(Toast {
        id,
        title: title.to_string(),
        description: description.to_string(),
        severity,
    });
}

/// Remove a toast once dismissed or expired
pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}
