//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Top-level views the nav switches between
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    Dashboard,
    Kanban,
    Agenda,
    Admin,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload cards from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload cards from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Which card's checklist is expanded (None = none) - read
    pub expanded_card: ReadSignal<Option<u32>>,
    /// Which card's checklist is expanded (None = none) - write
    set_expanded_card: WriteSignal<Option<u32>>,
    /// Current board ID - read
    pub current_board: ReadSignal<u32>,
    /// Active top-level view - read
    pub active_view: ReadSignal<View>,
    /// Active top-level view - write
    set_active_view: WriteSignal<View>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        expanded_card: (ReadSignal<Option<u32>>, WriteSignal<Option<u32>>),
        current_board: ReadSignal<u32>,
        active_view: (ReadSignal<View>, WriteSignal<View>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            expanded_card: expanded_card.0,
            set_expanded_card: expanded_card.1,
            current_board,
            active_view: active_view.0,
            set_active_view: active_view.1,
        }
    }

    /// Trigger a reload of cards
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Expand or collapse a card's checklist
    pub fn set_expanded_card(&self, card_id: Option<u32>) {
        self.set_expanded_card.set(card_id);
    }

    /// Switch the active view
    pub fn set_active_view(&self, view: View) {
        self.set_active_view.set(view);
    }
}
