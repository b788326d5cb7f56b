//! Finboard Frontend App
//!
//! Main application component with top nav and view switching.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{AgendaView, BoardTabBar, Dashboard, KanbanBoard, ToastStack, UserAdmin};
use crate::context::{AppContext, View};
use crate::models::Severity;
use crate::store::{store_push_toast, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    // State
    let (current_board, set_current_board) = signal(1u32);
    let (expanded_card, set_expanded_card) = signal::<Option<u32>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (active_view, set_active_view) = signal(View::Kanban);
    let owner_id = 1u32;

    // Provide context to all children
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (expanded_card, set_expanded_card),
        current_board,
        (active_view, set_active_view),
    ));

    // Load boards on mount
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            match commands::list_boards(owner_id).await {
                Ok(loaded) => {
                    if let Some(first) = loaded.first() {
                        if !loaded.iter().any(|b| b.id == current_board.get_untracked()) {
                            set_current_board.set(first.id);
                        }
                    }
                    store.boards().set(loaded);
                }
                Err(e) => store_push_toast(&store, "Load failed", &e, Severity::Error),
            }
        });
    });

    // Load cards when board or trigger changes
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let board_id = current_board.get();
        spawn_local(async move {
            match commands::list_cards(board_id).await {
                Ok(loaded) => store.cards().set(loaded),
                Err(e) => store_push_toast(&store, "Load failed", &e, Severity::Error),
            }
        });
    });

    let nav_button = move |view: View, label: &'static str| {
        let class = move || {
            if active_view.get() == view { "nav-btn active" } else { "nav-btn" }
        };
        view! {
            <button class=class on:click=move |_| set_active_view.set(view)>
                {label}
            </button>
        }
    };

    view! {
        <div class="app-layout">
            <nav class="top-nav">
                <span class="app-title">"Finboard"</span>
                {nav_button(View::Dashboard, "Dashboard")}
                {nav_button(View::Kanban, "Board")}
                {nav_button(View::Agenda, "Agenda")}
                {nav_button(View::Admin, "Users")}
            </nav>

            <main class="main-content">
                {move || match active_view.get() {
                    View::Dashboard => view! { <Dashboard /> }.into_any(),
                    View::Kanban => view! {
                        <BoardTabBar
                            current_board=current_board
                            set_current_board=set_current_board
                            owner_id=owner_id
                        />
                        <KanbanBoard board_id=current_board />
                    }.into_any(),
                    View::Agenda => view! { <AgendaView owner_id=owner_id /> }.into_any(),
                    View::Admin => view! { <UserAdmin /> }.into_any(),
                }}
            </main>

            <ToastStack />
        </div>
    }
}
