//! Kanban Board Component
//!
//! Three status columns of cards with drag-to-reorder inside a column
//! and arrow buttons for moving a card across columns.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_sortable::{
    bind_global_mouseup, create_sort_signals, make_on_item_mouseenter, make_on_mousedown,
    make_on_mouseleave, SessionSignal, SortSignals,
};
use crate::commands;
use crate::components::{CardChecklist, DeleteConfirmButton, NewCardForm};
use crate::context::AppContext;
use crate::models::{status_label, Card, Severity, CARD_STATUSES};
use crate::store::{
    store_push_toast, store_remove_card, store_update_card, use_app_store, AppStateStoreFields,
    AppStore,
};
use crate::sync::{apply_card_order, commit_card_order};

fn column_order(store: &AppStore, status: &str) -> Vec<u32> {
    store
        .cards()
        .read_untracked()
        .iter()
        .filter(|c| c.status == status)
        .map(|c| c.id)
        .collect()
}

fn reload_board(store: AppStore, board_id: u32) {
    spawn_local(async move {
        match commands::list_cards(board_id).await {
            Ok(cards) => store.cards().set(cards),
            Err(e) => store_push_toast(&store, "Load failed", &e, Severity::Error),
        }
    });
}

/// Kanban Board component
#[component]
pub fn KanbanBoard(board_id: ReadSignal<u32>) -> impl IntoView {
    let store = use_app_store();

    let dnd = create_sort_signals();
    // One drag session per column; a drag only ever begins in the
    // column holding the dragged card
    let sessions = CARD_STATUSES.map(|_| SessionSignal::new());

    bind_global_mouseup(dnd, move |dragged: u32, over: Option<u32>| {
        let cards = store.cards().read_untracked();
        let Some(dragged_card) = cards.iter().find(|c| c.id == dragged) else {
            for s in sessions { s.clear(); }
            return;
        };
        let status = dragged_card.status.clone();
        let over_status = over.and_then(|oid| {
            cards.iter().find(|c| c.id == oid).map(|c| c.status.clone())
        });
        drop(cards);
        let col = CARD_STATUSES.iter().position(|s| *s == status).unwrap_or(0);

        match over_status {
            Some(target) if target != status => {
                // Dropped onto a card in another column: land at that card's slot
                sessions[col].clear();
                let over_id = over.unwrap_or(dragged);
                let target_order = column_order(&store, &target);
                let position = target_order.iter().position(|id| *id == over_id).unwrap_or(0) as i32;
                let bid = board_id.get_untracked();
                spawn_local(async move {
                    match commands::move_card(dragged, &target, position).await {
                        Ok(_) => reload_board(store, bid),
                        Err(e) => store_push_toast(&store, "Move failed", &e, Severity::Error),
                    }
                });
            }
            _ => {
                // Same column (or dropped in the open): commit the last
                // candidate order, if anything moved
                if let Some(new_order) = sessions[col].finish() {
                    apply_card_order(&store, &status, &new_order);
                    spawn_local(commit_card_order(store, board_id.get_untracked(), status, new_order));
                }
            }
        }
    });

    view! {
        <div class="kanban-board">
            {CARD_STATUSES.into_iter().enumerate().map(|(i, status)| view! {
                <KanbanColumn board_id=board_id status=status dnd=dnd session=sessions[i] />
            }).collect_view()}
        </div>
    }
}

#[component]
fn KanbanColumn(
    board_id: ReadSignal<u32>,
    status: &'static str,
    dnd: SortSignals,
    session: SessionSignal,
) -> impl IntoView {
    let store = use_app_store();

    session.track(dnd, move || column_order(&store, status));

    // Candidate order during a drag, committed order otherwise
    let column_cards = Memo::new(move |_| {
        let mut cards = store
            .cards()
            .get()
            .into_iter()
            .filter(|c| c.status == status)
            .collect::<Vec<_>>();
        if let Some(order) = session.candidate() {
            cards.sort_by_key(|c| {
                order.iter().position(|id| *id == c.id).unwrap_or(usize::MAX)
            });
        }
        cards
    });

    view! {
        <div class="kanban-column">
            <h2>{status_label(status)}</h2>
            <div class="column-cards">
                <For
                    each=move || column_cards.get()
                    key=|c| (c.id, c.title.clone(), c.amount_cents)
                    children=move |card| view! {
                        <CardRow card=card board_id=board_id dnd=dnd />
                    }
                />
            </div>
            <NewCardForm board_id=board_id status=status />
        </div>
    }
}

#[component]
fn CardRow(card: Card, board_id: ReadSignal<u32>, dnd: SortSignals) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = card.id;
    let status = card.status.clone();

    let (editing, set_editing) = signal(false);
    let (edit_title, set_edit_title) = signal(card.title.clone());

    let row_class = move || {
        let mut class = String::from("card-row");
        if dnd.dragging_id_read.get() == Some(id) { class.push_str(" dragging"); }
        if dnd.over_id_read.get() == Some(id) { class.push_str(" drop-target"); }
        class
    };

    let on_delete = Callback::new(move |_| {
        spawn_local(async move {
            match commands::delete_card(id).await {
                Ok(()) => store_remove_card(&store, id),
                Err(e) => store_push_toast(&store, "Delete failed", &e, Severity::Error),
            }
        });
    });

    let on_rename = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = edit_title.get();
        if title.trim().is_empty() {
            store_push_toast(&store, "Invalid card", "A title is required", Severity::Error);
            return;
        }
        spawn_local(async move {
            match commands::update_card(id, Some(&title), None).await {
                Ok(updated) => store_update_card(&store, updated),
                Err(e) => store_push_toast(&store, "Update failed", &e, Severity::Error),
            }
        });
        set_editing.set(false);
    };

    let move_across = move |target: &'static str| {
        let bid = board_id.get_untracked();
        spawn_local(async move {
            // Append at the end of the target column
            let count = store
                .cards()
                .read_untracked()
                .iter()
                .filter(|c| c.status == target)
                .count() as i32;
            match commands::move_card(id, target, count).await {
                Ok(_) => reload_board(store, bid),
                Err(e) => store_push_toast(&store, "Move failed", &e, Severity::Error),
            }
        });
    };

    let col_index = CARD_STATUSES.iter().position(|s| *s == status).unwrap_or(0);
    let prev_status = col_index.checked_sub(1).map(|i| CARD_STATUSES[i]);
    let next_status = CARD_STATUSES.get(col_index + 1).copied();

    let amount_text = card.amount_cents.map(|cents| {
        format!("{}{}.{:02}", if cents < 0 { "-" } else { "" }, cents.abs() / 100, cents.abs() % 100)
    });

    view! {
        <div
            class=row_class
            on:mousedown=make_on_mousedown(dnd, id)
            on:mouseenter=make_on_item_mouseenter(dnd, id)
            on:mouseleave=make_on_mouseleave(dnd)
        >
            {move || if editing.get() {
                view! {
                    <form class="card-edit-form" on:submit=on_rename>
                        <input
                            type="text"
                            prop:value=move || edit_title.get()
                            on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                        />
                        <button type="submit">"✓"</button>
                    </form>
                }.into_any()
            } else {
                let title = edit_title.get_untracked();
                view! {
                    <span class="card-title" on:dblclick=move |_| set_editing.set(true)>
                        {title}
                    </span>
                }.into_any()
            }}
            {amount_text.map(|t| view! { <span class="card-amount">{t}</span> })}

            <span class="card-actions">
                {prev_status.map(|target| view! {
                    <button class="move-btn" on:click=move |_| move_across(target)>"←"</button>
                })}
                {next_status.map(|target| view! {
                    <button class="move-btn" on:click=move |_| move_across(target)>"→"</button>
                })}
                <button
                    class="checklist-btn"
                    on:click=move |_| {
                        let current = ctx.expanded_card.get_untracked();
                        ctx.set_expanded_card(if current == Some(id) { None } else { Some(id) });
                    }
                >
                    "☰"
                </button>
                <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
            </span>

            <Show when=move || ctx.expanded_card.get() == Some(id)>
                <CardChecklist card_id=id />
            </Show>
        </div>
    }
}
