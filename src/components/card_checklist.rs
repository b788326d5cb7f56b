//! Card Checklist Component
//!
//! Expandable checklist under a card, with drag-to-reorder.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_sortable::{
    bind_global_mouseup, create_sort_signals, make_on_item_mouseenter, make_on_mousedown,
    make_on_mouseleave, SessionSignal,
};
use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::models::Severity;
use crate::store::{store_push_toast, use_app_store, AppStateStoreFields};
use crate::sync::{apply_checklist_order, commit_checklist_order};

/// Checklist for one expanded card
#[component]
pub fn CardChecklist(card_id: u32) -> impl IntoView {
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    // Load the checklist when expanded
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_checklist(card_id).await {
                Ok(items) => store.checklist().set(items),
                Err(e) => store_push_toast(&store, "Load failed", &e, Severity::Error),
            }
        });
    });

    let dnd = create_sort_signals();
    let session = SessionSignal::new();
    session.track(dnd, move || {
        store.checklist().read_untracked().iter().map(|i| i.id).collect()
    });
    bind_global_mouseup(dnd, move |_dragged: u32, _over: Option<u32>| {
        let Some(new_order) = session.finish() else { return };
        apply_checklist_order(&store, &new_order);
        spawn_local(commit_checklist_order(store, card_id, new_order));
    });

    // Render the candidate order while a drag is in flight
    let ordered_items = Memo::new(move |_| {
        let mut items = store.checklist().get();
        if let Some(order) = session.candidate() {
            items.sort_by_key(|i| {
                order.iter().position(|id| *id == i.id).unwrap_or(usize::MAX)
            });
        }
        items
    });

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() { return; }

        spawn_local(async move {
            match commands::create_checklist_item(card_id, &text).await {
                Ok(item) => store.checklist().write().push(item),
                Err(e) => store_push_toast(&store, "Create failed", &e, Severity::Error),
            }
        });
        set_new_text.set(String::new());
    };

    view! {
        <div class="card-checklist">
            <For
                each=move || ordered_items.get()
                key=|i| (i.id, i.done)
                children=move |item| {
                    let id = item.id;
                    let row_class = move || {
                        let mut class = String::from("checklist-row");
                        if dnd.dragging_id_read.get() == Some(id) { class.push_str(" dragging"); }
                        if dnd.over_id_read.get() == Some(id) { class.push_str(" drop-target"); }
                        class
                    };
                    let on_toggle = move |_| {
                        spawn_local(async move {
                            match commands::toggle_checklist_item(id).await {
                                Ok(updated) => {
                                    store.checklist().write().iter_mut()
                                        .find(|i| i.id == updated.id)
                                        .map(|i| *i = updated);
                                }
                                Err(e) => store_push_toast(&store, "Update failed", &e, Severity::Error),
                            }
                        });
                    };
                    let on_delete = Callback::new(move |_| {
                        spawn_local(async move {
                            match commands::delete_checklist_item(id).await {
                                Ok(()) => {
                                    store.checklist().write().retain(|i| i.id != id);
                                }
                                Err(e) => store_push_toast(&store, "Delete failed", &e, Severity::Error),
                            }
                        });
                    });

                    view! {
                        <div
                            class=row_class
                            on:mousedown=make_on_mousedown(dnd, id)
                            on:mouseenter=make_on_item_mouseenter(dnd, id)
                            on:mouseleave=make_on_mouseleave(dnd)
                        >
                            <input
                                type="checkbox"
                                prop:checked=item.done
                                on:change=on_toggle
                            />
                            <span class=move || if item.done { "checklist-text done" } else { "checklist-text" }>
                                {item.text.clone()}
                            </span>
                            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
                        </div>
                    }
                }
            />

            <form class="checklist-add-form" on:submit=on_add>
                <input
                    type="text"
                    placeholder="New item"
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit">"+"</button>
            </form>
        </div>
    }
}
