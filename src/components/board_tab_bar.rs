//! Board Tab Bar Component
//!
//! Tab bar for switching between boards, with drag-to-reorder.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_sortable::{
    bind_global_mouseup, create_sort_signals, make_on_item_mouseenter, make_on_mousedown,
    make_on_mouseleave, SessionSignal,
};
use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::store::{
    store_add_board, store_remove_board, store_update_board, use_app_store, AppStateStoreFields,
};
use crate::sync::{apply_board_order, commit_board_order};

/// Board Tab Bar component
#[component]
pub fn BoardTabBar(
    current_board: ReadSignal<u32>,
    set_current_board: WriteSignal<u32>,
    owner_id: u32,
) -> impl IntoView {
    let store = use_app_store();
    let (adding, set_adding) = signal(false);
    let (new_name, set_new_name) = signal(String::new());
    let (renaming_id, set_renaming_id) = signal::<Option<u32>>(None);
    let (rename_value, set_rename_value) = signal(String::new());

    let dnd = create_sort_signals();
    let session = SessionSignal::new();
    session.track(dnd, move || {
        store.boards().read_untracked().iter().map(|b| b.id).collect()
    });
    bind_global_mouseup(dnd, move |_dragged: u32, _over: Option<u32>| {
        let Some(new_order) = session.finish() else { return };
        apply_board_order(&store, &new_order);
        spawn_local(commit_board_order(store, owner_id, new_order));
    });

    // Render the candidate order while a drag is in flight
    let ordered_boards = Memo::new(move |_| {
        let mut boards = store.boards().get();
        if let Some(order) = session.candidate() {
            boards.sort_by_key(|b| {
                order.iter().position(|id| *id == b.id).unwrap_or(usize::MAX)
            });
        }
        boards
    });

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if name.is_empty() { return; }

        spawn_local(async move {
            if let Ok(new_board) = commands::create_board(owner_id, &name).await {
                store_add_board(&store, new_board);
            }
        });

        set_new_name.set(String::new());
        set_adding.set(false);
    };

    view! {
        <div class="board-tab-bar">
            <For
                each=move || ordered_boards.get()
                key=|b| b.id
                children=move |board| {
                    let id = board.id;
                    let is_active = move || current_board.get() == id;
                    let tab_class = move || {
                        let mut class = String::from("board-tab");
                        if is_active() { class.push_str(" active"); }
                        if dnd.dragging_id_read.get() == Some(id) { class.push_str(" dragging"); }
                        if dnd.over_id_read.get() == Some(id) { class.push_str(" drop-target"); }
                        class
                    };
                    let on_delete = Callback::new(move |_| {
                        spawn_local(async move {
                            if commands::delete_board(id).await.is_ok() {
                                store_remove_board(&store, id);
                            }
                        });
                    });

                    let name_for_edit = board.name.clone();
                    let on_rename = move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        let name = rename_value.get();
                        if name.is_empty() { return; }
                        spawn_local(async move {
                            if let Ok(updated) = commands::rename_board(id, &name).await {
                                store_update_board(&store, updated);
                            }
                        });
                        set_renaming_id.set(None);
                    };

                    view! {
                        <span
                            class=tab_class
                            on:mousedown=make_on_mousedown(dnd, id)
                            on:mouseenter=make_on_item_mouseenter(dnd, id)
                            on:mouseleave=make_on_mouseleave(dnd)
                            on:click=move |_| {
                                // Suppress the click that follows a drop
                                if !dnd.drag_just_ended_read.get_untracked() {
                                    set_current_board.set(id);
                                }
                            }
                            on:dblclick=move |_| {
                                set_rename_value.set(name_for_edit.clone());
                                set_renaming_id.set(Some(id));
                            }
                        >
                            {move || if renaming_id.get() == Some(id) {
                                view! {
                                    <form class="board-rename-form" on:submit=on_rename>
                                        <input
                                            type="text"
                                            prop:value=move || rename_value.get()
                                            on:input=move |ev| set_rename_value.set(event_target_value(&ev))
                                        />
                                    </form>
                                }.into_any()
                            } else {
                                view! { <span>{board.name.clone()}</span> }.into_any()
                            }}
                            <DeleteConfirmButton button_class="tab-delete-btn" on_confirm=on_delete />
                        </span>
                    }
                }
            />

            {move || if adding.get() {
                view! {
                    <form class="board-add-form" on:submit=on_add>
                        <input
                            type="text"
                            placeholder="Board name"
                            prop:value=move || new_name.get()
                            on:input=move |ev| set_new_name.set(event_target_value(&ev))
                        />
                        <button type="submit">"+"</button>
                        <button type="button" on:click=move |_| set_adding.set(false)>"×"</button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <button
                        class="board-add-btn"
                        on:click=move |_| set_adding.set(true)
                    >
                        "+"
                    </button>
                }.into_any()
            }}
        </div>
    }
}
