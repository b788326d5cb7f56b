//! Agenda View Component
//!
//! Monday-first month grid with events, plus a quick-add form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::calendar::{month_end, month_grid, month_start, next_month, prev_month};
use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::models::Severity;
use crate::store::{store_push_toast, use_app_store, AppStateStoreFields};

fn current_year_month() -> (i32, u32) {
    let now = js_sys::Date::new_0();
    (now.get_full_year() as i32, now.get_month() as u32 + 1)
}

/// Agenda component
#[component]
pub fn AgendaView(owner_id: u32) -> impl IntoView {
    let store = use_app_store();
    let (year_month, set_year_month) = signal(current_year_month());
    let (new_title, set_new_title) = signal(String::new());
    let (new_date, set_new_date) = signal(String::new());
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        let (year, month) = year_month.get();
        let (Some(from), Some(to)) = (month_start(year, month), month_end(year, month)) else {
            return;
        };
        spawn_local(async move {
            match commands::list_events(owner_id, &from.to_string(), &to.to_string()).await {
                Ok(events) => store.events().set(events),
                Err(e) => store_push_toast(&store, "Load failed", &e, Severity::Error),
            }
        });
    });

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        let date = new_date.get();
        if title.trim().is_empty() || date.is_empty() {
            store_push_toast(&store, "Invalid event", "Title and date are required", Severity::Error);
            return;
        }
        spawn_local(async move {
            match commands::create_event(owner_id, &title, &date).await {
                Ok(_) => set_reload.update(|v| *v += 1),
                Err(e) => store_push_toast(&store, "Create failed", &e, Severity::Error),
            }
        });
        set_new_title.set(String::new());
    };

    view! {
        <div class="agenda">
            <div class="month-nav">
                <button on:click=move |_| {
                    let (y, m) = year_month.get_untracked();
                    set_year_month.set(prev_month(y, m));
                }>"‹"</button>
                <span class="month-label">
                    {move || { let (y, m) = year_month.get(); format!("{y}-{m:02}") }}
                </span>
                <button on:click=move |_| {
                    let (y, m) = year_month.get_untracked();
                    set_year_month.set(next_month(y, m));
                }>"›"</button>
            </div>

            <form class="event-add-form" on:submit=on_add>
                <input
                    type="text"
                    placeholder="Event title"
                    prop:value=move || new_title.get()
                    on:input=move |ev| set_new_title.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || new_date.get()
                    on:input=move |ev| set_new_date.set(event_target_value(&ev))
                />
                <button type="submit">"+"</button>
            </form>

            <div class="month-grid">
                <div class="weekday-header">
                    {["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"].into_iter()
                        .map(|d| view! { <span class="weekday">{d}</span> })
                        .collect_view()}
                </div>
                {move || {
                    let (year, month) = year_month.get();
                    month_grid(year, month).into_iter().map(|week| view! {
                        <div class="week-row">
                            {week.into_iter().map(|day| {
                                let iso = day.date.to_string();
                                let day_num = {
                                    use chrono::Datelike;
                                    day.date.day()
                                };
                                let cell_class = if day.in_month { "day-cell" } else { "day-cell pad" };
                                let day_events = Memo::new({
                                    let iso = iso.clone();
                                    move |_| {
                                        store.events().get().into_iter()
                                            .filter(|e| e.date == iso)
                                            .collect::<Vec<_>>()
                                    }
                                });
                                view! {
                                    <div class=cell_class>
                                        <span class="day-number">{day_num}</span>
                                        <For
                                            each=move || day_events.get()
                                            key=|e| e.id
                                            children=move |event| {
                                                let id = event.id;
                                                let on_delete = Callback::new(move |_| {
                                                    spawn_local(async move {
                                                        match commands::delete_event(id).await {
                                                            Ok(()) => {
                                                                store.events().write().retain(|e| e.id != id);
                                                            }
                                                            Err(e) => store_push_toast(&store, "Delete failed", &e, Severity::Error),
                                                        }
                                                    });
                                                });
                                                view! {
                                                    <span class="event-chip">
                                                        {event.title.clone()}
                                                        <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
                                                    </span>
                                                }
                                            }
                                        />
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }).collect_view()
                }}
            </div>
        </div>
    }
}
