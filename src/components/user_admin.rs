//! User Admin Component
//!
//! User directory with debounced search, pagination, role changes and
//! invitations.

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::commands;
use crate::components::{DeleteConfirmButton, PageControls};
use crate::debounce::use_debounced;
use crate::models::{Severity, User};
use crate::store::{store_push_toast, use_app_store};

/// Admin user table
#[component]
pub fn UserAdmin() -> impl IntoView {
    let store = use_app_store();

    let (raw_query, set_raw_query) = signal(String::new());
    let (query, set_query) = signal(String::new());
    let debounce_input = use_debounced(set_query);

    let (current_page, set_current_page) = signal(1u32);
    let (page_size, set_page_size) = signal(10u32);
    let (users, set_users) = signal(Vec::<User>::new());
    let (total, set_total) = signal(0u32);
    let (reload, set_reload) = signal(0u32);

    // A new query starts back at page 1
    Effect::new(move |_| {
        let _ = query.get();
        set_current_page.set(1);
    });

    Effect::new(move |_| {
        let _ = reload.get();
        let q = query.get();
        let page = current_page.get();
        let size = page_size.get();
        spawn_local(async move {
            match commands::search_users(&q, page, size).await {
                Ok(result) => {
                    set_users.set(result.users);
                    set_total.set(result.total);
                }
                Err(e) => store_push_toast(&store, "Search failed", &e, Severity::Error),
            }
        });
    });

    let (invite_name, set_invite_name) = signal(String::new());
    let (invite_email, set_invite_email) = signal(String::new());
    let on_invite = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = invite_name.get();
        let email = invite_email.get();
        if name.trim().is_empty() || email.trim().is_empty() {
            store_push_toast(&store, "Invalid invite", "Name and email are required", Severity::Error);
            return;
        }
        spawn_local(async move {
            match commands::invite_user(&name, &email).await {
                Ok(_) => {
                    store_push_toast(&store, "User invited", &email, Severity::Success);
                    set_reload.update(|v| *v += 1);
                }
                Err(e) => store_push_toast(&store, "Invite failed", &e, Severity::Error),
            }
        });
        set_invite_name.set(String::new());
        set_invite_email.set(String::new());
    };

    view! {
        <div class="user-admin">
            <input
                type="text"
                class="user-search"
                placeholder="Search name or email"
                prop:value=move || raw_query.get()
                on:input={
                    let debounce_input = debounce_input.clone();
                    move |ev| {
                        let value = event_target_value(&ev);
                        set_raw_query.set(value.clone());
                        debounce_input(value);
                    }
                }
            />

            <form class="invite-form" on:submit=on_invite>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || invite_name.get()
                    on:input=move |ev| set_invite_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || invite_email.get()
                    on:input=move |ev| set_invite_email.set(event_target_value(&ev))
                />
                <button type="submit">"Invite"</button>
            </form>

            <table class="user-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || users.get()
                        key=|u| (u.id, u.role.clone())
                        children=move |user| {
                            let id = user.id;
                            let role = user.role.clone();
                            let on_role_change = move |ev: web_sys::Event| {
                                let new_role = event_target_value(&ev);
                                spawn_local(async move {
                                    match commands::set_user_role(id, &new_role).await {
                                        Ok(_) => set_reload.update(|v| *v += 1),
                                        Err(e) => store_push_toast(&store, "Role change failed", &e, Severity::Error),
                                    }
                                });
                            };
                            let on_delete = Callback::new(move |_| {
                                spawn_local(async move {
                                    match commands::delete_user(id).await {
                                        Ok(()) => set_reload.update(|v| *v += 1),
                                        Err(e) => store_push_toast(&store, "Delete failed", &e, Severity::Error),
                                    }
                                });
                            });

                            view! {
                                <tr>
                                    <td>{user.name.clone()}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>
                                        <select on:change=on_role_change>
                                            <option value="member" selected=role == "member">"Member"</option>
                                            <option value="admin" selected=role == "admin">"Admin"</option>
                                        </select>
                                    </td>
                                    <td>
                                        <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <PageControls
                current_page=current_page
                set_current_page=set_current_page
                page_size=page_size
                set_page_size=set_page_size
                total_items=Signal::derive(move || total.get())
            />
        </div>
    }
}
