//! Delete Confirm Button Component
//!
//! Two-step delete used by the tab bar, card rows, checklists and the
//! admin table: a small × that flips into an inline confirm prompt.

use leptos::prelude::*;

/// Inline two-step delete button.
///
/// First click arms the prompt; only the ✓ runs `on_confirm`. All
/// clicks stop propagation so rows underneath don't also react.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    view! {
        {move || if armed.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"Delete?"</span>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_confirm.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(false);
                        }
                    >
                        "✗"
                    </button>
                </span>
            }.into_any()
        } else {
            let class = button_class.clone();
            view! {
                <button
                    class=class
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(true);
                    }
                >
                    "×"
                </button>
            }.into_any()
        }}
    }
}
