//! New Card Form Component
//!
//! Inline form for adding a card to a kanban column.

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::commands::{self, CreateCardArgs};
use crate::models::Severity;
use crate::store::{store_push_toast, use_app_store, AppStateStoreFields};

/// Parse a decimal amount like "12.50" or "-3" into cents.
pub fn parse_amount_cents(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, trimmed),
    };
    let (whole, frac) = match digits.split_once('.') {
        Some((w, f)) => (w, f),
        None => (digits, ""),
    };
    if frac.len() > 2 {
        return None;
    }
    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut frac_cents: i64 = if frac.is_empty() { 0 } else { frac.parse().ok()? };
    if frac.len() == 1 {
        frac_cents *= 10;
    }
    Some(sign * (whole * 100 + frac_cents))
}

/// New card form pinned to the bottom of a column
#[component]
pub fn NewCardForm(board_id: ReadSignal<u32>, status: &'static str) -> impl IntoView {
    let store = use_app_store();
    let (title, set_title) = signal(String::new());
    let (amount, set_amount) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get();
        if title_value.trim().is_empty() {
            store_push_toast(&store, "Invalid card", "A title is required", Severity::Error);
            return;
        }
        let raw_amount = amount.get();
        let amount_cents = if raw_amount.trim().is_empty() {
            None
        } else {
            match parse_amount_cents(&raw_amount) {
                Some(cents) => Some(cents),
                None => {
                    store_push_toast(&store, "Invalid card", "Amount must be a number", Severity::Error);
                    return;
                }
            }
        };

        let args_board = board_id.get_untracked();
        spawn_local(async move {
            let args = CreateCardArgs {
                board_id: args_board,
                title: &title_value,
                status,
                amount_cents,
            };
            match commands::create_card(&args).await {
                Ok(card) => store.cards().write().push(card),
                Err(e) => store_push_toast(&store, "Create failed", &e, Severity::Error),
            }
        });

        set_title.set(String::new());
        set_amount.set(String::new());
    };

    view! {
        <form class="new-card-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Card title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="text"
                class="amount-input"
                placeholder="Amount"
                prop:value=move || amount.get()
                on:input=move |ev| set_amount.set(event_target_value(&ev))
            />
            <button type="submit">"+"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_amount_cents;

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!(parse_amount_cents("12.50"), Some(1250));
        assert_eq!(parse_amount_cents("12.5"), Some(1250));
        assert_eq!(parse_amount_cents("3"), Some(300));
        assert_eq!(parse_amount_cents("-3.07"), Some(-307));
        assert_eq!(parse_amount_cents(".99"), Some(99));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_amount_cents("abc"), None);
        assert_eq!(parse_amount_cents("1.234"), None);
        assert_eq!(parse_amount_cents("1.2.3"), None);
        assert_eq!(parse_amount_cents(""), None);
    }
}
