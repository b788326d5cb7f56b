//! Dashboard Component
//!
//! Month summary of income and expenses from done cards.

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::calendar::{next_month, prev_month};
use crate::commands;
use crate::models::{MonthSummary, Severity};
use crate::store::{store_push_toast, use_app_store};

fn format_cents(cents: i64) -> String {
    format!("{}{}.{:02}", if cents < 0 { "-" } else { "" }, cents.abs() / 100, cents.abs() % 100)
}

fn current_year_month() -> (i32, u32) {
    let now = js_sys::Date::new_0();
    (now.get_full_year() as i32, now.get_month() as u32 + 1)
}

/// Dashboard component
#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_app_store();
    let (year_month, set_year_month) = signal(current_year_month());
    let (summary, set_summary) = signal(None::<MonthSummary>);

    Effect::new(move |_| {
        let (year, month) = year_month.get();
        spawn_local(async move {
            match commands::month_summary(year, month).await {
                Ok(s) => set_summary.set(Some(s)),
                Err(e) => store_push_toast(&store, "Load failed", &e, Severity::Error),
            }
        });
    });

    view! {
        <div class="dashboard">
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

            {move || summary.get().map(|s| {
                let net = s.income_cents + s.expense_cents;
                view! {
                    <div class="summary-cards">
                        <div class="summary-card income">
                            <span class="summary-label">"Income"</span>
                            <span class="summary-value">{format_cents(s.income_cents)}</span>
                        </div>
                        <div class="summary-card expense">
                            <span class="summary-label">"Expenses"</span>
                            <span class="summary-value">{format_cents(s.expense_cents)}</span>
                        </div>
                        <div class="summary-card net">
                            <span class="summary-label">"Net"</span>
                            <span class="summary-value">{format_cents(net)}</span>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::format_cents;

    #[test]
    fn formats_signed_amounts() {
        assert_eq!(format_cents(1250), "12.50");
        assert_eq!(format_cents(-307), "-3.07");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(5), "0.05");
    }
}
