//! Page Controls Component
//!
//! Pager strip plus rows-per-page selector, driven by [`PageWindow`].

use leptos::prelude::*;
use crate::pagination::{PageMarker, PageWindow, PAGE_SIZES};

/// Pagination controls under a table
#[component]
pub fn PageControls(
    current_page: ReadSignal<u32>,
    set_current_page: WriteSignal<u32>,
    page_size: ReadSignal<u32>,
    set_page_size: WriteSignal<u32>,
    total_items: Signal<u32>,
) -> impl IntoView {
    let window = Memo::new(move |_| {
        PageWindow::new(current_page.get(), page_size.get(), total_items.get())
    });

    let range_label = move || {
        let w = window.get();
        let (first, last) = w.item_range();
        format!("{first}-{last} of {}", w.total_items)
    };

    view! {
        <Show when={move || total_items.get() > 0}>
        <div class="page-controls">
            <span class="page-range">{range_label}</span>

            <span class="page-markers">
                {move || window.get().page_markers().into_iter().map(|marker| match marker {
                    PageMarker::Ellipsis => view! { <span class="ellipsis">"…"</span> }.into_any(),
                    PageMarker::Page(n) => {
                        let class = move || {
                            if current_page.get() == n { "page-btn active" } else { "page-btn" }
                        };
                        view! {
                            <button class=class on:click=move |_| set_current_page.set(n)>
                                {n}
                            </button>
                        }.into_any()
                    }
                }).collect_view()}
            </span>

            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        set_page_size.set(size);
                        // Keep the current page inside the shrunken range
                        let clamped = PageWindow::new(
                            current_page.get_untracked(),
                            size,
                            total_items.get_untracked(),
                        )
                        .clamped();
                        set_current_page.set(clamped.current);
                    }
                }
            >
                {PAGE_SIZES.into_iter().map(|size| view! {
                    <option value=size selected=move || page_size.get() == size>
                        {size}
                    </option>
                }).collect_view()}
            </select>
        </div>
        </Show>
    }
}
