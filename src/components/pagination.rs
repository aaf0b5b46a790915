//! Pager controls for the catalog listing.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

fn has_previous(page: u32) -> bool {
    page > 0
}

fn has_next(page: u32, total_pages: u32) -> bool {
    page + 1 < total_pages
}

/// "Page N of M" label with 1-based display over the 0-based wire pages.
fn page_label(page: u32, total_pages: u32) -> String {
    format!("Page {} of {}", page + 1, total_pages.max(1))
}

/// Previous/next pager. Hidden entirely when there is only one page.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] busy: Signal<bool>,
    on_page: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when={move || total_pages.get() > 1}>
            <div class="pagination">
                <button
                    class="btn btn--muted"
                    disabled=move || busy.get() || !has_previous(page.get())
                    on:click=move |_| on_page.run(page.get().saturating_sub(1))
                >
                    "Previous"
                </button>
                <span class="pagination__label">
                    {move || page_label(page.get(), total_pages.get())}
                </span>
                <button
                    class="btn btn--muted"
                    disabled=move || busy.get() || !has_next(page.get(), total_pages.get())
                    on:click=move |_| on_page.run(page.get() + 1)
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
