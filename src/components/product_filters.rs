//! Search, price-range, and sort controls for the catalog page.

#[cfg(test)]
#[path = "product_filters_test.rs"]
mod product_filters_test;

use leptos::prelude::*;

use crate::state::catalog::SortDirection;

/// Lower bound used when the min price input is blank or unparsable.
const DEFAULT_MIN_PRICE: f64 = 0.0;
/// Upper bound used when the max price input is blank or unparsable.
const DEFAULT_MAX_PRICE: f64 = 10_000.0;

/// Parse a price bound input, falling back for blank/invalid text.
fn parse_price_bound(raw: &str, fallback: f64) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(fallback)
}

/// Map a sort `<select>` value to a field name the backend accepts.
fn parse_sort_field(raw: &str) -> &'static str {
    match raw {
        "name" => "name",
        "price" => "price",
        _ => "createdAt",
    }
}

fn parse_sort_direction(raw: &str) -> SortDirection {
    if raw == "asc" {
        SortDirection::Asc
    } else {
        SortDirection::Desc
    }
}

/// Filter bar: search box, price range inputs, sort controls, clear.
///
/// Stateless toward the catalog: every action is reported through a
/// callback and the owning page re-queries. `busy` mirrors the page's
/// loading flag to keep submissions advisory-disabled while in flight.
#[component]
pub fn ProductFilters(
    on_search: Callback<String>,
    on_price_filter: Callback<(f64, f64)>,
    on_sort: Callback<(String, SortDirection)>,
    on_clear: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let min_price = RwSignal::new(String::new());
    let max_price = RwSignal::new(String::new());
    let sort_field = RwSignal::new("createdAt".to_owned());
    let sort_dir = RwSignal::new(SortDirection::Desc);

    let submit_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_search.run(search.get());
    };

    let submit_price_filter = move |_| {
        let min = parse_price_bound(&min_price.get(), DEFAULT_MIN_PRICE);
        let max = parse_price_bound(&max_price.get(), DEFAULT_MAX_PRICE);
        on_price_filter.run((min, max));
    };

    let emit_sort = move || on_sort.run((sort_field.get(), sort_dir.get()));

    let clear_all = move |_| {
        search.set(String::new());
        min_price.set(String::new());
        max_price.set(String::new());
        sort_field.set("createdAt".to_owned());
        sort_dir.set(SortDirection::Desc);
        on_clear.run(());
    };

    view! {
        <div class="filters">
            <form class="filters__search" on:submit=submit_search>
                <label class="filters__label" for="search">"Search Products"</label>
                <input
                    id="search"
                    class="filters__input"
                    type="text"
                    placeholder="Search by name or description..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Search"
                </button>
            </form>

            <div class="filters__price">
                <label class="filters__label">"Price Range"</label>
                <input
                    class="filters__input filters__input--narrow"
                    type="number"
                    placeholder="Min"
                    prop:value=move || min_price.get()
                    on:input=move |ev| min_price.set(event_target_value(&ev))
                />
                <span class="filters__dash">"-"</span>
                <input
                    class="filters__input filters__input--narrow"
                    type="number"
                    placeholder="Max"
                    prop:value=move || max_price.get()
                    on:input=move |ev| max_price.set(event_target_value(&ev))
                />
                <button class="btn btn--confirm" disabled=move || busy.get() on:click=submit_price_filter>
                    "Filter"
                </button>
            </div>

            <div class="filters__sort">
                <label class="filters__label" for="sort-field">"Sort"</label>
                <select
                    id="sort-field"
                    class="filters__select"
                    on:change=move |ev| {
                        sort_field.set(parse_sort_field(&event_target_value(&ev)).to_owned());
                        emit_sort();
                    }
                >
                    <option value="createdAt">"Newest"</option>
                    <option value="name">"Name"</option>
                    <option value="price">"Price"</option>
                </select>
                <select
                    class="filters__select"
                    on:change=move |ev| {
                        sort_dir.set(parse_sort_direction(&event_target_value(&ev)));
                        emit_sort();
                    }
                >
                    <option value="desc">"Descending"</option>
                    <option value="asc">"Ascending"</option>
                </select>
            </div>

            <button class="btn btn--muted filters__clear" disabled=move || busy.get() on:click=clear_all>
                "Clear"
            </button>
        </div>
    }
}
