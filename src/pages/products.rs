//! Public catalog page: paged browsing, search, price filter, sorting.

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::product_filters::ProductFilters;
use crate::components::product_grid::ProductGrid;
use crate::state::catalog::{self, CatalogState, ProductQuery, SortDirection};

/// Catalog browser. The page owns its query and catalog signals; every
/// filter action resets to the first page and re-queries. The price
/// filter is the exception to paging: its endpoint returns a flat list,
/// shown as a single synthetic page until another action re-queries.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let catalog = RwSignal::new(CatalogState::default());
    let query = RwSignal::new(ProductQuery::default());

    catalog::load_products(catalog, query.get_untracked());

    let reload = move || catalog::load_products(catalog, query.get_untracked());

    let on_search = Callback::new(move |term: String| {
        query.update(|q| {
            q.search = Some(term);
            q.page = 0;
        });
        reload();
    });

    let on_price_filter = Callback::new(move |(min, max): (f64, f64)| {
        catalog::load_price_range(catalog, min, max);
    });

    let on_sort = Callback::new(move |(field, dir): (String, SortDirection)| {
        query.update(|q| {
            q.sort_by = field;
            q.sort_dir = dir;
            q.page = 0;
        });
        reload();
    });

    let on_clear = Callback::new(move |()| {
        query.set(ProductQuery::default());
        reload();
    });

    let on_page = Callback::new(move |page: u32| {
        query.update(|q| q.page = page);
        reload();
    });

    view! {
        <div class="page products-page">
            <h1 class="page__title">"Products"</h1>

            <ProductFilters
                on_search=on_search
                on_price_filter=on_price_filter
                on_sort=on_sort
                on_clear=on_clear
                busy=Signal::derive(move || catalog.get().loading)
            />

            {move || {
                catalog
                    .get()
                    .error
                    .map(|message| view! { <p class="page__error">{message}</p> })
            }}

            {move || {
                let state = catalog.get();
                view! { <ProductGrid products=state.products loading=state.loading/> }
            }}

            <Pagination
                page=Signal::derive(move || catalog.get().page)
                total_pages=Signal::derive(move || catalog.get().total_pages)
                busy=Signal::derive(move || catalog.get().loading)
                on_page=on_page
            />
        </div>
    }
}
