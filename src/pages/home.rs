//! Landing page: hero, backend status, and a featured products strip.

use leptos::prelude::*;

use crate::components::api_status::ApiStatus;
use crate::components::product_grid::ProductGrid;
use crate::net::api;
use crate::state::catalog::LOAD_FAILURE;

/// How many in-stock products the featured strip shows.
const FEATURED_COUNT: usize = 4;

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = LocalResource::new(|| api::fetch_in_stock());

    view! {
        <div class="page home-page">
            <section class="hero">
                <h1 class="hero__title">"Welcome to Storefront"</h1>
                <p class="hero__tagline">
                    "Browse the catalog, track stock in real time, and check out in seconds."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/products">"Browse Products"</a>
                    <a class="btn btn--muted" href="/register">"Create Account"</a>
                </div>
            </section>

            <ApiStatus/>

            <section class="featured">
                <h2 class="featured__title">"Featured Products"</h2>
                <Suspense fallback=move || view! { <ProductGrid products=Vec::new() loading=true/> }>
                    {move || {
                        featured.get().map(|result| match result {
                            Ok(products) => {
                                let picks =
                                    products.into_iter().take(FEATURED_COUNT).collect::<Vec<_>>();
                                view! { <ProductGrid products=picks/> }.into_any()
                            }
                            Err(_) => view! {
                                <p class="page__error">{LOAD_FAILURE}</p>
                            }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
