//! Backend connectivity panel for the landing page.

use leptos::prelude::*;

use crate::net::api;
use crate::state::catalog::ProductQuery;

/// Shows whether the backend is reachable and previews a few products.
///
/// Both probes run once on mount through `LocalResource`; failures render
/// inline rather than blanking the page, since the landing page must work
/// for visitors even when the backend is down.
#[component]
pub fn ApiStatus() -> impl IntoView {
    let health = LocalResource::new(|| api::health());
    let preview = LocalResource::new(|| async {
        let query = ProductQuery {
            size: 5,
            ..ProductQuery::default()
        };
        api::fetch_products(&query).await
    });

    view! {
        <section class="api-status">
            <h2 class="api-status__title">"Backend Status"</h2>
            <Suspense fallback=move || view! { <p class="api-status__checking">"Checking..."</p> }>
                {move || {
                    health.get().map(|result| match result {
                        Ok(body) => view! {
                            <p class="api-status__ok">{format!("Connected: {body}")}</p>
                        }
                            .into_any(),
                        Err(_) => view! {
                            <p class="api-status__down">
                                "Backend unreachable. Product data may be unavailable."
                            </p>
                        }
                            .into_any(),
                    })
                }}
            </Suspense>

            <Suspense fallback=move || view! { <p class="api-status__checking">"Loading products..."</p> }>
                {move || {
                    preview.get().map(|result| match result {
                        Ok(page) => view! {
                            <ul class="api-status__preview">
                                {page
                                    .content
                                    .into_iter()
                                    .map(|product| {
                                        let line = format!(
                                            "{} ({})",
                                            product.name,
                                            product.display_price(),
                                        );
                                        view! { <li>{line}</li> }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any(),
                        Err(_) => view! {
                            <p class="api-status__down">"Could not load product preview."</p>
                        }
                            .into_any(),
                    })
                }}
            </Suspense>
        </section>
    }
}
