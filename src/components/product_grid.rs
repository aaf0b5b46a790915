//! Responsive grid of product cards with loading and empty states.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::net::types::Product;

/// Grid body for catalog pages. Rendered fresh from the owning page's
/// reactive closure, so props are plain values.
#[component]
pub fn ProductGrid(
    products: Vec<Product>,
    #[prop(optional)] loading: bool,
    #[prop(optional)] show_admin_actions: bool,
    #[prop(optional_no_strip)] on_edit: Option<Callback<Product>>,
    #[prop(optional_no_strip)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    if loading {
        return view! {
            <div class="product-grid product-grid--loading">
                {(0..8)
                    .map(|_| view! { <div class="product-card product-card--skeleton"></div> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any();
    }

    if products.is_empty() {
        let hint = if show_admin_actions {
            "Start by adding your first product to the catalog."
        } else {
            "Check back later for new products or try adjusting your search."
        };
        return view! {
            <div class="product-grid__empty">
                <h3>"No products found"</h3>
                <p>{hint}</p>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="product-grid">
            {products
                .into_iter()
                .map(|product| {
                    view! {
                        <ProductCard
                            product=product
                            show_admin_actions=show_admin_actions
                            on_edit=on_edit
                            on_delete=on_delete
                        />
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
