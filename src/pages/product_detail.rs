//! Single-product detail page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::{Product, StockStatus};
use crate::state::session::SessionState;

const NOT_FOUND_MESSAGE: &str = "Product not found or failed to load";

#[derive(Clone, Debug, PartialEq)]
enum DetailState {
    Loading,
    Loaded(Product),
    Failed,
}

/// Product detail view for `/products/:id`.
///
/// The product is re-fetched whenever the route id changes. A malformed
/// id skips the request and lands on the same failure message a missing
/// product does.
#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let detail = RwSignal::new(DetailState::Loading);
    let quantity = RwSignal::new(1u32);
    let cart_note = RwSignal::new(None::<String>);

    let product_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    Effect::new(move || {
        let Some(id) = product_id() else {
            detail.set(DetailState::Failed);
            return;
        };
        detail.set(DetailState::Loading);
        cart_note.set(None);
        quantity.set(1);
        #[cfg(not(feature = "csr"))]
        let _ = id;
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_product(id).await {
                Ok(product) => detail.set(DetailState::Loaded(product)),
                Err(err) => {
                    log::error!("failed to load product {id}: {err}");
                    detail.set(DetailState::Failed);
                }
            }
        });
    });

    let add_to_cart = move |product_name: String| {
        let note = if session.get_untracked().is_authenticated() {
            format!("Added {} x {product_name} to cart.", quantity.get_untracked())
        } else {
            "Please sign in to add items to your cart.".to_owned()
        };
        cart_note.set(Some(note));
    };

    view! {
        <div class="page detail-page">
            {move || match detail.get() {
                DetailState::Loading => view! {
                    <div class="detail-page__loading">
                        <div class="spinner"></div>
                        <p>"Loading product..."</p>
                    </div>
                }
                    .into_any(),
                DetailState::Failed => view! {
                    <div class="detail-page__missing">
                        <p class="page__error">{NOT_FOUND_MESSAGE}</p>
                        <a class="btn btn--primary" href="/products">"Back to Products"</a>
                    </div>
                }
                    .into_any(),
                DetailState::Loaded(product) => {
                    let status = product.stock_status();
                    let in_stock = status != StockStatus::OutOfStock;
                    let max_quantity = product.stock_quantity;
                    let name_for_cart = product.name.clone();
                    view! {
                        <div class="detail">
                            <div class="detail__media">
                                {match product.image_url.clone() {
                                    Some(url) => view! {
                                        <img class="detail__image" src=url alt=product.name.clone()/>
                                    }
                                        .into_any(),
                                    None => view! {
                                        <div class="detail__placeholder">"No image"</div>
                                    }
                                        .into_any(),
                                }}
                            </div>

                            <div class="detail__body">
                                <h1 class="detail__name">{product.name.clone()}</h1>
                                <span class=status.badge_class()>{status.label()}</span>
                                <p class="detail__price">{product.display_price()}</p>
                                <p class="detail__description">{product.description.clone()}</p>
                                <p class="detail__stock">
                                    {format!("{} in stock", product.stock_quantity)}
                                </p>

                                {in_stock
                                    .then(|| view! {
                                        <div class="detail__purchase">
                                            <label class="form__label" for="quantity">"Quantity"</label>
                                            <input
                                                id="quantity"
                                                class="form__input form__input--narrow"
                                                type="number"
                                                min="1"
                                                max=max_quantity
                                                prop:value=move || quantity.get().to_string()
                                                on:input=move |ev| {
                                                    let parsed = event_target_value(&ev)
                                                        .parse::<u32>()
                                                        .unwrap_or(1)
                                                        .clamp(1, max_quantity.max(1));
                                                    quantity.set(parsed);
                                                }
                                            />
                                            <button
                                                class="btn btn--confirm"
                                                on:click={
                                                    let name = name_for_cart.clone();
                                                    move |_| add_to_cart(name.clone())
                                                }
                                            >
                                                "Add to Cart"
                                            </button>
                                        </div>
                                    })}

                                {move || {
                                    cart_note
                                        .get()
                                        .map(|note| view! { <p class="detail__note">{note}</p> })
                                }}

                                <a class="detail__back" href="/products">"Back to Products"</a>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
