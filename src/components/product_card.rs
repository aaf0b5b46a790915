//! Product card for catalog grids.

use leptos::prelude::*;

use crate::net::types::Product;

/// A single product tile: image, stock badge, price, and actions.
///
/// Admin actions (edit/delete) render only when requested by the owning
/// page; the gate itself lives with the page, not here.
#[component]
pub fn ProductCard(
    product: Product,
    #[prop(optional)] show_admin_actions: bool,
    #[prop(optional_no_strip)] on_edit: Option<Callback<Product>>,
    #[prop(optional_no_strip)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let status = product.stock_status();
    let id = product.id;
    let detail_href = format!("/products/{id}");
    let price = product.display_price();
    let stock_line = format!("Stock: {}", product.stock_quantity);
    let id_line = format!("ID: #{id}");
    let edit_product = product.clone();

    view! {
        <div class="product-card">
            <div class="product-card__media">
                {match product.image_url.clone() {
                    Some(url) => view! {
                        <img class="product-card__image" src=url alt=product.name.clone()/>
                    }
                        .into_any(),
                    None => view! {
                        <div class="product-card__placeholder">"No image"</div>
                    }
                        .into_any(),
                }}
                <span class=status.badge_class()>{status.label()}</span>
            </div>

            <div class="product-card__body">
                <div class="product-card__header">
                    <h3 class="product-card__name">{product.name.clone()}</h3>
                    <p class="product-card__price">{price}</p>
                </div>
                <p class="product-card__description">{product.description.clone()}</p>
                <div class="product-card__meta">
                    <span>{stock_line}</span>
                    <span>{id_line}</span>
                </div>
                <a class="btn btn--primary product-card__details" href=detail_href>
                    "View Details"
                </a>

                {show_admin_actions.then(|| view! {
                    <div class="product-card__admin">
                        <button
                            class="btn btn--edit"
                            on:click=move |_| {
                                if let Some(on_edit) = on_edit {
                                    on_edit.run(edit_product.clone());
                                }
                            }
                        >
                            "Edit"
                        </button>
                        <button
                            class="btn btn--danger"
                            on:click=move |_| {
                                if let Some(on_delete) = on_delete {
                                    on_delete.run(id);
                                }
                            }
                        >
                            "Delete"
                        </button>
                    </div>
                })}
            </div>
        </div>
    }
}
