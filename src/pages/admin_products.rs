//! Admin catalog management: stats, list, create/edit/delete.

#[cfg(test)]
#[path = "admin_products_test.rs"]
mod admin_products_test;

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::product_form::ProductForm;
use crate::components::product_grid::ProductGrid;
use crate::components::protected::RequireAuth;
use crate::net::types::{Product, ProductDraft, StockStatus};
use crate::state::catalog::{self, CatalogState, ProductQuery};
use crate::state::session::SessionState;
use crate::util::auth::access_for;

const CREATE_FAILURE: &str = "Failed to create product. Please try again.";
const UPDATE_FAILURE: &str = "Failed to update product. Please try again.";
const DELETE_FAILURE: &str = "Failed to delete product. Please try again.";

/// Count products on the current page in each stock band.
fn stock_counts(products: &[Product]) -> (usize, usize, usize) {
    let mut in_stock = 0;
    let mut low = 0;
    let mut out = 0;
    for product in products {
        match product.stock_status() {
            StockStatus::InStock => in_stock += 1,
            StockStatus::LowStock => low += 1,
            StockStatus::OutOfStock => out += 1,
        }
    }
    (in_stock, low, out)
}

/// Admin-only catalog management page.
#[component]
pub fn AdminProductsPage() -> impl IntoView {
    view! {
        <RequireAuth admin_only=true>
            <AdminProductsBody/>
        </RequireAuth>
    }
}

/// The management surface proper.
///
/// The route guard keeps non-admins out of the page, but every mutation
/// still re-checks the session before firing, so a session that expires
/// mid-visit cannot keep issuing writes.
#[component]
fn AdminProductsBody() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let catalog = RwSignal::new(CatalogState::default());
    let query = RwSignal::new(ProductQuery::default());

    catalog::load_products(catalog, query.get_untracked());

    let reload = move || catalog::load_products(catalog, query.get_untracked());

    // None while the form is closed, Some(None) when creating,
    // Some(Some(product)) when editing.
    let form_target = RwSignal::new(None::<Option<Product>>);
    let saving = RwSignal::new(false);
    let action_error = RwSignal::new(None::<String>);

    let guard_admin = move || match access_for(&session.get_untracked(), true) {
        Ok(()) => true,
        Err(denied) => {
            action_error.set(Some(denied.message().to_owned()));
            false
        }
    };

    let on_submit = Callback::new(move |draft: ProductDraft| {
        if saving.get_untracked() || !guard_admin() {
            return;
        }
        let editing_id = form_target.get_untracked().flatten().map(|p| p.id);
        saving.set(true);
        action_error.set(None);
        #[cfg(not(feature = "csr"))]
        let _ = (draft, editing_id);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = match editing_id {
                Some(id) => crate::net::api::update_product(id, &draft).await.map(|_| ()),
                None => crate::net::api::create_product(&draft).await.map(|_| ()),
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    form_target.set(None);
                    reload();
                }
                Err(err) => {
                    log::error!("product save failed: {err}");
                    let message = if editing_id.is_some() { UPDATE_FAILURE } else { CREATE_FAILURE };
                    action_error.set(Some(message.to_owned()));
                }
            }
        });
    });

    let on_delete = Callback::new(move |id: i64| {
        if saving.get_untracked() || !guard_admin() {
            return;
        }
        #[cfg(not(feature = "csr"))]
        let _ = id;
        #[cfg(feature = "csr")]
        {
            let confirmed = web_sys::window()
                .and_then(|window| {
                    window
                        .confirm_with_message("Delete this product? This cannot be undone.")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            saving.set(true);
            action_error.set(None);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::delete_product(id).await;
                saving.set(false);
                match result {
                    Ok(()) => reload(),
                    Err(err) => {
                        log::error!("product delete failed: {err}");
                        action_error.set(Some(DELETE_FAILURE.to_owned()));
                    }
                }
            });
        }
    });

    let on_edit = Callback::new(move |product: Product| {
        action_error.set(None);
        form_target.set(Some(Some(product)));
    });

    let on_page = Callback::new(move |page: u32| {
        query.update(|q| q.page = page);
        reload();
    });

    view! {
        <div class="page admin-page">
            <div class="admin-page__header">
                <h1 class="page__title">"Manage Products"</h1>
                <button
                    class="btn btn--primary"
                    on:click=move |_| {
                        action_error.set(None);
                        form_target.set(Some(None));
                    }
                >
                    "Add Product"
                </button>
            </div>

            {move || {
                let state = catalog.get();
                let (in_stock, low, out) = stock_counts(&state.products);
                view! {
                    <div class="admin-page__stats">
                        <div class="stat-card stat-card--total">
                            <span class="stat-card__value">{state.total_elements}</span>
                            <span class="stat-card__label">"Total Products"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-card__value">{in_stock}</span>
                            <span class="stat-card__label">"In Stock"</span>
                        </div>
                        <div class="stat-card stat-card--warn">
                            <span class="stat-card__value">{low}</span>
                            <span class="stat-card__label">"Low Stock"</span>
                        </div>
                        <div class="stat-card stat-card--danger">
                            <span class="stat-card__value">{out}</span>
                            <span class="stat-card__label">"Out of Stock"</span>
                        </div>
                    </div>
                }
            }}

            {move || {
                action_error
                    .get()
                    .map(|message| view! { <p class="page__error">{message}</p> })
            }}
            {move || {
                catalog
                    .get()
                    .error
                    .map(|message| view! { <p class="page__error">{message}</p> })
            }}

            {move || {
                let state = catalog.get();
                view! {
                    <ProductGrid
                        products=state.products
                        loading=state.loading
                        show_admin_actions=true
                        on_edit=Some(on_edit)
                        on_delete=Some(on_delete)
                    />
                }
            }}

            <Pagination
                page=Signal::derive(move || catalog.get().page)
                total_pages=Signal::derive(move || catalog.get().total_pages)
                busy=Signal::derive(move || catalog.get().loading)
                on_page=on_page
            />

            {move || {
                form_target.get().map(|initial| view! {
                    <ProductForm
                        initial=initial
                        on_submit=on_submit
                        on_cancel=Callback::new(move |()| form_target.set(None))
                        busy=Signal::derive(move || saving.get())
                    />
                })
            }}
        </div>
    }
}
