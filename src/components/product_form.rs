//! Create/edit product form used by the admin catalog page.

#[cfg(test)]
#[path = "product_form_test.rs"]
mod product_form_test;

use leptos::prelude::*;

use crate::net::types::{Product, ProductDraft};

/// Per-field validation messages. `None` means the field is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftErrors {
    pub name: Option<&'static str>,
    pub description: Option<&'static str>,
    pub price: Option<&'static str>,
    pub stock_quantity: Option<&'static str>,
}

impl DraftErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock_quantity.is_none()
    }
}

/// Validate raw form text and assemble a draft for the write endpoints.
///
/// Price must parse as a non-negative number and stock as a non-negative
/// integer. A blank image URL is dropped rather than sent as an empty
/// string. Drafts are always submitted active; the form carries no
/// visibility toggle.
fn build_draft(
    name: &str,
    description: &str,
    price: &str,
    stock_quantity: &str,
    image_url: &str,
) -> Result<ProductDraft, DraftErrors> {
    let mut errors = DraftErrors::default();

    let name = name.trim();
    if name.is_empty() {
        errors.name = Some("Product name is required");
    }

    let description = description.trim();
    if description.is_empty() {
        errors.description = Some("Product description is required");
    }

    let price = match price.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => {
            errors.price = Some("Valid price is required");
            0.0
        }
    };

    let stock_quantity = match stock_quantity.trim().parse::<u32>() {
        Ok(value) => value,
        Err(_) => {
            errors.stock_quantity = Some("Valid stock quantity is required");
            0
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    let image_url = image_url.trim();
    Ok(ProductDraft {
        name: name.to_owned(),
        description: description.to_owned(),
        price,
        stock_quantity,
        image_url: (!image_url.is_empty()).then(|| image_url.to_owned()),
        active: true,
    })
}

/// Modal-style form for creating or editing a product.
///
/// When `initial` is set the form opens pre-filled in edit mode; the
/// owning page decides which endpoint the submitted draft goes to.
#[component]
pub fn ProductForm(
    #[prop(optional_no_strip)] initial: Option<Product>,
    on_submit: Callback<ProductDraft>,
    on_cancel: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let editing = initial.is_some();
    let title = if editing { "Edit Product" } else { "Add Product" };
    let submit_label = if editing { "Save Changes" } else { "Create Product" };

    let name = RwSignal::new(initial.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let description = RwSignal::new(
        initial
            .as_ref()
            .map(|p| p.description.clone())
            .unwrap_or_default(),
    );
    let price = RwSignal::new(
        initial
            .as_ref()
            .map(|p| format!("{:.2}", p.price))
            .unwrap_or_default(),
    );
    let stock_quantity = RwSignal::new(
        initial
            .as_ref()
            .map(|p| p.stock_quantity.to_string())
            .unwrap_or_default(),
    );
    let image_url = RwSignal::new(
        initial
            .and_then(|p| p.image_url)
            .unwrap_or_default(),
    );
    let errors = RwSignal::new(DraftErrors::default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match build_draft(
            &name.get(),
            &description.get(),
            &price.get(),
            &stock_quantity.get(),
            &image_url.get(),
        ) {
            Ok(draft) => {
                errors.set(DraftErrors::default());
                on_submit.run(draft);
            }
            Err(found) => errors.set(found),
        }
    };

    let field_error = move |pick: fn(&DraftErrors) -> Option<&'static str>| {
        move || {
            errors
                .with(|e| pick(e))
                .map(|msg| view! { <p class="form__error">{msg}</p> })
        }
    };

    view! {
        <div class="modal">
            <div class="modal__panel">
                <h2 class="modal__title">{title}</h2>
                <form class="form" on:submit=submit>
                    <div class="form__field">
                        <label class="form__label" for="product-name">"Name"</label>
                        <input
                            id="product-name"
                            class="form__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        {field_error(|e| e.name)}
                    </div>

                    <div class="form__field">
                        <label class="form__label" for="product-description">"Description"</label>
                        <textarea
                            id="product-description"
                            class="form__input form__input--multiline"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                        {field_error(|e| e.description)}
                    </div>

                    <div class="form__row">
                        <div class="form__field">
                            <label class="form__label" for="product-price">"Price ($)"</label>
                            <input
                                id="product-price"
                                class="form__input"
                                type="number"
                                step="0.01"
                                min="0"
                                prop:value=move || price.get()
                                on:input=move |ev| price.set(event_target_value(&ev))
                            />
                            {field_error(|e| e.price)}
                        </div>

                        <div class="form__field">
                            <label class="form__label" for="product-stock">"Stock Quantity"</label>
                            <input
                                id="product-stock"
                                class="form__input"
                                type="number"
                                min="0"
                                prop:value=move || stock_quantity.get()
                                on:input=move |ev| stock_quantity.set(event_target_value(&ev))
                            />
                            {field_error(|e| e.stock_quantity)}
                        </div>
                    </div>

                    <div class="form__field">
                        <label class="form__label" for="product-image">"Image URL (optional)"</label>
                        <input
                            id="product-image"
                            class="form__input"
                            type="text"
                            placeholder="https://..."
                            prop:value=move || image_url.get()
                            on:input=move |ev| image_url.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form__actions">
                        <button
                            class="btn btn--muted"
                            type="button"
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {submit_label}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
