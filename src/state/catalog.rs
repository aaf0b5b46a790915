//! Catalog list state and the paged/filterable product query.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog operations themselves are stateless (`net::api`); the
//! calling view owns its page/filter state through [`ProductQuery`] and
//! renders from a [`CatalogState`] it keeps in a local signal. A fresh
//! page always replaces the prior one wholesale.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{Page, Product};

use leptos::prelude::{RwSignal, Update};

/// Shown when a catalog read fails, regardless of the underlying error.
pub const LOAD_FAILURE: &str = "Failed to load products. Please try again.";
/// Shown when the price-range filter fails.
pub const FILTER_FAILURE: &str = "Failed to filter products. Please try again.";

/// Sort order for the paged listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Parameters for one paged catalog read. Pages are zero-indexed.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductQuery {
    pub page: u32,
    pub size: u32,
    /// Routes to the search endpoint when non-blank.
    pub search: Option<String>,
    pub sort_by: String,
    pub sort_dir: SortDirection,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 12,
            search: None,
            sort_by: "createdAt".to_owned(),
            sort_dir: SortDirection::Desc,
        }
    }
}

impl ProductQuery {
    /// The trimmed search term, when one is set and non-empty.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    /// Same query pointed at a different page.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

/// View-side catalog state: the current slice plus loading/error flags.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    /// Zero-indexed page currently displayed.
    pub page: u32,
    pub total_pages: u32,
    pub total_elements: u64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            error: None,
            page: 0,
            total_pages: 0,
            total_elements: 0,
        }
    }
}

impl CatalogState {
    /// Enter a load: raise `loading`, drop any previous error. The stale
    /// product list stays visible until the replacement arrives.
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the displayed slice with a freshly fetched page.
    pub fn apply_page(&mut self, page: Page<Product>) {
        self.products = page.content;
        self.page = page.page_number;
        self.total_pages = page.total_pages;
        self.total_elements = page.total_elements;
        self.loading = false;
        self.error = None;
    }

    /// Replace the displayed slice with an unpaginated result (price-range
    /// filter). The endpoint returns no page metadata, so pagination is
    /// reset to a single synthetic page.
    pub fn apply_list(&mut self, products: Vec<Product>) {
        self.total_elements = products.len() as u64;
        self.total_pages = 1;
        self.page = 0;
        self.products = products;
        self.loading = false;
        self.error = None;
    }

    /// Settle a failed load; the previous products remain on screen.
    pub fn apply_error(&mut self, message: &str) {
        self.error = Some(message.to_owned());
        self.loading = false;
    }
}

/// Fetch one page of products into `catalog`, replacing the prior slice.
#[cfg(feature = "csr")]
pub fn load_products(catalog: RwSignal<CatalogState>, query: ProductQuery) {
    catalog.update(CatalogState::begin_loading);
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_products(&query).await {
            Ok(page) => catalog.update(|state| state.apply_page(page)),
            Err(err) => {
                log::error!("failed to load products: {err}");
                catalog.update(|state| state.apply_error(LOAD_FAILURE));
            }
        }
    });
}

#[cfg(not(feature = "csr"))]
pub fn load_products(catalog: RwSignal<CatalogState>, query: ProductQuery) {
    let _ = query;
    catalog.update(CatalogState::begin_loading);
}

/// Fetch the unpaginated price-range list into `catalog`.
#[cfg(feature = "csr")]
pub fn load_price_range(catalog: RwSignal<CatalogState>, min: f64, max: f64) {
    catalog.update(CatalogState::begin_loading);
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_price_range(min, max).await {
            Ok(products) => catalog.update(|state| state.apply_list(products)),
            Err(err) => {
                log::error!("failed to filter products by price: {err}");
                catalog.update(|state| state.apply_error(FILTER_FAILURE));
            }
        }
    });
}

#[cfg(not(feature = "csr"))]
pub fn load_price_range(catalog: RwSignal<CatalogState>, min: f64, max: f64) {
    let _ = (min, max);
    catalog.update(CatalogState::begin_loading);
}
