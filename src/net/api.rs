//! REST operations against the storefront backend.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`, with the bearer
//! token injected from persisted storage and a fixed 10 s deadline per
//! request. Native builds: stubs returning [`ApiError::Network`] so pages
//! and tests compile on the host without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is logged here with its original detail and returned as a
//! typed [`ApiError`]; callers render short user-facing messages. A 401 on
//! any endpoint additionally clears the persisted session and forces
//! navigation to `/login`, since it invalidates the session as a whole.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AuthResponse, LoginRequest, Page, Product, ProductDraft, RegisterRequest, User};
use crate::state::catalog::ProductQuery;

/// Deadline applied to every request, matching the backend client config.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Base URL of the REST backend; overridable at build time.
pub fn api_base_url() -> &'static str {
    option_env!("STOREFRONT_API_BASE_URL").unwrap_or("http://localhost:8080/api")
}

/// Percent-encode a query-string value (RFC 3986 unreserved set kept).
fn encode_query_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Path + query string for the paged product listing.
///
/// A non-empty search term routes to the search endpoint; otherwise the
/// default listing endpoint is used. Pages are zero-indexed.
fn products_path(query: &ProductQuery) -> String {
    let paging = format!(
        "page={}&size={}&sortBy={}&sortDir={}",
        query.page,
        query.size,
        encode_query_value(&query.sort_by),
        query.sort_dir.as_str()
    );
    match query.search_term() {
        Some(term) => format!("/products/search?query={}&{paging}", encode_query_value(term)),
        None => format!("/products?{paging}"),
    }
}

fn product_path(id: i64) -> String {
    format!("/products/{id}")
}

fn price_range_path(min: f64, max: f64) -> String {
    format!("/products/price-range?minPrice={min}&maxPrice={max}")
}

/// An inverted range can never match; short-circuit to an empty result
/// instead of asking the backend.
fn price_range_is_empty(min: f64, max: f64) -> bool {
    min > max
}

#[cfg(feature = "csr")]
mod transport {
    use super::{ApiError, REQUEST_TIMEOUT_MS, api_base_url};
    use crate::net::error::classify_status;
    use crate::net::types::ErrorBody;

    /// Build a request for `path` with the persisted bearer token attached.
    ///
    /// The token is read from storage on every request; this module never
    /// writes session state except through the 401 handler below.
    pub fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match crate::util::storage::load_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    pub fn url(path: &str) -> String {
        format!("{}{path}", api_base_url())
    }

    /// Await a response, racing the fixed request deadline.
    pub async fn send_with_timeout<F>(send: F) -> Result<gloo_net::http::Response, ApiError>
    where
        F: Future<Output = Result<gloo_net::http::Response, gloo_net::Error>>,
    {
        use futures::future::{Either, select};

        let deadline = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS);
        futures::pin_mut!(send);
        futures::pin_mut!(deadline);
        match select(send, deadline).await {
            Either::Left((result, _)) => result.map_err(|err| {
                log::error!("network request failed: {err}");
                ApiError::Network
            }),
            Either::Right(((), _)) => {
                log::error!("network request timed out after {REQUEST_TIMEOUT_MS} ms");
                Err(ApiError::Timeout)
            }
        }
    }

    /// Convert a non-2xx response into an [`ApiError`], applying the
    /// global 401 side effect first.
    pub async fn ensure_ok(
        resp: gloo_net::http::Response,
    ) -> Result<gloo_net::http::Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let message = resp.json::<ErrorBody>().await.ok().map(|body| body.message);
        let error = classify_status(status, message);
        log::error!("api error: {error} (status {status})");
        if status == 401 {
            handle_unauthorized();
        }
        Err(error)
    }

    /// Global reaction to an invalid session: remove both persisted keys
    /// and navigate to the login view. Both steps are idempotent, so
    /// concurrent 401 responses collapse to a single observable
    /// transition, and the redirect is skipped when already on `/login`.
    fn handle_unauthorized() {
        crate::util::storage::clear_credentials();
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if location.pathname().map_or(true, |path| path != "/login") {
                let _ = location.set_href("/login");
            }
        }
    }

    pub async fn decode<T: serde::de::DeserializeOwned>(
        resp: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|err| {
            log::error!("failed to decode response body: {err}");
            ApiError::Decode
        })
    }
}

/// `POST /auth/login` — exchange credentials for a token and identity.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let builder = transport::authorized(gloo_net::http::Request::post(&transport::url("/auth/login")));
        let send = builder.json(request).map_err(|err| {
            log::error!("failed to encode login request: {err}");
            ApiError::Decode
        })?;
        let resp = transport::send_with_timeout(send.send()).await?;
        let resp = transport::ensure_ok(resp).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::Network)
    }
}

/// `POST /auth/register` — create an account; response logs the user in.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let builder =
            transport::authorized(gloo_net::http::Request::post(&transport::url("/auth/register")));
        let send = builder.json(request).map_err(|err| {
            log::error!("failed to encode register request: {err}");
            ApiError::Decode
        })?;
        let resp = transport::send_with_timeout(send.send()).await?;
        let resp = transport::ensure_ok(resp).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::Network)
    }
}

/// `GET /auth/me` — the user record behind the persisted token.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let builder = transport::authorized(gloo_net::http::Request::get(&transport::url("/auth/me")));
        let resp = transport::send_with_timeout(builder.send()).await?;
        let resp = transport::ensure_ok(resp).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Network)
    }
}

/// `GET /products` or `GET /products/search` — one page of the catalog.
pub async fn fetch_products(query: &ProductQuery) -> Result<Page<Product>, ApiError> {
    let path = products_path(query);
    #[cfg(feature = "csr")]
    {
        let builder = transport::authorized(gloo_net::http::Request::get(&transport::url(&path)));
        let resp = transport::send_with_timeout(builder.send()).await?;
        let resp = transport::ensure_ok(resp).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(ApiError::Network)
    }
}

/// `GET /products/{id}` — a single product, or [`ApiError::NotFound`].
pub async fn fetch_product(id: i64) -> Result<Product, ApiError> {
    let path = product_path(id);
    #[cfg(feature = "csr")]
    {
        let builder = transport::authorized(gloo_net::http::Request::get(&transport::url(&path)));
        let resp = transport::send_with_timeout(builder.send()).await?;
        let resp = transport::ensure_ok(resp).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(ApiError::Network)
    }
}

/// `POST /products` — admin-only create; returns the stored product.
pub async fn create_product(draft: &ProductDraft) -> Result<Product, ApiError> {
    #[cfg(feature = "csr")]
    {
        let builder = transport::authorized(gloo_net::http::Request::post(&transport::url("/products")));
        let send = builder.json(draft).map_err(|err| {
            log::error!("failed to encode product draft: {err}");
            ApiError::Decode
        })?;
        let resp = transport::send_with_timeout(send.send()).await?;
        let resp = transport::ensure_ok(resp).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = draft;
        Err(ApiError::Network)
    }
}

/// `PUT /products/{id}` — admin-only update; returns the stored product.
pub async fn update_product(id: i64, draft: &ProductDraft) -> Result<Product, ApiError> {
    let path = product_path(id);
    #[cfg(feature = "csr")]
    {
        let builder = transport::authorized(gloo_net::http::Request::put(&transport::url(&path)));
        let send = builder.json(draft).map_err(|err| {
            log::error!("failed to encode product draft: {err}");
            ApiError::Decode
        })?;
        let resp = transport::send_with_timeout(send.send()).await?;
        let resp = transport::ensure_ok(resp).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, draft);
        Err(ApiError::Network)
    }
}

/// `DELETE /products/{id}` — admin-only delete (204 on success).
pub async fn delete_product(id: i64) -> Result<(), ApiError> {
    let path = product_path(id);
    #[cfg(feature = "csr")]
    {
        let builder = transport::authorized(gloo_net::http::Request::delete(&transport::url(&path)));
        let resp = transport::send_with_timeout(builder.send()).await?;
        transport::ensure_ok(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(ApiError::Network)
    }
}

/// `GET /products/in-stock` — unpaginated list of purchasable products.
pub async fn fetch_in_stock() -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let builder =
            transport::authorized(gloo_net::http::Request::get(&transport::url("/products/in-stock")));
        let resp = transport::send_with_timeout(builder.send()).await?;
        let resp = transport::ensure_ok(resp).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Network)
    }
}

/// `GET /products/price-range` — unpaginated list with `min <= price <= max`.
///
/// Callers must reset their own pagination state afterwards: this endpoint
/// returns no page metadata.
pub async fn fetch_price_range(min: f64, max: f64) -> Result<Vec<Product>, ApiError> {
    if price_range_is_empty(min, max) {
        return Ok(Vec::new());
    }
    let path = price_range_path(min, max);
    #[cfg(feature = "csr")]
    {
        let builder = transport::authorized(gloo_net::http::Request::get(&transport::url(&path)));
        let resp = transport::send_with_timeout(builder.send()).await?;
        let resp = transport::ensure_ok(resp).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(ApiError::Network)
    }
}

/// `GET /health` — plain-text backend liveness probe.
pub async fn health() -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let builder = transport::authorized(gloo_net::http::Request::get(&transport::url("/health")));
        let resp = transport::send_with_timeout(builder.send()).await?;
        let resp = transport::ensure_ok(resp).await?;
        resp.text().await.map_err(|err| {
            log::error!("failed to read health response: {err}");
            ApiError::Decode
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Network)
    }
}
