//! Wire-schema DTOs for the storefront REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON shapes (camelCase field names,
//! Spring Data page envelope) so serde can stay declarative and request
//! code schema-driven. The UI holds ephemeral copies only; the backend
//! owns every record.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role as reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Customer,
    Admin,
}

/// An authenticated user record as returned by `/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique numeric identifier.
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Optional contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    pub role: Role,
    /// Whether the account is enabled.
    pub active: bool,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last-update timestamp.
    pub updated_at: String,
}

/// Derived stock display status for a product.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockStatus {
    /// `stock_quantity == 0`.
    OutOfStock,
    /// `stock_quantity` in `1..=10`.
    LowStock,
    /// `stock_quantity > 10`.
    InStock,
}

impl StockStatus {
    /// Badge label shown on product cards.
    pub fn label(self) -> &'static str {
        match self {
            Self::OutOfStock => "Out of Stock",
            Self::LowStock => "Low Stock",
            Self::InStock => "In Stock",
        }
    }

    /// CSS modifier class for the stock badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::OutOfStock => "stock-badge stock-badge--out",
            Self::LowStock => "stock-badge stock-badge--low",
            Self::InStock => "stock-badge stock-badge--in",
        }
    }
}

/// A catalog product as returned by the `/products` endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique numeric identifier.
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Non-negative unit price in the store currency.
    pub price: f64,
    /// Units available; drives the derived [`StockStatus`].
    pub stock_quantity: u32,
    /// Optional product image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Whether the product is visible to customers.
    pub active: bool,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last-update timestamp.
    pub updated_at: String,
}

impl Product {
    /// Classify the stock level into the tri-state display status.
    pub fn stock_status(&self) -> StockStatus {
        match self.stock_quantity {
            0 => StockStatus::OutOfStock,
            1..=10 => StockStatus::LowStock,
            _ => StockStatus::InStock,
        }
    }

    /// Price formatted for display (`$12.50`).
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Create/update request body: a product minus its id and timestamps.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub active: bool,
}

/// One slice of a paged result set, from the Spring Data page envelope.
///
/// The backend emits many more envelope fields (`pageable`, `first`,
/// `last`, sort metadata); only the fields the UI consumes are kept and
/// the rest are ignored on deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Ordered items in this slice.
    pub content: Vec<T>,
    /// Zero-indexed page number.
    #[serde(rename = "number")]
    pub page_number: u32,
    /// Requested page size.
    #[serde(rename = "size")]
    pub page_size: u32,
    pub total_pages: u32,
    pub total_elements: u64,
}

/// Login request body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request body for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Successful response from the login and register endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Opaque bearer token for subsequent authenticated requests.
    pub token: String,
    /// Token scheme reported by the backend (always `"Bearer"`).
    #[serde(rename = "type")]
    pub token_type: String,
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl AuthResponse {
    /// Assemble the session user record from the auth payload.
    ///
    /// The auth endpoints do not return the full user row, so the client
    /// fills in what it knows: the account is active (it just signed in)
    /// and the timestamps are fabricated locally. A later `/auth/me`
    /// fetch replaces this with the backend's canonical record.
    pub fn into_session_user(self) -> User {
        let now = crate::util::time::now_iso();
        User {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: None,
            role: self.role,
            active: true,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Error payload the backend attaches to non-2xx responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    /// Human-readable (often field-level) failure description.
    pub message: String,
    pub path: String,
}
