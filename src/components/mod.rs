//! Reusable view components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components hold presentation plus local widget state only. Shared
//! state lives in `crate::state` signals provided through context, and
//! every backend interaction goes through `crate::net::api`.

pub mod api_status;
pub mod navbar;
pub mod pagination;
pub mod product_card;
pub mod product_filters;
pub mod product_form;
pub mod product_grid;
pub mod protected;
