//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! One module per route. Pages own their route-scoped state (catalog
//! signals, form fields) and read the shared session signal from
//! context; protected routes wrap their body in `RequireAuth`.

pub mod admin_products;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod product_detail;
pub mod products;
pub mod register;
