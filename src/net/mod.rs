//! Networking modules for the REST backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP operations, `error` defines the failure kinds
//! and their user-facing mapping, and `types` carries the wire schema.

pub mod api;
pub mod error;
pub mod types;
