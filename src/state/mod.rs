//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `catalog`) so views depend on
//! small focused models. The session signal is app-wide context; catalog
//! state is owned by whichever page is querying.

pub mod catalog;
pub mod session;
