//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `toast`) so pages and the route guard
//! can depend on small focused models.

pub mod auth;
pub mod toast;
