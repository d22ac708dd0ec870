//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; protected pages install the
//! route guard and render behind a `Show` gate. Catalog, cart, and checkout
//! screens talk to the REST API directly and carry no guard.

pub mod account;
pub mod admin;
pub mod home;
pub mod login;
