//! Networking modules for the storefront REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the session endpoints the client consumes; `types` defines
//! the shared wire schema. The wider storefront API (products, orders,
//! statistics) is an opaque data source and is not modeled here.

pub mod api;
pub mod types;
