//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and guard
//! logic to improve reuse and testability.

pub mod cookie;
