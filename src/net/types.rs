//! Wire DTOs for the session endpoints.
//!
//! DESIGN
//! ======
//! `Role` is a closed enumeration so the policy check matches exhaustively.
//! An unrecognized role string fails deserialization, which callers treat as
//! a logged-out session rather than guessing at privileges.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Closed set of account roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Regular customer account.
    User,
    /// Back-office staff; may view the dashboard but not manage accounts.
    Staff,
    /// Full administrative access.
    Admin,
}

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account role.
    pub role: Role,
}
