//! Role-gated access control for protected routes.
//!
//! ARCHITECTURE
//! ============
//! `decision` is the pure core: (request, session, credential presence) maps
//! to a decision plus effects described as data. `gate` applies those effects
//! against the running app. `credentials` and `hint` own the two persistence
//! side channels (token lookup, return path). `policy` is the role set
//! checked at the membership site.

pub mod credentials;
pub mod decision;
pub mod gate;
pub mod hint;
pub mod policy;
