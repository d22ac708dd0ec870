//! Role policy: the set of roles permitted to view a protected surface.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use crate::net::types::Role;

/// Set of roles permitted for a view.
///
/// An empty policy is a valid (if misconfigured) input: membership against
/// it is always false, so every authenticated user is denied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RolePolicy {
    roles: Vec<Role>,
}

impl RolePolicy {
    /// Build a policy from the given roles.
    #[must_use]
    pub fn new(roles: &[Role]) -> Self {
        Self {
            roles: roles.to_vec(),
        }
    }

    /// Whether `role` is a member of this policy.
    #[must_use]
    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// True when no role is sufficient.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
