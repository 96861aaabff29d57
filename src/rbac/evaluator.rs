//! Authorization evaluator: pure decision functions over a role policy

use super::policy::RolePolicy;
use super::types::{Permission, Role};

/// Whether `role` holds `permission` under `policy`.
///
/// Pure function of its inputs: identical arguments always yield the same
/// decision.
pub fn has_permission(policy: &RolePolicy, role: Role, permission: Permission) -> bool {
    policy.permissions_for(role).contains(&permission)
}

/// Whether `role` holds every permission in `required` (AND semantics).
///
/// An empty required set evaluates true: a section that states no
/// requirement is visible to every known role, and callers are expected to
/// honor that consistently.
pub fn can_access<'a, I>(policy: &RolePolicy, role: Role, required: I) -> bool
where
    I: IntoIterator<Item = &'a Permission>,
{
    required
        .into_iter()
        .all(|permission| has_permission(policy, role, *permission))
}
