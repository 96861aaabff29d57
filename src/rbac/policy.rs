//! Role policy: the static grant table mapping roles to permission sets

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::types::{Permission, Role};

// Returned for roles with no row in the grant table: fail closed to no
// access, never to all access.
static NO_GRANTS: BTreeSet<Permission> = BTreeSet::new();

/// Grant table: which permissions each role holds.
///
/// Grants are static configuration. There is no grant/revoke API here;
/// changing a role's capabilities is an edit to [`RolePolicy::defaults`]
/// (or, in tests, an injected table via [`RolePolicy::new`]).
#[derive(Debug, Clone)]
pub struct RolePolicy {
    grants: BTreeMap<Role, BTreeSet<Permission>>,
}

impl RolePolicy {
    /// Build a policy from an explicit grant table.
    pub fn new(grants: BTreeMap<Role, BTreeSet<Permission>>) -> Self {
        Self { grants }
    }

    /// The production grant table.
    pub fn defaults() -> Self {
        let mut grants = BTreeMap::new();

        // Super admin holds every permission in the catalog.
        grants.insert(Role::SuperAdmin, Permission::ALL.iter().copied().collect());

        grants.insert(
            Role::ContentManager,
            [
                Permission::SermonsCreate,
                Permission::ArticlesCreate,
                Permission::TopicsCreate,
                Permission::SeriesCreate,
                Permission::MediaUpload,
                Permission::MediaManage,
                Permission::AnalyticsView,
            ]
            .into_iter()
            .collect(),
        );

        grants.insert(
            Role::Moderator,
            [
                Permission::SermonsEdit,
                Permission::ArticlesEdit,
                Permission::UsersView,
                Permission::UsersSendNotifications,
                Permission::NotificationsManage,
                Permission::AnalyticsView,
            ]
            .into_iter()
            .collect(),
        );

        debug!(roles = grants.len(), "Initialized default role grants");
        Self::new(grants)
    }

    /// The grant set for a role. A role with no row in the table resolves
    /// to the empty set.
    pub fn permissions_for(&self, role: Role) -> &BTreeSet<Permission> {
        self.grants.get(&role).unwrap_or(&NO_GRANTS)
    }

    /// Iterate the roles this policy has grants for.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.grants.keys().copied()
    }
}

impl Default for RolePolicy {
    fn default() -> Self {
        Self::defaults()
    }
}
