//! RBAC system core functionality

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, info};

use crate::utils::error::{RbacError, Result};

use super::catalog::PermissionCatalog;
use super::evaluator::{can_access, has_permission};
use super::policy::RolePolicy;
use super::sections::{SectionRegistry, available_sections};
use super::types::{Permission, Role, Section};

/// RBAC system bundling the permission catalog, role policy, and section
/// registry behind one query surface.
///
/// All state is immutable configuration loaded at construction; every query
/// is a pure, synchronous function of it, safe to call from any number of
/// callers without coordination.
#[derive(Debug, Clone)]
pub struct RbacSystem {
    catalog: PermissionCatalog,
    policy: RolePolicy,
    registry: SectionRegistry,
}

impl RbacSystem {
    /// Create an RBAC system with the production tables.
    pub fn new() -> Self {
        info!("Initializing RBAC system");

        let system = Self {
            catalog: PermissionCatalog::new(),
            policy: RolePolicy::defaults(),
            registry: SectionRegistry::defaults(),
        };

        info!(
            permissions = system.catalog.len(),
            sections = system.registry.len(),
            "RBAC system initialized"
        );
        system
    }

    /// Create an RBAC system with injected tables (alternate policies and
    /// registries for tests, staged rollouts of new roles, etc.).
    ///
    /// Runs the startup consistency check: section ids must be unique. With
    /// the closed permission type, a grant or requirement referencing a
    /// nonexistent permission cannot be expressed.
    pub fn with_tables(policy: RolePolicy, registry: SectionRegistry) -> Result<Self> {
        let mut seen = HashSet::new();
        for section in registry.iter() {
            if !seen.insert(section.id.as_str()) {
                return Err(RbacError::DuplicateSection(section.id.clone()));
            }
        }

        Ok(Self {
            catalog: PermissionCatalog::new(),
            policy,
            registry,
        })
    }

    /// The permission catalog
    pub fn catalog(&self) -> &PermissionCatalog {
        &self.catalog
    }

    /// The role policy (grant table)
    pub fn policy(&self) -> &RolePolicy {
        &self.policy
    }

    /// The section registry
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// The grant set for a role (empty if the policy has no row for it).
    pub fn permissions_for(&self, role: Role) -> &BTreeSet<Permission> {
        self.policy.permissions_for(role)
    }

    /// Whether `role` holds `permission`.
    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        has_permission(&self.policy, role, permission)
    }

    /// Whether `role` holds every permission in `required`.
    ///
    /// Route guards call this before rendering a protected screen; a false
    /// result is a normal outcome the guard translates into a redirect, not
    /// an error.
    pub fn can_access(&self, role: Role, required: &[Permission]) -> bool {
        can_access(&self.policy, role, required)
    }

    /// The ordered admin sections visible to `role`.
    pub fn available_sections(&self, role: Role) -> Vec<&Section> {
        available_sections(&self.policy, &self.registry, role)
    }

    /// The ordered admin sections visible to a raw role value from the
    /// session layer. Unrecognized values resolve to no sections.
    pub fn available_sections_for(&self, role_value: &str) -> Vec<&Section> {
        match Role::from_session_value(role_value) {
            Some(role) => self.available_sections(role),
            None => {
                debug!(role = role_value, "Unrecognized role value, resolving no sections");
                Vec::new()
            }
        }
    }
}

impl Default for RbacSystem {
    fn default() -> Self {
        Self::new()
    }
}
