//! Permission catalog: id -> permission lookup and metadata listing

use std::collections::BTreeMap;

use crate::utils::error::{RbacError, Result};

use super::types::Permission;

/// The full universe of permissions, keyed by dotted id.
///
/// Built once from [`Permission::ALL`]; read-only afterwards. Lookups for
/// unknown ids yield `None` — whether absence is fatal is the caller's call.
#[derive(Debug, Clone)]
pub struct PermissionCatalog {
    entries: BTreeMap<&'static str, Permission>,
}

impl PermissionCatalog {
    /// Build the catalog from the closed permission set.
    pub fn new() -> Self {
        Self {
            entries: Permission::ALL.iter().map(|p| (p.as_id(), *p)).collect(),
        }
    }

    /// Look up a permission by dotted id.
    pub fn get(&self, id: &str) -> Option<Permission> {
        self.entries.get(id).copied()
    }

    /// Look up a permission by dotted id, treating absence as a
    /// configuration defect.
    pub fn require(&self, id: &str) -> Result<Permission> {
        self.get(id)
            .ok_or_else(|| RbacError::UnknownPermission(id.to_string()))
    }

    /// Iterate all permissions in id order (for audit/metadata views).
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.entries.values().copied()
    }

    /// Number of permissions in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PermissionCatalog {
    fn default() -> Self {
        Self::new()
    }
}
