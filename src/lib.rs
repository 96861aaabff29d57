//! # Sanctuary RBAC
//!
//! Role-based access control and admin section gating for the Sanctuary
//! church content platform: sermons, articles, media, and member
//! notifications managed by a small staff with tiered roles.
//!
//! This crate is the authorization core consumed in-process by three
//! collaborators:
//!
//! - the **session layer** hands in a role value for the authenticated
//!   actor (authentication itself lives outside this crate),
//! - **route guards** ask [`RbacSystem::can_access`] before rendering a
//!   protected screen,
//! - the **navigation renderer** asks [`RbacSystem::available_sections`]
//!   for the ordered admin areas the actor may open.
//!
//! Everything is pure and synchronous over immutable configuration: the
//! permission catalog, the role grant table, and the section registry are
//! built once and never mutated. Unknown roles and unknown permission ids
//! always resolve to "no access" (fail-closed).
//!
//! ## Quick Start
//!
//! ```rust
//! use sanctuary_rbac::{Permission, RbacSystem, Role};
//!
//! let rbac = RbacSystem::new();
//!
//! // Route guard: may a moderator send member notifications?
//! assert!(rbac.can_access(
//!     Role::Moderator,
//!     &[Permission::UsersView, Permission::UsersSendNotifications],
//! ));
//!
//! // Navigation: which admin areas does the session's role see?
//! // The legacy "admin" value is normalized to the super admin role.
//! let sections = rbac.available_sections_for("admin");
//! assert_eq!(sections.len(), rbac.registry().len());
//!
//! // Unrecognized role values resolve to no sections.
//! assert!(rbac.available_sections_for("guest").is_empty());
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod rbac;
pub mod utils;

// Re-export main types
pub use rbac::{
    Permission, PermissionCatalog, RbacSystem, Role, RolePolicy, Section, SectionRegistry,
    available_sections, can_access, has_permission,
};
pub use utils::error::{RbacError, Result};
