//! Role-Based Access Control (RBAC) and admin section gating
//!
//! This module decides which permissions a role holds, whether a requested
//! action is authorized, and which admin areas a role may navigate to.

mod catalog;
mod evaluator;
mod policy;
mod sections;
mod system;
mod types;

// Re-export public types and functions
pub use catalog::PermissionCatalog;
pub use evaluator::{can_access, has_permission};
pub use policy::RolePolicy;
pub use sections::{SectionRegistry, available_sections};
pub use system::RbacSystem;
pub use types::{Permission, Role, Section};
