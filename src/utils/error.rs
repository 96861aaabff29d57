//! Error handling for the RBAC core
//!
//! The taxonomy is deliberately narrow: this crate has no I/O, and denied
//! access is a boolean outcome, not an error. What remains are
//! configuration and boundary defects.

use thiserror::Error;

/// Result type alias for the RBAC core
pub type Result<T> = std::result::Result<T, RbacError>;

/// Errors raised by the RBAC core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RbacError {
    /// A dotted id that does not exist in the permission catalog
    #[error("unknown permission id: {0}")]
    UnknownPermission(String),

    /// A role value outside the closed role set
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// Two sections in a registry share an id
    #[error("duplicate section id in registry: {0}")]
    DuplicateSection(String),
}
