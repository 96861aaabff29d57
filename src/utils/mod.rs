//! Utility modules for the RBAC core

pub mod error; // Error handling

// Re-export commonly used types
pub use error::{RbacError, Result};
