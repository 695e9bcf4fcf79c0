//! Role-based field access.
//!
//! A field's `read_roles` / `write_roles` list the roles allowed to see or
//! change it. An empty list leaves the field open to everyone; the
//! configured administrator role passes every check.

pub mod permission_manager;
pub mod permission_wrapper;
pub mod types;

pub use permission_manager::PermissionManager;
pub use permission_wrapper::PermissionWrapper;
pub use types::{AccessLevel, FieldPermissionResult};
