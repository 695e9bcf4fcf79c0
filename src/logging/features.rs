//! Feature-specific logging macros and utilities
//!
//! Each area of the crate logs under its own target so levels can be tuned
//! per feature through [`LogConfig::features`](super::config::LogConfig).

/// Feature categories for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFeature {
    Schema,
    Validation,
    Render,
    Permissions,
    Directory,
}

impl LogFeature {
    pub const ALL: [Self; 5] = [
        Self::Schema,
        Self::Validation,
        Self::Render,
        Self::Permissions,
        Self::Directory,
    ];

    /// Get the target string for this feature
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Schema => "field_schema::schema",
            Self::Validation => "field_schema::validation",
            Self::Render => "field_schema::render",
            Self::Permissions => "field_schema::permissions",
            Self::Directory => "field_schema::directory",
        }
    }

    /// Short name used as key in the `[features]` config table
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::Validation => "validation",
            Self::Render => "render",
            Self::Permissions => "permissions",
            Self::Directory => "directory",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

// Schema-specific logging macros
#[macro_export]
macro_rules! log_schema_debug {
    ($($arg:tt)*) => {
        log::debug!(target: "field_schema::schema", $($arg)*)
    };
}

#[macro_export]
macro_rules! log_schema_info {
    ($($arg:tt)*) => {
        log::info!(target: "field_schema::schema", $($arg)*)
    };
}

#[macro_export]
macro_rules! log_schema_warn {
    ($($arg:tt)*) => {
        log::warn!(target: "field_schema::schema", $($arg)*)
    };
}

// Validation-specific logging macros
#[macro_export]
macro_rules! log_validation_debug {
    ($($arg:tt)*) => {
        log::debug!(target: "field_schema::validation", $($arg)*)
    };
}

#[macro_export]
macro_rules! log_validation_warn {
    ($($arg:tt)*) => {
        log::warn!(target: "field_schema::validation", $($arg)*)
    };
}

// Render-specific logging macros
#[macro_export]
macro_rules! log_render_debug {
    ($($arg:tt)*) => {
        log::debug!(target: "field_schema::render", $($arg)*)
    };
}

// Permission-specific logging macros
#[macro_export]
macro_rules! log_permissions_info {
    ($($arg:tt)*) => {
        log::info!(target: "field_schema::permissions", $($arg)*)
    };
}

#[macro_export]
macro_rules! log_permissions_warn {
    ($($arg:tt)*) => {
        log::warn!(target: "field_schema::permissions", $($arg)*)
    };
}

// Directory-specific logging macros
#[macro_export]
macro_rules! log_directory_info {
    ($($arg:tt)*) => {
        log::info!(target: "field_schema::directory", $($arg)*)
    };
}

#[macro_export]
macro_rules! log_directory_warn {
    ($($arg:tt)*) => {
        log::warn!(target: "field_schema::directory", $($arg)*)
    };
}
