//! Regex-specific error handling utilities.
//!
//! Fixed patterns used across the crate are compiled once and cached;
//! user supplied patterns (from `validators.pattern`) go through
//! [`RegexUtils::compile_with_context`] so a bad pattern surfaces as a
//! schema error instead of a panic.

use crate::schema::types::SchemaError;
use once_cell::sync::OnceCell;
use regex::Regex;

const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";
const SLUG_PATTERN: &str = r"^[a-z0-9]+(?:[-_][a-z0-9]+)*$";
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static IDENTIFIER: OnceCell<Regex> = OnceCell::new();
static SLUG: OnceCell<Regex> = OnceCell::new();
static EMAIL: OnceCell<Regex> = OnceCell::new();

/// Utility for safe regex operations
pub struct RegexUtils;

impl RegexUtils {
    /// Safely compile a regex pattern with context
    pub fn compile_with_context(pattern: &str, context: &str) -> Result<Regex, SchemaError> {
        Regex::new(pattern).map_err(|e| {
            SchemaError::InvalidSchemaConfig(format!(
                "Regex compilation failed in {context}: {e} - Pattern: {pattern}"
            ))
        })
    }

    /// Field keys: `^[A-Za-z_][A-Za-z0-9_]*$`
    pub fn identifier() -> Result<&'static Regex, SchemaError> {
        IDENTIFIER.get_or_try_init(|| Self::compile_with_context(IDENTIFIER_PATTERN, "field key"))
    }

    /// Directory slugs: lowercase words joined by `-` or `_`
    pub fn slug() -> Result<&'static Regex, SchemaError> {
        SLUG.get_or_try_init(|| Self::compile_with_context(SLUG_PATTERN, "directory slug"))
    }

    pub fn email() -> Result<&'static Regex, SchemaError> {
        EMAIL.get_or_try_init(|| Self::compile_with_context(EMAIL_PATTERN, "email address"))
    }

    /// Returns true when `key` is a valid field key.
    pub fn is_identifier(key: &str) -> Result<bool, SchemaError> {
        Ok(Self::identifier()?.is_match(key))
    }
}
