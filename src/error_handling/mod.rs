//! Helpers that replace `.unwrap()` on fallible library calls with
//! contextual [`SchemaError`](crate::schema::SchemaError)s.

pub mod regex_utils;

pub use regex_utils::RegexUtils;
