//! Shared helpers.
//!
//! This module provides:
//! - Static CSS selector and regex compilation
//! - Whitespace, truncation and word-count helpers

mod selector;
mod text;

pub use selector::{compile_regex_unsafe, parse_selector_unsafe};
pub use text::{collapse_whitespace, truncate_chars, word_count};
