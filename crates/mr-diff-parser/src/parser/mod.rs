//! Diff text parsers.

pub mod unified;

pub use unified::{parse_hunk_header, parse_unified_diff};
