//! # mr-diff-parser
//!
//! Turns the hunks of a unified diff into a flat, ordered list of
//! [`DiffLineRecord`]s. Every context, added and removed line gets the line
//! number it has in its file version, which is what a review tool needs to
//! place a comment on it.
//!
//! The parser is a pure function over text. It does not fetch diffs and does
//! not fail: lines it cannot place are skipped.
//!
//! ## Usage
//!
//! ```rust
//! use mr_diff_parser::{parse_unified_diff, render, LineAction};
//!
//! let diff = "--- a/f\n+++ b/f\n@@ -1,2 +1,2 @@\n keep\n-old\n+new\n";
//! let records = parse_unified_diff(diff);
//!
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[2].action, LineAction::Added);
//!
//! let json = render::to_json(&records)?;
//! assert!(json.starts_with(r#"[{"lineNumber":1"#));
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod limits;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use limits::{InputLimit, LimitError};
pub use model::{CommentAnchor, DiffLineRecord, DiffSide, DiffStats, HunkHeader, LineAction};
pub use parser::{parse_hunk_header, parse_unified_diff};
