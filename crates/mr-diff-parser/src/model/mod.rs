//! Data models for parsed diff lines.

mod anchor;
mod diff;

pub use anchor::{CommentAnchor, DiffSide};
pub use diff::{DiffLineRecord, DiffStats, HunkHeader, LineAction};
