//! Review comment positions derived from parsed lines.

use serde::{Deserialize, Serialize};

/// Which version of the file a line number refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffSide {
    /// Pre-change version (`old_path`, `old_line`).
    Old,
    /// Post-change version (`new_path`, `new_line`).
    New,
}

/// Where a review comment is attached in a merge request diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentAnchor {
    pub side: DiffSide,
    pub line: u64,
}

impl CommentAnchor {
    pub fn new(side: DiffSide, line: u64) -> Self {
        Self { side, line }
    }
}
