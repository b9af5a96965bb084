//! Line records produced from a unified diff.

use serde::{Deserialize, Serialize};

use super::anchor::{CommentAnchor, DiffSide};

/// A single content line of a hunk, numbered against the file version it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLineRecord {
    /// 1-based line number: new file for unchanged/added lines, old file for removed lines.
    #[serde(rename = "lineNumber")]
    pub line_number: u64,
    /// Line text without its diff prefix.
    pub content: String,
    /// How the line relates to the old and new versions.
    pub action: LineAction,
}

impl DiffLineRecord {
    /// Create an unchanged (context) record numbered in the new file.
    pub fn unchanged(line_number: u64, content: impl Into<String>) -> Self {
        Self {
            line_number,
            content: content.into(),
            action: LineAction::Unchanged,
        }
    }

    /// Create an added record numbered in the new file.
    pub fn added(line_number: u64, content: impl Into<String>) -> Self {
        Self {
            line_number,
            content: content.into(),
            action: LineAction::Added,
        }
    }

    /// Create a removed record numbered in the old file.
    pub fn removed(line_number: u64, content: impl Into<String>) -> Self {
        Self {
            line_number,
            content: content.into(),
            action: LineAction::Removed,
        }
    }

    /// Where a review comment on this line has to be anchored.
    pub fn anchor(&self) -> CommentAnchor {
        CommentAnchor::new(self.action.side(), self.line_number)
    }
}

/// Classification of a hunk line.
///
/// Serialized as `"NA"`, `"ADDED"` and `"REMOVED"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineAction {
    /// Present in both versions.
    #[serde(rename = "NA")]
    Unchanged,
    /// Only present in the new version.
    #[serde(rename = "ADDED")]
    Added,
    /// Only present in the old version.
    #[serde(rename = "REMOVED")]
    Removed,
}

impl LineAction {
    /// Classify a line by its leading diff prefix.
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            ' ' => Some(LineAction::Unchanged),
            '+' => Some(LineAction::Added),
            '-' => Some(LineAction::Removed),
            _ => None,
        }
    }

    /// Get the prefix character for this action.
    pub fn prefix(&self) -> char {
        match self {
            LineAction::Unchanged => ' ',
            LineAction::Added => '+',
            LineAction::Removed => '-',
        }
    }

    /// The file version a record with this action is numbered against.
    pub fn side(&self) -> DiffSide {
        match self {
            LineAction::Removed => DiffSide::Old,
            LineAction::Unchanged | LineAction::Added => DiffSide::New,
        }
    }
}

/// Parsed `@@ -old_start[,old_count] +new_start[,new_count] @@` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkHeader {
    /// Old file starting line.
    pub old_start: u64,
    /// Number of lines in old version (1 when omitted).
    pub old_count: u64,
    /// New file starting line.
    pub new_start: u64,
    /// Number of lines in new version (1 when omitted).
    pub new_count: u64,
}

impl HunkHeader {
    pub fn new(old_start: u64, old_count: u64, new_start: u64, new_count: u64) -> Self {
        Self {
            old_start,
            old_count,
            new_start,
            new_count,
        }
    }
}

/// Line counts per action over a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub unchanged: usize,
    pub added: usize,
    pub removed: usize,
}

impl DiffStats {
    /// Count records by action.
    pub fn from_records(records: &[DiffLineRecord]) -> Self {
        records
            .iter()
            .fold(Self::default(), |mut stats, record| {
                match record.action {
                    LineAction::Unchanged => stats.unchanged += 1,
                    LineAction::Added => stats.added += 1,
                    LineAction::Removed => stats.removed += 1,
                }
                stats
            })
    }

    pub fn total(&self) -> usize {
        self.unchanged + self.added + self.removed
    }
}
