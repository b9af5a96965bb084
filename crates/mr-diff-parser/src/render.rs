//! Output encodings for parsed line records.
//!
//! The JSON form is a list of `{"lineNumber", "content", "action"}` objects,
//! the shape review tooling consumes when placing comments.

use crate::model::{DiffLineRecord, LineAction};

/// Serialize records as a compact JSON array.
pub fn to_json(records: &[DiffLineRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string(records)
}

/// Serialize records as an indented JSON array.
pub fn to_json_pretty(records: &[DiffLineRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Rebuild the post-change text covered by the hunks (unchanged and added lines).
pub fn new_file_text(records: &[DiffLineRecord]) -> String {
    join_contents(records, |action| action != LineAction::Removed)
}

/// Rebuild the pre-change text covered by the hunks (unchanged and removed lines).
pub fn old_file_text(records: &[DiffLineRecord]) -> String {
    join_contents(records, |action| action != LineAction::Added)
}

fn join_contents(records: &[DiffLineRecord], keep: impl Fn(LineAction) -> bool) -> String {
    records
        .iter()
        .filter(|record| keep(record.action))
        .map(|record| record.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
