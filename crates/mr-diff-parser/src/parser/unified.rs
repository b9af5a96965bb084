//! Parse unified diff hunks (as returned by `git diff` or a merge request diff API).

use crate::model::{DiffLineRecord, HunkHeader, LineAction};
use regex::Regex;
use std::sync::OnceLock;

/// Parse unified diff text into an ordered list of line records.
///
/// Only hunk bodies are read. Everything before the first `@@` header
/// (`diff --git`, `index`, `---`/`+++` lines) is skipped, and lines inside a
/// hunk that do not start with ` `, `+` or `-` are dropped. Malformed input
/// never fails, it just yields fewer records.
///
/// # Example
/// ```
/// use mr_diff_parser::{parse_unified_diff, DiffLineRecord};
///
/// let records = parse_unified_diff("@@ -1,2 +1,2 @@\n a\n-b\n+c\n");
/// assert_eq!(
///     records,
///     vec![
///         DiffLineRecord::unchanged(1, "a"),
///         DiffLineRecord::removed(2, "b"),
///         DiffLineRecord::added(2, "c"),
///     ]
/// );
/// ```
pub fn parse_unified_diff(diff_text: &str) -> Vec<DiffLineRecord> {
    let mut records = Vec::new();
    let mut cursor = HunkCursor::default();
    let mut hunks = 0usize;

    for line in diff_text.split('\n') {
        if let Some(header) = parse_hunk_header(line) {
            log::trace!("Hunk header {:?}", header);
            cursor.reset(&header);
            hunks += 1;
            continue;
        }

        // Metadata before the first hunk
        if !cursor.is_active() {
            continue;
        }

        if let Some(record) = cursor.advance(line) {
            records.push(record);
        }
    }

    log::debug!(
        "Parsed {} hunk(s) into {} line record(s)",
        hunks,
        records.len()
    );
    records
}

/// Match a hunk header line.
///
/// Counts default to 1 when omitted. Text after the closing `@@` (function
/// context) is ignored. Numbers that do not fit a `u64` make the line a
/// non-header.
pub fn parse_hunk_header(line: &str) -> Option<HunkHeader> {
    static HUNK_HEADER_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = HUNK_HEADER_REGEX.get_or_init(|| {
        // ASCII digits only, so every match also parses as an integer
        Regex::new(r"^@@ -([0-9]+)(?:,([0-9]+))? \+([0-9]+)(?:,([0-9]+))? @@").unwrap()
    });

    let captures = re.captures(line)?;
    let number = |idx: usize| -> Option<u64> {
        match captures.get(idx) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(1),
        }
    };

    Some(HunkHeader::new(
        captures.get(1)?.as_str().parse().ok()?,
        number(2)?,
        captures.get(3)?.as_str().parse().ok()?,
        number(4)?,
    ))
}

/// Old/new file counters of the hunk currently being read.
///
/// Both at zero means no hunk has been seen yet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct HunkCursor {
    old_line: u64,
    new_line: u64,
}

impl HunkCursor {
    fn reset(&mut self, header: &HunkHeader) {
        self.old_line = header.old_start;
        self.new_line = header.new_start;
    }

    fn is_active(&self) -> bool {
        self.old_line != 0 || self.new_line != 0
    }

    /// Classify one hunk line and move the counters past it.
    fn advance(&mut self, line: &str) -> Option<DiffLineRecord> {
        let action = LineAction::from_prefix(line.chars().next()?)?;
        // All prefixes are single-byte
        let content = &line[1..];

        let record = match action {
            LineAction::Unchanged => {
                let record = DiffLineRecord::unchanged(self.new_line, content);
                self.old_line = self.old_line.saturating_add(1);
                self.new_line = self.new_line.saturating_add(1);
                record
            }
            LineAction::Added => {
                let record = DiffLineRecord::added(self.new_line, content);
                self.new_line = self.new_line.saturating_add(1);
                record
            }
            LineAction::Removed => {
                let record = DiffLineRecord::removed(self.old_line, content);
                self.old_line = self.old_line.saturating_add(1);
                record
            }
        };

        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE_DIFF: &str = r#"diff --git a/src/main.rs b/src/main.rs
index abc123..def456 100644
--- a/src/main.rs
+++ b/src/main.rs
@@ -1,5 +1,6 @@ fn main()
 fn main() {
     println!("Hello");
+    println!("World");
 }
"#;

    #[test]
    fn test_modified_line_scenario() {
        let diff = "@@ -1,3 +1,4 @@\n line1\n-line2\n+line2-modified\n+line2b\n line3";

        assert_eq!(
            parse_unified_diff(diff),
            vec![
                DiffLineRecord::unchanged(1, "line1"),
                DiffLineRecord::removed(2, "line2"),
                DiffLineRecord::added(2, "line2-modified"),
                DiffLineRecord::added(3, "line2b"),
                DiffLineRecord::unchanged(4, "line3"),
            ]
        );
    }

    #[test]
    fn test_preamble_is_skipped() {
        let records = parse_unified_diff(SAMPLE_DIFF);

        assert_eq!(
            records,
            vec![
                DiffLineRecord::unchanged(1, "fn main() {"),
                DiffLineRecord::unchanged(2, "    println!(\"Hello\");"),
                DiffLineRecord::added(3, "    println!(\"World\");"),
                DiffLineRecord::unchanged(4, "}"),
            ]
        );
    }

    #[test]
    fn test_preamble_only_yields_nothing() {
        let diff = "diff --git a/f b/f\nindex ab12..cd34\n--- a/f\n+++ b/f\n";
        assert!(parse_unified_diff(diff).is_empty());
    }

    #[test]
    fn test_empty_and_plain_text() {
        assert!(parse_unified_diff("").is_empty());
        assert!(parse_unified_diff("just some text\n+ not a diff\n- still not").is_empty());
    }

    #[test]
    fn test_header_counts_default_to_one() {
        let short = parse_unified_diff("@@ -5 +5 @@\n-old\n+new\n ctx");
        let long = parse_unified_diff("@@ -5,1 +5,1 @@\n-old\n+new\n ctx");
        assert_eq!(short, long);
        assert_eq!(short[0], DiffLineRecord::removed(5, "old"));
        assert_eq!(short[1], DiffLineRecord::added(5, "new"));
        assert_eq!(short[2], DiffLineRecord::unchanged(6, "ctx"));

        assert_eq!(parse_hunk_header("@@ -5 +7 @@"), Some(HunkHeader::new(5, 1, 7, 1)));
    }

    #[test]
    fn test_second_hunk_resets_counters() {
        let diff = "@@ -1,2 +1,2 @@\n a\n b\n@@ -10,1 +10,1 @@\n c";
        let records = parse_unified_diff(diff);

        assert_eq!(
            records,
            vec![
                DiffLineRecord::unchanged(1, "a"),
                DiffLineRecord::unchanged(2, "b"),
                DiffLineRecord::unchanged(10, "c"),
            ]
        );
    }

    #[test]
    fn test_prefix_only_line_has_empty_content() {
        let records = parse_unified_diff("@@ -3,2 +3,2 @@\n \n-\n+");
        assert_eq!(
            records,
            vec![
                DiffLineRecord::unchanged(3, ""),
                DiffLineRecord::removed(4, ""),
                DiffLineRecord::added(4, ""),
            ]
        );
    }

    #[test]
    fn test_no_newline_marker_is_ignored() {
        let diff = "@@ -1 +1 @@\n-old\n\\ No newline at end of file\n+new\n\\ No newline at end of file\n";
        assert_eq!(
            parse_unified_diff(diff),
            vec![DiffLineRecord::removed(1, "old"), DiffLineRecord::added(1, "new")]
        );
    }

    #[test]
    fn test_malformed_header_is_dropped() {
        // Counters keep going from the first hunk
        let diff = "@@ -1,1 +1,1 @@\n a\n@@ -x,1 +y @@\n b\n@@ bogus\n+c";
        assert_eq!(
            parse_unified_diff(diff),
            vec![
                DiffLineRecord::unchanged(1, "a"),
                DiffLineRecord::unchanged(2, "b"),
                DiffLineRecord::added(3, "c"),
            ]
        );
        assert_eq!(parse_hunk_header("@@ -1,1 +1,1"), None);
        assert_eq!(parse_hunk_header(" @@ -1 +1 @@"), None);
    }

    #[test]
    fn test_header_with_oversized_number_is_not_a_header() {
        // u64::MAX + 1
        assert_eq!(parse_hunk_header("@@ -18446744073709551616 +1 @@"), None);
        assert!(parse_unified_diff("@@ -18446744073709551616 +1 @@\n+a").is_empty());
    }

    #[test]
    fn test_large_start_lines_keep_advancing() {
        let diff = "@@ -4294967295 +4294967295 @@\n a\n a\n-b\n+c";
        assert_eq!(
            parse_unified_diff(diff),
            vec![
                DiffLineRecord::unchanged(4_294_967_295, "a"),
                DiffLineRecord::unchanged(4_294_967_296, "a"),
                DiffLineRecord::removed(4_294_967_297, "b"),
                DiffLineRecord::added(4_294_967_297, "c"),
            ]
        );
    }

    #[test]
    fn test_header_numbers_are_ascii_digits_only() {
        // Arabic-Indic digit one
        assert_eq!(parse_hunk_header("@@ -\u{0661} +\u{0661} @@"), None);
        assert!(parse_unified_diff("@@ -\u{0661} +\u{0661} @@\n+a").is_empty());
        assert_eq!(
            parse_hunk_header("@@ -1 +1 @@ \u{0661}"),
            Some(HunkHeader::new(1, 1, 1, 1))
        );
    }

    #[test]
    fn test_file_headers_mid_stream_produce_no_records() {
        let diff = "@@ -1 +1 @@\n a\ndiff --git a/g b/g\nindex 1..2\n@@ -4,1 +4,2 @@\n x\n+y";
        assert_eq!(
            parse_unified_diff(diff),
            vec![
                DiffLineRecord::unchanged(1, "a"),
                DiffLineRecord::unchanged(4, "x"),
                DiffLineRecord::added(5, "y"),
            ]
        );
    }

    #[test]
    fn test_new_file_hunk_starts_at_one() {
        let diff = "--- /dev/null\n+++ b/new.rs\n@@ -0,0 +1,2 @@\n+fn a() {}\n+fn b() {}";
        assert_eq!(
            parse_unified_diff(diff),
            vec![
                DiffLineRecord::added(1, "fn a() {}"),
                DiffLineRecord::added(2, "fn b() {}"),
            ]
        );
    }

    #[test]
    fn test_deleted_file_hunk() {
        let diff = "@@ -1,2 +0,0 @@\n-fn a() {}\n-fn b() {}";
        assert_eq!(
            parse_unified_diff(diff),
            vec![
                DiffLineRecord::removed(1, "fn a() {}"),
                DiffLineRecord::removed(2, "fn b() {}"),
            ]
        );
    }

    #[test]
    fn test_zero_header_stays_inactive() {
        assert!(parse_unified_diff("@@ -0,0 +0,0 @@\n+a").is_empty());
    }

    #[test]
    fn test_crlf_is_kept_in_content() {
        let records = parse_unified_diff("@@ -1 +1 @@\r\n+a\r\n");
        // "\r" after the header breaks nothing: the header regex ignores trailing text
        assert_eq!(records, vec![DiffLineRecord::added(1, "a\r")]);
    }
}
