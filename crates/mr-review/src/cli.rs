//! CLI argument parsing for mr-review.

use clap::Parser;
use std::path::PathBuf;

/// Parse a unified diff into line-numbered records and print them as JSON.
///
/// Each record carries the line number in the new file (old file for removed
/// lines), the line content and one of NA, ADDED or REMOVED.
#[derive(Parser, Debug)]
#[command(name = "mr-review")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Diff file to read; stdin when omitted or "-"
    pub input: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Reject input larger than this many bytes (0 disables the check)
    #[arg(long, value_name = "N")]
    pub max_bytes: Option<usize>,

    /// Config file to use instead of .mr-review.toml discovery
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Input path, `None` meaning stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }
}
