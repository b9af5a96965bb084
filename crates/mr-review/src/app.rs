//! Read diff text, parse it and write the JSON records.

use anyhow::{Context, Result};
use mr_diff_parser::{parse_unified_diff, render, DiffStats, InputLimit};
use mr_review_config::AppConfig;
use std::io::{Read, Write};
use std::path::PathBuf;

use crate::cli::Cli;

/// Effective settings after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub input: Option<PathBuf>,
    pub pretty: bool,
    pub limit: InputLimit,
}

impl Options {
    pub fn resolve(cli: &Cli, config: &AppConfig) -> Self {
        let max_bytes = match cli.max_bytes {
            Some(0) => None,
            Some(n) => Some(n),
            None => config.max_diff_bytes(),
        };

        Self {
            input: cli.input_path().cloned(),
            pretty: cli.pretty || config.pretty,
            limit: InputLimit { max_bytes },
        }
    }
}

/// Run one parse. `stdin` is only read when no input file is given.
pub fn run(options: &Options, stdin: impl Read, mut out: impl Write) -> Result<()> {
    let diff_text = read_input(options, stdin)?;
    options.limit.check(&diff_text)?;

    let records = parse_unified_diff(&diff_text);
    let stats = DiffStats::from_records(&records);
    log::info!(
        "{} record(s): {} unchanged, {} added, {} removed",
        stats.total(),
        stats.unchanged,
        stats.added,
        stats.removed
    );

    let json = if options.pretty {
        render::to_json_pretty(&records)
    } else {
        render::to_json(&records)
    }
    .context("Failed to serialize records")?;

    writeln!(out, "{}", json).context("Failed to write output")?;
    Ok(())
}

fn read_input(options: &Options, mut stdin: impl Read) -> Result<String> {
    match &options.input {
        Some(path) => {
            log::debug!("Reading diff from {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read diff from {}", path.display()))
        }
        None => {
            log::debug!("Reading diff from stdin");
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .context("Failed to read diff from stdin")?;
            Ok(text)
        }
    }
}
