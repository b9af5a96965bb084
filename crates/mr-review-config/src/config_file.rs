use anyhow::{Context, Result};
use std::{
    env,
    path::{Path, PathBuf},
};

pub const CONFIG_FILE: &str = ".mr-review.toml";

/// Locations searched for `.mr-review.toml`, highest priority first:
/// the working directory, then `$HOME` when set.
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = env::var_os("HOME") {
        candidates.push(PathBuf::from(home).join(CONFIG_FILE));
    }
    candidates
}

/// Content of the first readable `.mr-review.toml`, if any.
pub fn load_config_file() -> Option<String> {
    first_readable(&config_candidates())
}

/// Read a config file given explicitly (e.g. on the command line).
///
/// Unlike [`load_config_file`], a missing file is an error.
pub fn read_config_file(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(content)
}

fn first_readable(candidates: &[PathBuf]) -> Option<String> {
    candidates.iter().find_map(|path| match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(_) => {
            log::trace!("No config at {}", path.display());
            None
        }
    })
}
