//! stderr logging via env_logger
//!
//! RUST_LOG wins when set; otherwise the level from the config file is used.
//! stdout is reserved for the JSON output.

use log::LevelFilter;

/// Map a config level name to a filter, defaulting to `Warn`.
fn level_from_name(name: &str) -> LevelFilter {
    match name.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    }
}

/// Initialize logging
pub fn init(config_level: &str) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_from_name(config_level))
        .target(env_logger::Target::Stderr)
        .parse_default_env();

    if let Err(e) = builder.try_init() {
        eprintln!("Failed to initialize logger: {}", e);
    }
}
