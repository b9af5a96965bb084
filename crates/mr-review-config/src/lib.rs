//! Configuration for mr-review
//!
//! This crate provides:
//! - Configuration file discovery (`.mr-review.toml` in CWD, then home)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;

pub use app_config::AppConfig;
pub use config_file::{config_candidates, load_config_file, read_config_file, CONFIG_FILE};
