//! Run configuration.
//!
//! Defaults mirror the CLI flags; values can also be loaded from a TOML
//! file, with CLI flags applied on top by the caller.

use serde::Deserialize;
use std::path::Path;

use crate::Result;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Max number of backup files kept per source file
    #[serde(default = "default_max_num_backups")]
    pub max_num_backups: usize,

    /// Name of the backup directory created as a direct child of each
    /// source file's parent
    #[serde(default = "default_backup_dir_name")]
    pub backup_dir_name: String,

    /// Compute and log every decision without touching the filesystem
    #[serde(default)]
    pub dry_run: bool,

    /// When false, superfluous backups are reported instead of removed
    #[serde(default = "default_true")]
    pub unlink: bool,

    /// Descend into directory arguments
    #[serde(default = "default_true")]
    pub recurse: bool,

    /// Regexes matched against a source file's base name; a match makes
    /// the file ineligible for backup
    #[serde(default = "default_ignore_patterns")]
    pub ignore_patterns: Vec<String>,
}

// Default values
fn default_max_num_backups() -> usize {
    5
}

fn default_backup_dir_name() -> String {
    "ts_backups".to_string()
}

fn default_true() -> bool {
    true
}

fn default_ignore_patterns() -> Vec<String> {
    vec!["^~".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_num_backups: default_max_num_backups(),
            backup_dir_name: default_backup_dir_name(),
            dry_run: false,
            unlink: true,
            recurse: true,
            ignore_patterns: default_ignore_patterns(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
