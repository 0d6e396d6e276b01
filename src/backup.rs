//! Per-file backup orchestration.
//!
//! [`process_file`] is the single entry point the traversal calls for every
//! regular file it discovers: it decides whether a fresh backup is needed,
//! creates one when it is, and prunes the backup set down to the retention
//! limit. It is the only component with side effects; naming, discovery and
//! comparison are pure decision logic.

use chrono::Local;
use filetime::FileTime;
use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::compare::is_backup_of;
use crate::config::Config;
use crate::discover::find_backups;
use crate::naming::{backup_path, backup_pattern, split_name_ext};
use crate::prune::prune;
use crate::Result;

/// Mutable state for one run: the effective configuration, the timestamp
/// shared by every backup the run creates, the compiled ignore rules, and
/// the copy counter. Passed explicitly so that independent runs in one
/// process cannot interfere.
pub struct RunContext {
    pub config: Config,
    pub timestamp: String,
    ignore_rules: Vec<Regex>,
    pub copied: u64,
}

impl RunContext {
    /// Capture "now" once, at second precision. Every backup created
    /// through this context carries the same timestamp, so a single run can
    /// never collide with itself; unchanged files re-run within the same
    /// second are deduplicated by content, not by name.
    pub fn new(config: Config) -> Result<Self> {
        let timestamp = Local::now().format("%Y%m%dT%H%M%S").to_string();
        Self::with_timestamp(config, timestamp)
    }

    /// Build a context around an explicit timestamp.
    pub fn with_timestamp(config: Config, timestamp: String) -> Result<Self> {
        let mut ignore_rules = Vec::with_capacity(config.ignore_patterns.len());
        for pattern in &config.ignore_patterns {
            ignore_rules.push(Regex::new(pattern)?);
        }

        Ok(Self {
            config,
            timestamp,
            ignore_rules,
            copied: 0,
        })
    }

    /// True when `source` must not be backed up: it sits inside a backup
    /// directory, it is not a regular file, or its base name matches an
    /// ignore rule.
    fn should_skip(&self, source: &Path) -> bool {
        for component in source.components() {
            if component.as_os_str() == self.config.backup_dir_name.as_str() {
                debug!("Ignoring {} - in backup path", source.display());
                return true;
            }
        }

        if !source.is_file() {
            return true;
        }

        let name = file_name(source);
        let (base, _) = split_name_ext(&name);
        for rule in &self.ignore_rules {
            if rule.is_match(base) {
                debug!(
                    "Ignoring {} due to match with ignore regex {}",
                    source.display(),
                    rule.as_str()
                );
                return true;
            }
        }

        false
    }
}

fn file_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or(Cow::Borrowed(""))
}

/// Back up one source file.
///
/// Skip-check, discover existing backups, reuse a byte-identical one or
/// create a fresh copy, then prune to the retention limit. Side effects and
/// the copy counter are the only observable results; per-file failures are
/// contained here and never stop the run.
pub fn process_file(ctx: &mut RunContext, source: &Path) {
    if ctx.should_skip(source) {
        return;
    }

    let name = file_name(source).into_owned();
    let (base, ext) = split_name_ext(&name);
    let pattern = match backup_pattern(base, ext) {
        Ok(pattern) => pattern,
        Err(e) => {
            warn!("Skipping {}: {}", source.display(), e);
            return;
        }
    };

    let backup = backup_path(source, &ctx.config.backup_dir_name, &ctx.timestamp);
    let backup_dir = match backup.parent() {
        Some(dir) => dir.to_path_buf(),
        None => return,
    };

    let mut backups = find_backups(&backup_dir, base, &pattern);

    // First byte-identical candidate wins; identical backups are
    // interchangeable, so iteration order does not matter.
    let existing = backups
        .iter()
        .find(|candidate| is_backup_of(candidate, source))
        .cloned();

    if let Some(existing) = existing {
        debug!(
            "Backup file {} is a backup of {}",
            existing.display(),
            source.display()
        );
    } else if ctx.config.dry_run {
        debug!("Would copy {} to {}", source.display(), backup.display());
    } else {
        match create_backup(source, &backup, &backup_dir) {
            Ok(()) => {
                info!("Copied {} to {}", source.display(), backup.display());
                backups.insert(backup.clone());
                ctx.copied += 1;
            }
            Err(e) => {
                warn!(
                    "Copy from {} to {} failed: {}",
                    source.display(),
                    backup.display(),
                    e
                );
            }
        }
    }

    prune(&backups, &ctx.config);
}

/// Create the backup directory if needed, copy the file, and carry the
/// source's modification time over to the copy.
fn create_backup(source: &Path, backup: &Path, backup_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(backup_dir)?;
    fs::copy(source, backup)?;

    let metadata = fs::metadata(source)?;
    filetime::set_file_mtime(backup, FileTime::from_last_modification_time(&metadata))?;

    Ok(())
}
