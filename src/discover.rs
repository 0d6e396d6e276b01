//! Discovery of existing backups for one source file.

use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Enumerate files in `backup_dir` whose names match `pattern`.
///
/// A missing or unlistable backup directory simply means no backups exist
/// yet. The result is an unordered set; the caller must not rely on any
/// particular iteration order.
pub fn find_backups(backup_dir: &Path, base: &str, pattern: &Regex) -> HashSet<PathBuf> {
    let mut backups = HashSet::new();

    let entries = match fs::read_dir(backup_dir) {
        Ok(entries) => entries,
        Err(_) => return backups,
    };

    for entry in entries.flatten() {
        let name = entry.file_name();
        let name = name.to_string_lossy();

        // Cheap prefilter before the regex
        if !name.starts_with(base) {
            continue;
        }

        if pattern.is_match(&name) {
            debug!("Backup candidate {}", entry.path().display());
            backups.insert(entry.path());
        }
    }

    backups
}
