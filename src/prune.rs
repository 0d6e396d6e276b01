//! Retention pruning for one source file's backup set.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::config::Config;

/// Delete every backup except the most recent `max_num_backups`.
///
/// The canonical names carry a fixed-width, zero-padded timestamp, so an
/// ascending lexical sort is chronological and the survivors are the
/// lexically greatest N names. With a limit of 0 every backup is a deletion
/// candidate. Honors `unlink` (report instead of delete) and `dry_run`
/// (never mutate). Per-file delete failures are warnings, not fatal.
/// Returns the number of files actually removed.
pub fn prune(backups: &HashSet<PathBuf>, config: &Config) -> usize {
    let mut sorted: Vec<&PathBuf> = backups.iter().collect();
    sorted.sort();

    let excess = sorted.len().saturating_sub(config.max_num_backups);
    let mut removed = 0;

    for superfluous in &sorted[..excess] {
        if !config.unlink {
            debug!(
                "Would delete superfluous backup {} (unlink disabled)",
                superfluous.display()
            );
            continue;
        }
        if config.dry_run {
            debug!("Would delete superfluous backup {}", superfluous.display());
            continue;
        }
        match fs::remove_file(superfluous) {
            Ok(()) => {
                debug!("Removed superfluous backup {}", superfluous.display());
                removed += 1;
            }
            Err(e) => {
                warn!("Failed to remove {}: {}", superfluous.display(), e);
            }
        }
    }

    removed
}
