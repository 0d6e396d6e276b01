//! Path traversal feeding the backup orchestrator.
//!
//! Directory arguments expand to their regular-file descendants; anything
//! that is neither a regular file nor a directory is skipped.

use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::backup::{process_file, RunContext};
use crate::Result;

/// Process one input argument: a regular file directly, a directory by
/// walking it (unless recursion is disabled).
///
/// A traversal error such as an unlistable subdirectory is the one fatal
/// failure mode of a run; everything file-local is contained downstream.
pub fn process_path(ctx: &mut RunContext, path: &Path) -> Result<()> {
    if path.is_dir() {
        if !ctx.config.recurse {
            debug!("Ignoring directory {} (recursion disabled)", path.display());
            return Ok(());
        }
        // Symlinks are not followed, so the walk cannot cycle.
        for entry in WalkDir::new(path) {
            let entry = entry?;
            if entry.file_type().is_file() {
                process_file(ctx, entry.path());
            }
        }
    } else if path.is_file() {
        process_file(ctx, path);
    } else {
        debug!("Ignoring path {}", path.display());
    }

    Ok(())
}
