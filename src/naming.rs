//! Backup file naming.
//!
//! The filename is the only backup index this tool keeps: a backup of
//! `report.txt` made at 2023-01-02 00:00:00 lands in the backup directory
//! as `report-20230102T000000.txt`. The pattern built here is the sole rule
//! for recognizing a file as a backup of a given source, whichever run
//! produced it.

use regex::Regex;
use std::path::{Path, PathBuf};

/// Split a file name into base and extension at the final dot.
///
/// The extension keeps its leading dot. A name with no dot, a name ending
/// in a dot, and a hidden file with no secondary extension (`.bashrc`) all
/// have an empty extension.
pub fn split_name_ext(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    }
}

/// Canonical backup path for a source file:
/// `parent/<dir_name>/<base>-<timestamp><ext>`.
pub fn backup_path(source: &Path, dir_name: &str, timestamp: &str) -> PathBuf {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (base, ext) = split_name_ext(&name);
    let backup_name = format!("{}-{}{}", base, timestamp, ext);

    source
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(dir_name)
        .join(backup_name)
}

/// Pattern recognizing `<base>-YYYYMMDDThhmmss<ext>` at the end of a file
/// name. A `-` separating date and time is accepted alongside `T` so that
/// backups written by earlier naming schemes keep matching.
pub fn backup_pattern(base: &str, ext: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"{}-\d{{8}}[T\-]\d{{6}}{}$",
        regex::escape(base),
        regex::escape(ext)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple_name() {
        assert_eq!(split_name_ext("report.txt"), ("report", ".txt"));
    }

    #[test]
    fn test_split_multi_dot_name_at_final_dot() {
        assert_eq!(split_name_ext("archive.tar.gz"), ("archive.tar", ".gz"));
    }

    #[test]
    fn test_split_name_without_dot() {
        assert_eq!(split_name_ext("Makefile"), ("Makefile", ""));
    }

    #[test]
    fn test_split_hidden_file_has_no_extension() {
        assert_eq!(split_name_ext(".bashrc"), (".bashrc", ""));
    }

    #[test]
    fn test_split_hidden_file_with_secondary_extension() {
        assert_eq!(split_name_ext(".config.yml"), (".config", ".yml"));
    }

    #[test]
    fn test_split_trailing_dot() {
        assert_eq!(split_name_ext("weird."), ("weird.", ""));
    }

    #[test]
    fn test_backup_path_layout() {
        let path = backup_path(
            Path::new("/data/docs/report.txt"),
            "ts_backups",
            "20230102T000000",
        );
        assert_eq!(
            path,
            Path::new("/data/docs/ts_backups/report-20230102T000000.txt")
        );
    }

    #[test]
    fn test_backup_path_without_extension() {
        let path = backup_path(Path::new("notes/Makefile"), "ts_backups", "20230102T000000");
        assert_eq!(path, Path::new("notes/ts_backups/Makefile-20230102T000000"));
    }

    #[test]
    fn test_pattern_accepts_both_separators() {
        let pattern = backup_pattern("report", ".txt").unwrap();

        assert!(pattern.is_match("report-20230102T000000.txt"));
        assert!(pattern.is_match("report-20230102-000000.txt"));
    }

    #[test]
    fn test_pattern_is_anchored_at_the_end() {
        let pattern = backup_pattern("report", ".txt").unwrap();

        assert!(!pattern.is_match("report-20230102T000000.txt.bak"));
        assert!(!pattern.is_match("report-20230102T000000.log"));
    }

    #[test]
    fn test_pattern_escapes_extension_dot() {
        let pattern = backup_pattern("report", ".txt").unwrap();

        assert!(!pattern.is_match("report-20230102T000000xtxt"));
    }

    #[test]
    fn test_pattern_rejects_malformed_timestamps() {
        let pattern = backup_pattern("report", ".txt").unwrap();

        assert!(!pattern.is_match("report-2023T000000.txt"));
        assert!(!pattern.is_match("report-20230102T00.txt"));
        assert!(!pattern.is_match("report-20230102X000000.txt"));
    }
}
