//! Byte-level equality between a source file and a backup candidate.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// True when `candidate` has the same size and the same bytes as `source`.
///
/// The size check is a fast reject; the content check is an exact byte
/// comparison rather than a hash, so a hash collision can never produce a
/// false positive. Any I/O error while statting or reading counts as "not
/// a match" for this candidate only.
pub fn is_backup_of(candidate: &Path, source: &Path) -> bool {
    match contents_equal(candidate, source) {
        Ok(equal) => equal,
        Err(e) => {
            debug!(
                "Could not compare {} with {}: {}",
                candidate.display(),
                source.display(),
                e
            );
            false
        }
    }
}

fn contents_equal(a: &Path, b: &Path) -> io::Result<bool> {
    if fs::metadata(a)?.len() != fs::metadata(b)?.len() {
        return Ok(false);
    }

    let mut reader_a = BufReader::new(File::open(a)?);
    let mut reader_b = BufReader::new(File::open(b)?);

    loop {
        let buf_a = reader_a.fill_buf()?;
        let buf_b = reader_b.fill_buf()?;

        if buf_a.is_empty() && buf_b.is_empty() {
            return Ok(true);
        }

        // One side ending early means the file changed between stat and read
        let len = buf_a.len().min(buf_b.len());
        if len == 0 || buf_a[..len] != buf_b[..len] {
            return Ok(false);
        }

        reader_a.consume(len);
        reader_b.consume(len);
    }
}
