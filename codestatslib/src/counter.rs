//! Non-blank line counting for a single file.

use std::fs;
use std::io;
use std::path::Path;

use crate::encoding;

/// Count lines whose trimmed content is non-empty.
///
/// The file's encoding is resolved from its leading bytes; decoding uses
/// replacement for malformed sequences. When no encoding resolves with
/// sufficient confidence the file counts as zero lines; callers still
/// classify it, so it contributes a zero-count entry rather than an error.
///
/// IO failures (permissions, vanished file) are returned for the caller to
/// record; they never abort a scan.
pub fn count_lines(path: impl AsRef<Path>) -> io::Result<u64> {
    let bytes = fs::read(path)?;
    let sample = &bytes[..bytes.len().min(encoding::SAMPLE_SIZE)];
    let Some(enc) = encoding::resolve(sample) else {
        return Ok(0);
    };
    let (text, _, _) = enc.decode(&bytes);
    Ok(count_text(&text))
}

/// Count non-blank lines in already-decoded text.
pub fn count_text(text: &str) -> u64 {
    text.lines().filter(|line| !line.trim().is_empty()).count() as u64
}
