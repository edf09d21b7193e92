//! Read-patch-write of the target source file

use std::error::Error;
use std::fs;
use std::path::Path;

use super::pure::apply_patch;
use super::types::PatchOutcome;

/// Patch the legacy catch block in `path` in place
///
/// Line endings are normalized to `\n` on read, so CRLF files match and are
/// written back with LF endings. The file is always written back, even when
/// nothing matched. There is no backup; read and write failures propagate
/// to the caller.
pub fn patch_file(path: &Path) -> Result<PatchOutcome, Box<dyn Error>> {
    let content = normalize_newlines(&fs::read_to_string(path)?);
    let (patched, outcome) = apply_patch(&content);
    fs::write(path, patched)?;
    Ok(outcome)
}

/// Convert `\r\n` and lone `\r` line endings to `\n`
fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}
