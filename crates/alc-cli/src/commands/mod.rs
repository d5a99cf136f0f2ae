//! Command handler modules for alc-cli.
//!
//! Shared input helpers live here; command logic lives in the submodules.

pub mod check;

use alc_reconcile::NamedLog;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reject files whose extension is not in `allowed` (lower-case, no dot).
pub fn ensure_allowed_extension(path: &Path, allowed: &[String]) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext {
        Some(e) if allowed.iter().any(|a| *a == e) => Ok(()),
        _ => anyhow::bail!(
            "'{}' is not an accepted input file (allowed extensions: {})",
            path.display(),
            allowed.join(", ")
        ),
    }
}

/// Read an input file as UTF-8 text, dropping a leading byte-order mark.
pub fn read_log(path: &str, allowed: &[String]) -> Result<NamedLog> {
    let p = Path::new(path);
    ensure_allowed_extension(p, allowed)?;

    let bytes = fs::read(p).with_context(|| format!("read input failed: {path}"))?;
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(&bytes);
    let text = String::from_utf8(bytes.to_vec())
        .with_context(|| format!("input must be UTF-8 text: {path}"))?;

    let name = p
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());

    Ok(NamedLog::new(name, text))
}
