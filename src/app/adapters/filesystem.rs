//! Filesystem adapter for persisting rendered output
//!
//! Exporters always return the rendered text; this adapter is the one place
//! that turns it into a file. A failed write surfaces as
//! [`Error::OutputWrite`] naming the target, so the caller can report it
//! without cancelling the other targets.
//!
//! [`Error::OutputWrite`]: crate::Error::OutputWrite

use crate::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Write rendered text to an output target
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|error| {
                Error::output_write(
                    path.display().to_string(),
                    "failed to create parent directory",
                    error,
                )
            })?;
        }
    }

    std::fs::write(path, content).map_err(|error| {
        Error::output_write(path.display().to_string(), "write failed", error)
    })?;

    debug!("Wrote {} byte(s) to {}", content.len(), path.display());
    Ok(())
}
