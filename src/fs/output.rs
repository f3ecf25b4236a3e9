//! Output artifact writer.

use super::atomic::atomic_write_file;
use crate::error::{PromptError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write `text` to `outputs_dir/output_file`, replacing any previous artifact.
///
/// Missing directories (including subdirectories named in `output_file`) are
/// created. Returns the absolute path written.
pub fn write_output(outputs_dir: &Path, output_file: &str, text: &str) -> Result<PathBuf> {
    let path = outputs_dir.join(output_file);

    atomic_write_file(&path, text)?;

    let resolved = std::path::absolute(&path).map_err(|e| {
        PromptError::IoError(format!("failed to resolve '{}': {}", path.display(), e))
    })?;

    debug!(path = %resolved.display(), bytes = text.len(), "wrote output artifact");
    Ok(resolved)
}
