//! Input discovery and output naming.

use std::path::{Path, PathBuf};

use crate::error::ArtError;
use crate::models::{AppConfig, OutputFormat};

/// Regular files directly inside `dir` whose extension is included by
/// `config`, sorted by file name. Subdirectories are not descended into.
pub fn discover_inputs(dir: &Path, config: &AppConfig) -> Result<Vec<PathBuf>, ArtError> {
    let entries = std::fs::read_dir(dir).map_err(|source| ArtError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut inputs = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_file() {
            continue;
        }
        if config.includes(&path) {
            inputs.push(path);
        } else {
            tracing::trace!(path = %path.display(), "Skipping excluded file");
        }
    }
    inputs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(dir = %dir.display(), count = inputs.len(), "Discovered inputs");
    Ok(inputs)
}

/// `<output_dir>/<input stem>.<format extension>`
pub fn output_path(output_dir: &Path, input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(format.extension());
    output_dir.join(name)
}
