//! Writing rendered text to disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use netflux_render::Artifact;

/// Writes `contents` to `path`, creating parent directories as needed.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write file: {}", path.display()))?;
    info!(path = %path.display(), bytes = contents.len(), "file written");
    Ok(())
}

/// Writes `artifact` into `dir` and returns its full path.
pub fn write_artifact(dir: &Path, artifact: &Artifact) -> Result<PathBuf> {
    let path = dir.join(&artifact.file_name);
    write_text(&path, &artifact.contents)?;
    Ok(path)
}

/// Local time formatted for report headers.
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
