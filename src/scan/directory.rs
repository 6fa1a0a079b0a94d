//! Candidate enumeration for one scan pass

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// List candidate image files among the direct entries of `root`.
///
/// Hidden names (leading `.`), entries that are not regular files, and names
/// whose suffix is not in the extension allow-list are skipped. The result
/// keeps directory-listing order; it is not sorted.
pub fn list_candidates(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("Failed to read directory: {}", root.display()))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", root.display()))?;
        let name = entry.file_name();
        // Extension matching is case-sensitive, so a non-UTF-8 name can never match.
        let Some(name) = name.to_str() else { continue };
        if name.starts_with('.') {
            continue;
        }
        if !has_recognized_extension(name, extensions) {
            continue;
        }
        // is_file() follows symlinks, so a link that resolves to a regular file counts.
        if !entry.path().is_file() {
            continue;
        }
        candidates.push(entry.path());
    }
    Ok(candidates)
}

fn has_recognized_extension(name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}
