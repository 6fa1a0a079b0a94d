//! Terminal actions applied to the match set
//!
//! Exactly one action runs per invocation. Report only prints; move, copy,
//! and delete mutate the filesystem with per-file failure recovery so one
//! bad file cannot cancel the rest of the batch.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::style;

use crate::cli::Output;
use crate::scan::ScanOutcome;

/// Output format for the report action
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable listing with dimensions
    Text,
    /// JSON document with matches and scan statistics
    Json,
    /// Bare paths, one per line
    Paths,
}

/// The single terminal operation applied to every match
#[derive(Debug, Clone)]
pub enum Action {
    /// Print matched paths; no filesystem mutation
    Report { format: ReportFormat },
    /// Relocate matches into the destination directory
    Move { dest: PathBuf },
    /// Duplicate matches into the destination directory
    Copy { dest: PathBuf },
    /// Remove matches, optionally prompting per file
    Delete { confirm: bool },
}

/// Apply the configured action to every candidate in the match set.
///
/// Destination setup failures abort before any file is touched; per-file
/// failures are reported and the batch continues.
pub fn apply(action: &Action, outcome: &ScanOutcome, dry_run: bool, output: &Output) -> Result<()> {
    match action {
        Action::Report { format } => report(*format, outcome, output),
        Action::Move { dest } => {
            if !dry_run {
                ensure_directory(dest)?;
            }
            for candidate in &outcome.matches {
                if dry_run {
                    output.info(&format!(
                        "Would move {} to {}",
                        candidate.path.display(),
                        dest.display()
                    ));
                    continue;
                }
                match move_file(&candidate.path, dest) {
                    Ok(target) => output.success(&format!(
                        "Moved {} ({}x{}) to {}",
                        candidate.path.display(),
                        candidate.width,
                        candidate.height,
                        target.display()
                    )),
                    Err(e) => output.error(&format!("{e:#}")),
                }
            }
            Ok(())
        }
        Action::Copy { dest } => {
            if !dry_run {
                ensure_directory(dest)?;
            }
            for candidate in &outcome.matches {
                if dry_run {
                    output.info(&format!(
                        "Would copy {} to {}",
                        candidate.path.display(),
                        dest.display()
                    ));
                    continue;
                }
                match copy_file(&candidate.path, dest) {
                    Ok(target) => output.success(&format!(
                        "Copied {} ({}x{}) to {}",
                        candidate.path.display(),
                        candidate.width,
                        candidate.height,
                        target.display()
                    )),
                    Err(e) => output.error(&format!("{e:#}")),
                }
            }
            Ok(())
        }
        Action::Delete { confirm } => {
            for candidate in &outcome.matches {
                if dry_run {
                    output.info(&format!("Would delete {}", candidate.path.display()));
                    continue;
                }
                if *confirm && !output.confirm(&format!("Delete {}?", candidate.path.display())) {
                    output.info(&format!("Skipped {}", candidate.path.display()));
                    continue;
                }
                match delete_file(&candidate.path) {
                    Ok(()) => output.success(&format!(
                        "Deleted {} ({}x{})",
                        candidate.path.display(),
                        candidate.width,
                        candidate.height
                    )),
                    Err(e) => output.error(&format!("{e:#}")),
                }
            }
            Ok(())
        }
    }
}

/// Create the destination directory; an existing directory is not an error.
pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create destination directory: {}", path.display()))
}

/// Relocate `src` into `dest_dir`, overwriting a same-named file.
///
/// Rename does not cross filesystems; on failure fall back to copy + remove.
fn move_file(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let target = destination_for(src, dest_dir)?;
    if fs::rename(src, &target).is_err() {
        fs::copy(src, &target)
            .with_context(|| format!("Failed to move {} to {}", src.display(), target.display()))?;
        fs::remove_file(src)
            .with_context(|| format!("Failed to remove {} after copying", src.display()))?;
    }
    Ok(target)
}

fn copy_file(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let target = destination_for(src, dest_dir)?;
    fs::copy(src, &target)
        .with_context(|| format!("Failed to copy {} to {}", src.display(), target.display()))?;
    Ok(target)
}

fn delete_file(path: &Path) -> Result<()> {
    fs::remove_file(path).with_context(|| format!("Failed to delete {}", path.display()))
}

fn destination_for(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let name = src
        .file_name()
        .with_context(|| format!("Source path has no file name: {}", src.display()))?;
    Ok(dest_dir.join(name))
}

/// Print the match set; the listing itself is data and ignores quiet mode.
fn report(format: ReportFormat, outcome: &ScanOutcome, output: &Output) -> Result<()> {
    match format {
        ReportFormat::Text => {
            for candidate in &outcome.matches {
                println!(
                    "{} {}",
                    candidate.path.display(),
                    style(format!("({}x{})", candidate.width, candidate.height)).dim()
                );
            }
            output.success(&format!("{} image(s) matched", outcome.matches.len()));
        }
        ReportFormat::Json => {
            let document = serde_json::json!({
                "matches": outcome.matches.iter().map(|m| serde_json::json!({
                    "path": m.path.display().to_string(),
                    "width": m.width,
                    "height": m.height,
                })).collect::<Vec<_>>(),
                "statistics": {
                    "files_considered": outcome.stats.files_considered,
                    "files_skipped": outcome.stats.files_skipped,
                    "matches": outcome.stats.matches,
                    "scan_duration_ms": outcome.stats.scan_duration_ms,
                }
            });
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
        ReportFormat::Paths => {
            for candidate in &outcome.matches {
                println!("{}", candidate.path.display());
            }
        }
    }
    Ok(())
}
