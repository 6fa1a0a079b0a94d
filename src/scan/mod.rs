//! Scan pipeline: enumerate candidates, probe headers, classify
//!
//! One pass per invocation, strictly Enumerate -> Probe -> Classify. A
//! candidate whose header cannot be read is skipped with a warning instead
//! of aborting the run.

pub mod directory;
pub mod probe;
pub mod types;

pub use types::{ImageCandidate, ScanOutcome, ScanStats, Warning};

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use crate::filter::Classifier;

/// Run the scan pipeline over the direct entries of `root`.
///
/// Matches preserve enumeration order. Per-file probe failures become
/// [`Warning`]s in the outcome; only enumeration of `root` itself can fail.
pub fn scan_directory(
    root: &Path,
    extensions: &[String],
    classifier: &Classifier,
) -> Result<ScanOutcome> {
    let start = Instant::now();

    let candidates = directory::list_candidates(root, extensions)?;
    let files_considered = candidates.len();
    tracing::debug!(candidates = files_considered, root = %root.display(), "enumerated directory");

    let mut matches = Vec::new();
    let mut warnings = Vec::new();
    let mut files_skipped = 0;

    for path in candidates {
        let (width, height) = match probe::read_dimensions(&path) {
            Ok(dimensions) => dimensions,
            Err(e) => {
                files_skipped += 1;
                warnings.push(Warning {
                    message: format!("{e:#}"),
                });
                continue;
            }
        };
        tracing::trace!(path = %path.display(), width, height, "probed candidate");
        if classifier.matches(width, height) {
            matches.push(ImageCandidate {
                path,
                width,
                height,
            });
        }
    }

    let stats = ScanStats {
        files_considered,
        files_skipped,
        matches: matches.len(),
        scan_duration_ms: start.elapsed().as_millis() as u64,
    };
    tracing::debug!(matches = stats.matches, skipped = stats.files_skipped, "scan complete");

    Ok(ScanOutcome {
        matches,
        stats,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{DimMode, FilterSpec};
    use tempfile::TempDir;

    fn stock_extensions() -> Vec<String> {
        vec![".jpg".into(), ".jpeg".into(), ".png".into(), ".bmp".into()]
    }

    #[test]
    fn corrupt_candidate_is_skipped_with_a_warning() {
        let temp = TempDir::new().unwrap();
        image::RgbImage::new(10, 5)
            .save(temp.path().join("good.png"))
            .unwrap();
        image::RgbImage::new(20, 5)
            .save(temp.path().join("also-good.bmp"))
            .unwrap();
        std::fs::write(temp.path().join("bad.png"), b"garbage").unwrap();

        let classifier = FilterSpec::default().classifier();
        let outcome = scan_directory(temp.path(), &stock_extensions(), &classifier).unwrap();

        assert_eq!(outcome.matches.len(), 2);
        assert_eq!(outcome.stats.files_considered, 3);
        assert_eq!(outcome.stats.files_skipped, 1);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].message.contains("bad.png"));
    }

    #[test]
    fn matches_carry_their_probed_dimensions() {
        let temp = TempDir::new().unwrap();
        image::RgbImage::new(200, 100)
            .save(temp.path().join("wide.png"))
            .unwrap();
        image::RgbImage::new(100, 200)
            .save(temp.path().join("tall.png"))
            .unwrap();

        let spec = FilterSpec {
            width: DimMode::AtLeast(150),
            ..Default::default()
        };
        let outcome = scan_directory(temp.path(), &stock_extensions(), &spec.classifier()).unwrap();

        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(
            (outcome.matches[0].width, outcome.matches[0].height),
            (200, 100)
        );
        assert!(outcome.matches[0].path.ends_with("wide.png"));
    }

    #[test]
    fn empty_directory_yields_an_empty_match_set() {
        let temp = TempDir::new().unwrap();

        let classifier = FilterSpec::default().classifier();
        let outcome = scan_directory(temp.path(), &stock_extensions(), &classifier).unwrap();

        assert!(outcome.matches.is_empty());
        assert_eq!(outcome.stats.files_considered, 0);
        assert!(outcome.warnings.is_empty());
    }
}
