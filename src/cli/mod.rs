//! Command-line interface for imgsieve
//!
//! Defines the option surface, validates the mutually exclusive option
//! groups into a [`FilterSpec`], and drives the scan and the terminal
//! action. clap rejects conflicting flags at parse time; the same invariants
//! are re-checked here so the predicate builder never depends on parser
//! behavior.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser};

mod output;

pub use output::Output;

use crate::actions::{self, Action, ReportFormat};
use crate::config::SieveConfig;
use crate::filter::{DimMode, FilterSpec, ShapeMode};
use crate::scan;

/// imgsieve - dimension-based batch image filtering
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("width_mode").args(["width", "min_width", "max_width"])))]
#[command(group(ArgGroup::new("height_mode").args(["height", "min_height", "max_height"])))]
#[command(group(ArgGroup::new("action").args(["move_to", "copy_to", "delete"])))]
pub struct Cli {
    /// Directory to scan (defaults to the directory containing the executable)
    #[arg(value_name = "PATH")]
    pub input_path: Option<PathBuf>,

    /// Match landscape images (width > height)
    #[arg(short = 'l', long, conflicts_with = "vertical")]
    pub landscape: bool,

    /// Match vertical/portrait images (width < height)
    #[arg(short = 'v', long)]
    pub vertical: bool,

    /// Count squares as matches too (modifies --landscape/--vertical)
    #[arg(short = 's', long)]
    pub square: bool,

    /// Match images whose width is exactly N
    #[arg(short = 'w', long, value_name = "N")]
    pub width: Option<u32>,

    /// Match images whose width is at least N
    #[arg(long, value_name = "N")]
    pub min_width: Option<u32>,

    /// Match images whose width is at most N
    #[arg(long, value_name = "N")]
    pub max_width: Option<u32>,

    /// Match images whose height is exactly N
    #[arg(long, value_name = "N")]
    pub height: Option<u32>,

    /// Match images whose height is at least N
    #[arg(long, value_name = "N")]
    pub min_height: Option<u32>,

    /// Match images whose height is at most N
    #[arg(long, value_name = "N")]
    pub max_height: Option<u32>,

    /// Move matched images into DIR (created if absent)
    #[arg(short = 'm', long = "move", value_name = "DIR")]
    pub move_to: Option<PathBuf>,

    /// Copy matched images into DIR (created if absent)
    #[arg(short = 'c', long = "copy", value_name = "DIR")]
    pub copy_to: Option<PathBuf>,

    /// Delete matched images
    #[arg(short = 'd', long)]
    pub delete: bool,

    /// Ask for confirmation before each delete
    #[arg(long, requires = "delete")]
    pub confirm: bool,

    /// Output format when reporting matches
    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Show what would be done without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Use custom configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.verbose > 0, self.quiet);

        let config = match &self.config {
            Some(path) => SieveConfig::load_from_file(path)?,
            None => SieveConfig::load_or_default(),
        };
        config.validate()?;

        let root = self.resolve_input_path()?;
        let spec = self.filter_spec(&output)?;
        let action = self.action(&config);

        if spec.is_unconstrained() {
            output.verbose("No filters given; every readable image matches");
        }

        let outcome = scan::scan_directory(&root, &config.scan.extensions, &spec.classifier())?;

        for warning in &outcome.warnings {
            output.warning(&warning.message);
        }
        output.summary_stats("candidates", outcome.stats.files_considered);
        output.summary_stats("unreadable", outcome.stats.files_skipped);
        output.summary_stats("matches", outcome.stats.matches);

        if outcome.matches.is_empty() {
            output.info("No images matched");
            return Ok(());
        }

        actions::apply(&action, &outcome, self.dry_run, &output)
    }

    /// Resolve and check the input directory before any scanning starts.
    fn resolve_input_path(&self) -> Result<PathBuf> {
        let path = match &self.input_path {
            Some(path) => path.clone(),
            // Fall back to the directory holding the running program.
            None => std::env::current_exe()
                .context("Failed to locate the running executable")?
                .parent()
                .map(Path::to_path_buf)
                .context("Executable path has no parent directory")?,
        };
        if !path.is_dir() {
            bail!("No such directory: {}", path.display());
        }
        Ok(path)
    }

    /// Validate the option groups and build the filter spec.
    fn filter_spec(&self, output: &Output) -> Result<FilterSpec> {
        if self.landscape && self.vertical {
            bail!("--landscape and --vertical cannot be combined");
        }
        let shape = if self.landscape {
            ShapeMode::Landscape
        } else if self.vertical {
            ShapeMode::Portrait
        } else {
            if self.square {
                output.warning("--square has no effect without --landscape or --vertical");
            }
            ShapeMode::Any
        };

        Ok(FilterSpec {
            shape,
            include_square: self.square,
            width: dim_mode("width", self.width, self.min_width, self.max_width)?,
            height: dim_mode("height", self.height, self.min_height, self.max_height)?,
        })
    }

    /// Resolve the terminal action; report is the default.
    fn action(&self, config: &SieveConfig) -> Action {
        if let Some(dest) = &self.move_to {
            Action::Move { dest: dest.clone() }
        } else if let Some(dest) = &self.copy_to {
            Action::Copy { dest: dest.clone() }
        } else if self.delete {
            Action::Delete {
                confirm: self.confirm || config.actions.confirm_delete,
            }
        } else {
            Action::Report {
                format: self.format,
            }
        }
    }
}

/// Fold one axis's option group into a single mode, rejecting multi-selection.
fn dim_mode(
    axis: &str,
    exact: Option<u32>,
    at_least: Option<u32>,
    at_most: Option<u32>,
) -> Result<DimMode> {
    let selected = [exact.is_some(), at_least.is_some(), at_most.is_some()]
        .iter()
        .filter(|set| **set)
        .count();
    if selected > 1 {
        bail!("Only one {axis} constraint may be given");
    }

    Ok(if let Some(n) = exact {
        DimMode::Exact(n)
    } else if let Some(n) = at_least {
        DimMode::AtLeast(n)
    } else if let Some(n) = at_most {
        DimMode::AtMost(n)
    } else {
        DimMode::Any
    })
}

/// Set up logging based on verbosity
fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
