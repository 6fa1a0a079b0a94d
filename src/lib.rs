//! # Imgsieve - Dimension-Based Batch Image Filtering
//!
//! Imgsieve scans one directory of images, classifies every image by its
//! pixel dimensions against a composed predicate, and applies one terminal
//! action to the matching subset.
//!
//! ## Features
//!
//! - **Composable filters**: shape (landscape/portrait, square-inclusive)
//!   and exact/min/max width and height constraints, combined conjunctively
//! - **Header-only probing**: dimensions are read from image metadata, never
//!   from pixel data
//! - **Partial-failure tolerance**: one unreadable file never cancels a batch
//! - **Four terminal actions**: report (text, JSON, or bare paths), move,
//!   copy, and delete
//!
//! ## Quick Start
//!
//! ```bash
//! # Report every landscape image in the photos directory
//! imgsieve -l ~/photos
//!
//! # Move everything at least 1920 pixels wide into wallpapers/
//! imgsieve --min-width 1920 --move wallpapers ~/photos
//! ```

pub mod actions;
pub mod cli;
pub mod config;
pub mod filter;
pub mod scan;

pub use cli::{Cli, Output};
pub use config::SieveConfig;

/// Result type alias for imgsieve operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
