//! Kanji Dataset - paired stroke-art/prompt dataset builder
//!
//! This library joins two public kanji reference corpora by character: a
//! stroke-vector corpus (KanjiVG-style XML) supplies per-character SVG
//! line art, and a dictionary corpus (KANJIDIC2-style XML) supplies
//! English glosses. For every character present in both, the builder
//! writes an SVG file and a CSV manifest row mapping
//! character -> prompt -> SVG file path.
//!
//! # Example
//!
//! ```rust
//! use kanji_dataset::{extract_meanings, extract_strokes, StrokeStyle};
//!
//! let strokes = extract_strokes(
//!     r#"<kanjivg><kanji id="kvg:kanji_04e00"><path d="M11,54 L98,54"/></kanji></kanjivg>"#,
//!     &StrokeStyle::default(),
//! ).unwrap();
//! let meanings = extract_meanings(
//!     r#"<kanjidic2><character><literal>一</literal><meaning>one</meaning></character></kanjidic2>"#,
//! ).unwrap();
//!
//! assert!(strokes[&'一'].contains("<path"));
//! assert_eq!(meanings[&'一'], "one");
//! ```

use std::fs;
use std::path::{Path, PathBuf};

pub mod extract;
pub mod style;
pub mod writer;

pub use extract::{extract_meanings, extract_strokes, ExtractError, MeaningMap, StrokeMap};
pub use style::{StrokeStyle, StyleError};
pub use writer::{write_dataset, DatasetSummary, WriteError};

use thiserror::Error;

/// Errors that can occur during the build pipeline
#[derive(Debug, Error)]
pub enum BuildError {
    /// A source document could not be read from disk
    #[error("failed to read '{}': {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Error during extraction
    #[error("extract error: {0}")]
    Extract(#[from] ExtractError),

    /// Error while writing the output tree
    #[error("write error: {0}")]
    Write(#[from] WriteError),
}

/// Configuration for the complete build pipeline
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    /// Stroke presentation for the synthesized SVG files
    pub style: StrokeStyle,
}

impl BuildConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stroke style
    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }
}

/// Build the dataset from two source files with default configuration
///
/// Reads both XML documents, runs the two extraction passes, and writes
/// the joined dataset under `out_dir`. The extraction passes are
/// independent of each other; everything runs on the calling thread.
pub fn build_dataset(
    kvg_path: &Path,
    dic_path: &Path,
    out_dir: &Path,
) -> Result<DatasetSummary, BuildError> {
    build_dataset_with_config(kvg_path, dic_path, out_dir, BuildConfig::default())
}

/// Build the dataset from two source files with custom configuration
pub fn build_dataset_with_config(
    kvg_path: &Path,
    dic_path: &Path,
    out_dir: &Path,
    config: BuildConfig,
) -> Result<DatasetSummary, BuildError> {
    let kvg_source = read_input(kvg_path)?;
    let dic_source = read_input(dic_path)?;

    let strokes = extract_strokes(&kvg_source, &config.style)?;
    let meanings = extract_meanings(&dic_source)?;

    Ok(write_dataset(&strokes, &meanings, out_dir)?)
}

fn read_input(path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path).map_err(|source| BuildError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}
