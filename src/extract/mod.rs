//! Extraction passes over the two kanji reference corpora
//!
//! Both extractors consume a whole XML document and produce an
//! insertion-ordered map keyed by character. They are independent of
//! each other; either can run first.

pub mod meanings;
pub mod strokes;

pub use meanings::{extract_meanings, MeaningMap};
pub use strokes::{extract_strokes, StrokeMap};

use thiserror::Error;

/// Errors raised when a source document cannot be parsed at all
///
/// Per-entry problems (undecodable identifiers, missing path data,
/// missing literals) are not errors; those entries are skipped and
/// extraction continues.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("malformed source document: {0}")]
    Xml(#[from] roxmltree::Error),
}
