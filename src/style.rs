//! Stroke style configuration for synthesized SVG output
//!
//! Every emitted SVG shares one envelope: a square viewBox matching the
//! stroke corpus's 109x109 drawing canvas, no fill, and a uniform stroke.
//! Styles can be loaded from TOML to re-render the dataset with a
//! different line weight or color without touching the extractors.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing style files
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Failed to read style file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse style TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Presentation attributes applied to every synthesized SVG
#[derive(Debug, Clone)]
pub struct StrokeStyle {
    /// Optional name for the style
    pub name: Option<String>,
    /// Stroke (line) color
    pub stroke: String,
    /// Stroke width in viewBox units
    pub stroke_width: f64,
    /// Width and height of the square viewBox
    pub view_box: f64,
}

/// TOML structure for deserializing styles
#[derive(Deserialize)]
struct TomlStyle {
    metadata: Option<TomlMetadata>,
    strokes: Option<TomlStrokes>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

#[derive(Deserialize)]
struct TomlStrokes {
    stroke: Option<String>,
    stroke_width: Option<f64>,
    view_box: Option<f64>,
}

impl StrokeStyle {
    /// Load a style from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a style from a TOML string
    ///
    /// Keys omitted from the file keep their default values.
    pub fn from_str(content: &str) -> Result<Self, StyleError> {
        let parsed: TomlStyle = toml::from_str(content)?;
        let defaults = Self::default();
        let strokes = parsed.strokes;

        Ok(StrokeStyle {
            name: parsed.metadata.and_then(|m| m.name),
            stroke: strokes
                .as_ref()
                .and_then(|s| s.stroke.clone())
                .unwrap_or(defaults.stroke),
            stroke_width: strokes
                .as_ref()
                .and_then(|s| s.stroke_width)
                .unwrap_or(defaults.stroke_width),
            view_box: strokes
                .as_ref()
                .and_then(|s| s.view_box)
                .unwrap_or(defaults.view_box),
        })
    }

    /// Opening tag of the SVG envelope shared by every emitted file
    pub fn open_tag(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {vb} {vb}" stroke="{stroke}" fill="none" stroke-width="{width}">"#,
            vb = self.view_box,
            stroke = self.stroke,
            width = self.stroke_width,
        )
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            name: None,
            stroke: "black".to_string(),
            stroke_width: 3.0,
            view_box: 109.0,
        }
    }
}
