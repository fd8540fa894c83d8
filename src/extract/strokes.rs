//! Stroke extraction from a KanjiVG-style stroke-vector document
//!
//! Each `kanji` entry carries an `id` attribute whose trailing
//! underscore-delimited token is the character's code point in hex
//! (e.g. `kvg:kanji_04e00`). The entry's path elements are collected in
//! document order and wrapped in the style's SVG envelope.

use indexmap::IndexMap;

use super::ExtractError;
use crate::style::StrokeStyle;

/// Mapping from character to synthesized SVG markup, in first-seen order
pub type StrokeMap = IndexMap<char, String>;

/// Extract per-character SVG markup from a stroke-vector document
///
/// Entries whose identifier does not decode to a Unicode scalar value
/// are skipped, as are entries without any non-empty path data.
/// Duplicate characters overwrite the earlier entry.
///
/// # Example
///
/// ```rust
/// use kanji_dataset::{extract_strokes, StrokeStyle};
///
/// let strokes = extract_strokes(
///     r#"<kanjivg><kanji id="kvg:kanji_04e00"><path d="M11,54 L98,54"/></kanji></kanjivg>"#,
///     &StrokeStyle::default(),
/// ).unwrap();
/// assert!(strokes[&'一'].starts_with("<svg"));
/// ```
pub fn extract_strokes(source: &str, style: &StrokeStyle) -> Result<StrokeMap, ExtractError> {
    let doc = roxmltree::Document::parse(source)?;
    let mut strokes = StrokeMap::new();

    for kanji in doc.descendants().filter(|n| n.has_tag_name("kanji")) {
        let id = kanji.attribute("id").unwrap_or("");
        let Some(ch) = decode_codepoint(id) else {
            continue;
        };

        let segments: Vec<&str> = kanji
            .descendants()
            .filter(|n| n.has_tag_name("path"))
            .filter_map(|p| p.attribute("d"))
            .filter(|d| !d.is_empty())
            .collect();
        if segments.is_empty() {
            continue;
        }

        strokes.insert(ch, synthesize_svg(&segments, style));
    }

    Ok(strokes)
}

/// Decode the trailing underscore-delimited token of an entry identifier
/// as a hexadecimal code point
fn decode_codepoint(id: &str) -> Option<char> {
    let token = id.rsplit('_').next()?;
    u32::from_str_radix(token, 16).ok().and_then(char::from_u32)
}

/// Wrap collected path segments in the SVG envelope
fn synthesize_svg(segments: &[&str], style: &StrokeStyle) -> String {
    let mut svg = style.open_tag();
    for d in segments {
        svg.push_str(&format!(r#"<path d="{}" />"#, d));
    }
    svg.push_str("</svg>");
    svg
}
