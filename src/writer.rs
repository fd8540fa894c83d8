//! Dataset materialization: one SVG file per joined character plus a
//! CSV manifest
//!
//! The writer consumes the two extraction maps, inner-joins them on the
//! character, and emits the output tree:
//!
//! ```text
//! <out>/
//!   svgs/<hex-codepoint>.svg     one per joined character
//!   prompts.csv                  header: character,prompt,svg_path
//! ```
//!
//! There is no rollback: a failed run leaves whatever files were
//! already written.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::extract::{MeaningMap, StrokeMap};

/// Name of the SVG subdirectory under the output root
const SVG_DIR: &str = "svgs";

/// Name of the manifest file under the output root
const CSV_FILE: &str = "prompts.csv";

/// Header row of the manifest
const CSV_HEADER: &str = "character,prompt,svg_path";

/// Errors raised while materializing the dataset
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to write dataset: {0}")]
    Io(#[from] std::io::Error),
}

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    /// Number of character/prompt pairs written
    pub entries: usize,
    /// Directory holding the per-character SVG files
    pub svg_dir: PathBuf,
    /// Path of the CSV manifest
    pub csv_path: PathBuf,
}

/// Join the two maps by character and write the dataset under `out_dir`
///
/// Iteration follows the stroke map's insertion order; characters
/// without a prompt are skipped. Existing files are overwritten, so
/// re-running over identical inputs reproduces the output byte for byte.
pub fn write_dataset(
    strokes: &StrokeMap,
    meanings: &MeaningMap,
    out_dir: &Path,
) -> Result<DatasetSummary, WriteError> {
    let svg_dir = out_dir.join(SVG_DIR);
    fs::create_dir_all(&svg_dir)?;

    let csv_path = out_dir.join(CSV_FILE);
    let mut manifest = BufWriter::new(File::create(&csv_path)?);
    writeln!(manifest, "{}", CSV_HEADER)?;

    let mut entries = 0;
    for (&ch, svg) in strokes {
        let Some(prompt) = meanings.get(&ch) else {
            continue;
        };

        let svg_path = svg_dir.join(svg_filename(ch));
        fs::write(&svg_path, svg)?;

        writeln!(
            manifest,
            "{},{},{}",
            csv_escape(&ch.to_string()),
            csv_escape(prompt),
            csv_escape(&svg_path.display().to_string()),
        )?;
        entries += 1;
    }
    manifest.flush()?;

    Ok(DatasetSummary {
        entries,
        svg_dir,
        csv_path,
    })
}

/// Output filename for a character: its code point as bare lowercase hex
fn svg_filename(ch: char) -> String {
    format!("{:x}.svg", ch as u32)
}

/// Quote a CSV field if it contains the delimiter, a quote, or a newline
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn stroke_map(entries: &[(char, &str)]) -> StrokeMap {
        entries
            .iter()
            .map(|&(ch, svg)| (ch, svg.to_string()))
            .collect()
    }

    fn meaning_map(entries: &[(char, &str)]) -> MeaningMap {
        entries
            .iter()
            .map(|&(ch, prompt)| (ch, prompt.to_string()))
            .collect()
    }

    #[test]
    fn test_svg_filename_is_bare_lowercase_hex() {
        assert_eq!(svg_filename('\u{4e00}'), "4e00.svg");
        assert_eq!(svg_filename('水'), "6c34.svg");
    }

    #[test]
    fn test_csv_escape_plain_field_untouched() {
        assert_eq!(csv_escape("water"), "water");
    }

    #[test]
    fn test_csv_escape_quotes_delimiter_and_quote() {
        assert_eq!(csv_escape("Water, water"), "\"Water, water\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_escape("a\nb"), "\"a\nb\"");
    }

    #[test]
    fn test_join_writes_files_and_manifest() {
        let temp = TempDir::new().unwrap();
        let strokes = stroke_map(&[('水', "<svg>w</svg>"), ('一', "<svg>o</svg>")]);
        let meanings = meaning_map(&[('水', "water"), ('一', "one")]);

        let summary = write_dataset(&strokes, &meanings, temp.path()).unwrap();

        assert_eq!(summary.entries, 2);
        assert_eq!(summary.svg_dir, temp.path().join("svgs"));
        assert_eq!(summary.csv_path, temp.path().join("prompts.csv"));

        assert_eq!(
            fs::read_to_string(summary.svg_dir.join("6c34.svg")).unwrap(),
            "<svg>w</svg>"
        );
        assert_eq!(
            fs::read_to_string(summary.svg_dir.join("4e00.svg")).unwrap(),
            "<svg>o</svg>"
        );

        let manifest = fs::read_to_string(&summary.csv_path).unwrap();
        let expected = format!(
            "character,prompt,svg_path\n水,water,{}\n一,one,{}\n",
            summary.svg_dir.join("6c34.svg").display(),
            summary.svg_dir.join("4e00.svg").display(),
        );
        assert_eq!(manifest, expected);
    }

    #[test]
    fn test_join_miss_is_skipped() {
        let temp = TempDir::new().unwrap();
        let strokes = stroke_map(&[('水', "<svg>w</svg>"), ('火', "<svg>f</svg>")]);
        let meanings = meaning_map(&[('水', "water"), ('土', "earth")]);

        let summary = write_dataset(&strokes, &meanings, temp.path()).unwrap();

        assert_eq!(summary.entries, 1);
        // stroke-only character: no file written
        assert!(!summary.svg_dir.join("706b.svg").exists());
        // meaning-only character: no file, no row
        let manifest = fs::read_to_string(&summary.csv_path).unwrap();
        assert!(!manifest.contains('土'));
        assert!(!manifest.contains('火'));
    }

    #[test]
    fn test_rows_follow_stroke_insertion_order() {
        let temp = TempDir::new().unwrap();
        let strokes = stroke_map(&[('火', "<svg/>"), ('一', "<svg/>"), ('水', "<svg/>")]);
        let meanings = meaning_map(&[('水', "water"), ('火', "fire"), ('一', "one")]);

        write_dataset(&strokes, &meanings, temp.path()).unwrap();

        let manifest = fs::read_to_string(temp.path().join("prompts.csv")).unwrap();
        let order: Vec<char> = manifest
            .lines()
            .skip(1)
            .map(|line| line.chars().next().unwrap())
            .collect();
        assert_eq!(order, vec!['火', '一', '水']);
    }

    #[test]
    fn test_prompt_with_comma_is_quoted() {
        let temp = TempDir::new().unwrap();
        let strokes = stroke_map(&[('水', "<svg/>")]);
        let meanings = meaning_map(&[('水', "Water, water")]);

        write_dataset(&strokes, &meanings, temp.path()).unwrap();

        let manifest = fs::read_to_string(temp.path().join("prompts.csv")).unwrap();
        assert!(manifest.contains("水,\"Water, water\","));
    }

    #[test]
    fn test_rerun_overwrites_in_place() {
        let temp = TempDir::new().unwrap();
        let meanings = meaning_map(&[('水', "water")]);

        write_dataset(&stroke_map(&[('水', "<svg>a</svg>")]), &meanings, temp.path()).unwrap();
        write_dataset(&stroke_map(&[('水', "<svg>b</svg>")]), &meanings, temp.path()).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("svgs").join("6c34.svg")).unwrap(),
            "<svg>b</svg>"
        );
    }

    #[test]
    fn test_empty_join_writes_header_only() {
        let temp = TempDir::new().unwrap();

        let summary =
            write_dataset(&StrokeMap::new(), &MeaningMap::new(), temp.path()).unwrap();

        assert_eq!(summary.entries, 0);
        assert!(summary.svg_dir.is_dir());
        assert_eq!(
            fs::read_to_string(&summary.csv_path).unwrap(),
            "character,prompt,svg_path\n"
        );
    }
}
