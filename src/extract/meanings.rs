//! Meaning extraction from a KANJIDIC-style dictionary document
//!
//! Each `character` entry holds a `literal` child and a set of glosses
//! tagged by language. Only English glosses feed the prompt; a missing
//! or empty `m_lang` tag counts as English, matching the dictionary's
//! attribute-omission convention for its default language.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use super::ExtractError;

/// Mapping from character to prompt string, in first-seen order
pub type MeaningMap = IndexMap<char, String>;

/// Extract per-character prompts from a dictionary document
///
/// The prompt is the character's unique English glosses sorted in
/// ascending code-point order and joined with `", "`. Entries without a
/// usable literal or without any English gloss are skipped. Duplicate
/// literals overwrite the earlier entry.
///
/// # Example
///
/// ```rust
/// use kanji_dataset::extract_meanings;
///
/// let meanings = extract_meanings(
///     r#"<kanjidic2><character>
///         <literal>一</literal>
///         <meaning>one</meaning>
///         <meaning m_lang="fr">un</meaning>
///     </character></kanjidic2>"#,
/// ).unwrap();
/// assert_eq!(meanings[&'一'], "one");
/// ```
pub fn extract_meanings(source: &str) -> Result<MeaningMap, ExtractError> {
    let doc = roxmltree::Document::parse(source)?;
    let mut meanings = MeaningMap::new();

    for entry in doc.descendants().filter(|n| n.has_tag_name("character")) {
        let Some(ch) = literal_char(entry) else {
            continue;
        };

        let english: BTreeSet<&str> = entry
            .descendants()
            .filter(|n| n.has_tag_name("meaning"))
            .filter(|m| is_english(m.attribute("m_lang")))
            .filter_map(|m| m.text())
            .filter(|text| !text.is_empty())
            .collect();
        if english.is_empty() {
            continue;
        }

        let prompt = english.into_iter().collect::<Vec<_>>().join(", ");
        meanings.insert(ch, prompt);
    }

    Ok(meanings)
}

/// Glosses with one of these language tags feed the prompt
fn is_english(lang: Option<&str>) -> bool {
    matches!(lang, None | Some("") | Some("en"))
}

/// The entry's literal, if it is exactly one character
///
/// A multi-character literal could never join against the stroke map's
/// single-character keys, so it is dropped here.
fn literal_char(entry: roxmltree::Node<'_, '_>) -> Option<char> {
    let literal = entry
        .children()
        .find(|n| n.has_tag_name("literal"))
        .and_then(|n| n.text())?;
    let mut chars = literal.chars();
    let ch = chars.next()?;
    chars.next().is_none().then_some(ch)
}
