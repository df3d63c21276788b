//! Process-wide constant lexicons and text normalization.
//!
//! Everything here is immutable data, safe to read from any thread.

use unicode_normalization::UnicodeNormalization;

use crate::model::Character;

/// Glyphs that sit on the baseline: no descenders, no diacritics, no
/// punctuation that floats above or below it.
const BASELINE_CHARACTERS: &str =
    "abcdefhiklmnorstuvwxzABCDEFGHIJKLMNOPRSTUVWXYZ0123456789";

/// Hyphen-like glyphs that may end a hyphenated line.
const HYPHENS: &[char] = &[
    '-',        // hyphen-minus
    '\u{00AD}', // soft hyphen
    '\u{2010}', // hyphen
    '\u{2011}', // non-breaking hyphen
    '\u{2012}', // figure dash
    '\u{2013}', // en dash
    '\u{2014}', // em dash
    '\u{2015}', // horizontal bar
    '\u{2212}', // minus sign
];

/// Well-known section heading labels, already normalized.
pub const SECTION_HEADINGS: &[&str] = &[
    "introduction",
    "relatedwork",
    "references",
    "acknowledgements",
    "acknowledgement",
    "acknowledgment",
    "acknowledgments",
    "referencesandnotes",
    "bibliography",
    "conclusion",
    "conclusions",
    "concludingremarks",
];

/// Abstract heading labels, already normalized.
pub const ABSTRACT_HEADINGS: &[&str] = &["abstract"];

/// Reference-section heading labels, already normalized.
pub const REFERENCES_HEADINGS: &[&str] = &["reference", "references", "bibliography"];

/// English stop words excluded from the document word counter.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or",
    "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should", "so",
    "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "would", "you", "your", "yours", "yourself", "yourselves",
];

/// Check whether a glyph rests on the baseline.
pub fn is_baseline_character(character: &Character) -> bool {
    let mut chars = character.text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => BASELINE_CHARACTERS.contains(c),
        _ => false,
    }
}

/// Check whether a glyph ends in a hyphen-class character.
pub fn is_hyphen(character: &Character) -> bool {
    character.last_char().is_some_and(|c| HYPHENS.contains(&c))
}

/// Check whether a character is hyphen-class.
pub fn is_hyphen_char(c: char) -> bool {
    HYPHENS.contains(&c)
}

/// Normalize text for vocabulary lookups and word counting.
///
/// Applies NFKC (folding ligatures such as "ﬁ"), keeps alphabetic
/// characters only, which strips digits, whitespace and punctuation, and
/// lowercases the result. "2. Related Work" becomes "relatedwork".
pub fn normalize(text: &str) -> String {
    text.nfkc()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Font, FontFace, Rectangle};

    fn glyph(text: &str) -> Character {
        Character::new(
            text,
            Rectangle::new(0.0, 0.0, 5.0, 10.0),
            FontFace::new(Font::new("Times"), 10.0),
        )
    }

    #[test]
    fn test_baseline_characters() {
        assert!(is_baseline_character(&glyph("a")));
        assert!(is_baseline_character(&glyph("7")));
        assert!(!is_baseline_character(&glyph("g")));
        assert!(!is_baseline_character(&glyph("y")));
        assert!(!is_baseline_character(&glyph(",")));
        assert!(!is_baseline_character(&glyph("ab")));
        assert!(!is_baseline_character(&glyph("")));
    }

    #[test]
    fn test_hyphens() {
        assert!(is_hyphen(&glyph("-")));
        assert!(is_hyphen(&glyph("\u{2010}")));
        assert!(is_hyphen(&glyph("\u{00AD}")));
        assert!(!is_hyphen(&glyph("a")));
        assert!(!is_hyphen(&glyph("")));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("1 Introduction"), "introduction");
        assert_eq!(normalize("2. Related  Work"), "relatedwork");
        assert_eq!(normalize("REFERENCES"), "references");
        assert_eq!(normalize("\u{FB01}nal"), "final");
        assert_eq!(normalize("42"), "");
    }

    #[test]
    fn test_vocabularies_are_normalized() {
        for label in SECTION_HEADINGS
            .iter()
            .chain(ABSTRACT_HEADINGS)
            .chain(REFERENCES_HEADINGS)
            .chain(STOP_WORDS)
        {
            assert_eq!(normalize(label), **label);
        }
    }
}
