#![forbid(unsafe_code)]

//! Matching-side text normalization.
//!
//! All strings pass through [`fold`] before scoring: lowercase, combining
//! marks stripped, and precomposed Latin accented letters folded to their
//! base letter. `"Publicação"` and `"publicacao"` fold to the same bytes,
//! whether the input arrived precomposed (NFC) or decomposed (NFD).
//!
//! The fold walks grapheme clusters so that a base letter and its trailing
//! marks are handled as one unit; anything that is not a recognized accent
//! or mark passes through lowercased.

use unicode_segmentation::UnicodeSegmentation;

/// Fold a string for case- and diacritics-insensitive matching.
#[must_use]
pub fn fold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for grapheme in text.graphemes(true) {
        for ch in grapheme.chars() {
            if is_combining_mark(ch) {
                continue;
            }
            for lower in ch.to_lowercase() {
                out.push(strip_accent(lower));
            }
        }
    }
    out
}

/// Whether a char is a combining mark (dropped by the fold).
#[must_use]
pub fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}' | '\u{1AB0}'..='\u{1AFF}' | '\u{20D0}'..='\u{20FF}')
}

/// Map a lowercased precomposed Latin letter to its unaccented base.
const fn strip_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => 'u',
        'ý' | 'ÿ' => 'y',
        'ś' | 'š' => 's',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}
