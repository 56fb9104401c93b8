// Hebrew letter constants and character classification.
//
// Generated forms pass through an internal alphabet made of the 27 Hebrew
// letter glyphs (U+05D0..U+05EA) plus a handful of ASCII markers that only
// exist between `prepare` and `finalize`.

// ---------------------------------------------------------------------------
// Letters
// ---------------------------------------------------------------------------

pub const ALEF: char = '\u{05D0}'; // א
pub const BET: char = '\u{05D1}'; // ב
pub const HE: char = '\u{05D4}'; // ה
pub const VAV: char = '\u{05D5}'; // ו
pub const YOD: char = '\u{05D9}'; // י
pub const FINAL_KAF: char = '\u{05DA}'; // ך
pub const KAF: char = '\u{05DB}'; // כ
pub const FINAL_MEM: char = '\u{05DD}'; // ם
pub const MEM: char = '\u{05DE}'; // מ
pub const FINAL_NUN: char = '\u{05DF}'; // ן
pub const NUN: char = '\u{05E0}'; // נ
pub const FINAL_PE: char = '\u{05E3}'; // ף
pub const PE: char = '\u{05E4}'; // פ
pub const FINAL_TSADI: char = '\u{05E5}'; // ץ
pub const TSADI: char = '\u{05E6}'; // צ
pub const TAV: char = '\u{05EA}'; // ת

/// Pairs of (ordinary glyph, final glyph) for the five letters that have a
/// distinct word-final shape.
pub const FINAL_FORM_PAIRS: &[(char, char)] = &[
    (KAF, FINAL_KAF),
    (MEM, FINAL_MEM),
    (NUN, FINAL_NUN),
    (PE, FINAL_PE),
    (TSADI, FINAL_TSADI),
];

// ---------------------------------------------------------------------------
// Separators that may legally appear in output
// ---------------------------------------------------------------------------

/// Maqaf written as an ASCII hyphen. Marks a construct form joined to the
/// following word.
pub const HYPHEN: char = '-';

/// Geresh written as an ASCII apostrophe (single-letter abbreviations).
pub const GERESH: char = '\'';

/// Gershayim written as an ASCII double quote (multi-letter abbreviations).
pub const GERSHAYIM: char = '"';

// ---------------------------------------------------------------------------
// Internal markers
// ---------------------------------------------------------------------------

/// Consonantal yod. Resolved to one or two yods by `finalize`.
pub const GLIDE_Y: char = 'Y';

/// Consonantal vav. Resolved to one or two vavs by `finalize`.
pub const GLIDE_W: char = 'W';

/// Word-final vowel yod of an adjective stem (chirik male), kept apart from
/// a consonantal yod until `finalize`.
pub const CHIRIK_YOD: char = 'I';

/// Check whether a character is one of the 27 Hebrew letter glyphs.
pub fn is_hebrew_letter(c: char) -> bool {
    ('\u{05D0}'..='\u{05EA}').contains(&c)
}

/// Check whether a character is a glide marker (`Y` or `W`).
pub fn is_glide(c: char) -> bool {
    c == GLIDE_Y || c == GLIDE_W
}

/// Check whether a character is any internal marker that must never reach
/// the output.
pub fn is_marker(c: char) -> bool {
    is_glide(c) || c == CHIRIK_YOD
}

/// Check whether a character is one of the five final glyphs.
pub fn is_final_form(c: char) -> bool {
    FINAL_FORM_PAIRS.iter().any(|&(_, f)| f == c)
}

/// Check whether a character is an ordinary glyph that has a final variant.
pub fn has_final_form(c: char) -> bool {
    FINAL_FORM_PAIRS.iter().any(|&(o, _)| o == c)
}

/// Return the final glyph for an ordinary letter, or the character unchanged.
pub fn to_final_form(c: char) -> char {
    FINAL_FORM_PAIRS
        .iter()
        .find(|&&(o, _)| o == c)
        .map_or(c, |&(_, f)| f)
}

/// Return the ordinary glyph for a final letter, or the character unchanged.
pub fn to_medial_form(c: char) -> char {
    FINAL_FORM_PAIRS
        .iter()
        .find(|&&(_, f)| f == c)
        .map_or(c, |&(o, _)| o)
}

/// Check whether `word` ends with the letter sequence `suffix`, treating a
/// final glyph and its ordinary glyph as the same letter.
pub fn ends_with_letters(word: &str, suffix: &[char]) -> bool {
    let mut chars = word.chars().rev();
    for &expected in suffix.iter().rev() {
        match chars.next() {
            Some(c) if to_medial_form(c) == to_medial_form(expected) => {}
            _ => return false,
        }
    }
    true
}

/// Check whether a character may appear in a finished surface form.
pub fn is_surface_char(c: char) -> bool {
    is_hebrew_letter(c) || c == HYPHEN || c == GERESH || c == GERSHAYIM
}
