// Marker postprocessing: turns a raw generated form into output orthography.
//
// The pipeline is a fixed sequence of pure string steps:
//
// 1. final glyphs inside the word become ordinary glyphs
// 2. the chirik-male marker becomes a plain yod
// 3. glide markers become one or two letters
// 4. the word-final letter takes its final glyph
// 5. acronym entries get geresh/gershayim
// 6. dropped forms are discarded
//
// A letter directly followed by a hyphen ends a word, so construct forms
// written with a trailing maqaf keep their final glyph.

use log::{debug, trace};
use wolig_core::character::{
    CHIRIK_YOD, GERESH, GERSHAYIM, GLIDE_W, GLIDE_Y, HYPHEN, VAV, YOD, has_final_form,
    is_final_form, is_glide, is_hebrew_letter, to_final_form, to_medial_form,
};
use wolig_core::{RawForm, SurfaceForm};

/// One pure step of the pipeline.
type Step = fn(&str) -> String;

/// Steps 1-4, applied to every form in this order.
const PIPELINE: &[(&str, Step)] = &[
    ("medial-forms", medial_forms as Step),
    ("vowel-markers", resolve_vowel_markers as Step),
    ("glides", resolve_glides as Step),
    ("final-forms", final_forms as Step),
];

fn is_word_end(chars: &[char], i: usize) -> bool {
    i + 1 == chars.len() || chars[i + 1] == HYPHEN
}

/// Rewrite final glyphs that are not word-final to their ordinary glyph.
pub fn medial_forms(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if is_final_form(c) && !is_word_end(&chars, i) {
                to_medial_form(c)
            } else {
                c
            }
        })
        .collect()
}

/// Collapse the chirik-male marker into a plain yod.
pub fn resolve_vowel_markers(word: &str) -> String {
    word.chars()
        .map(|c| if c == CHIRIK_YOD { YOD } else { c })
        .collect()
}

/// Whether `neighbor` lets a glide be written doubled.
///
/// A word edge, a hyphen, or a vowel letter the glide would merge with (vav
/// for `W`, vav or yod for `Y`) forces a single letter. Another glide is a
/// consonant and counts as plain.
fn is_plain_neighbor(glide: char, neighbor: Option<char>) -> bool {
    match neighbor {
        Some(n) if is_glide(n) => true,
        Some(n) => is_hebrew_letter(n) && n != VAV && !(glide == GLIDE_Y && n == YOD),
        None => false,
    }
}

/// Resolve `Y`/`W` to a doubled letter between plain neighbours, else to a
/// single letter.
pub fn resolve_glides(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        let letter = match c {
            GLIDE_Y => YOD,
            GLIDE_W => VAV,
            _ => {
                out.push(c);
                continue;
            }
        };
        let left = i.checked_sub(1).map(|j| chars[j]);
        let right = chars.get(i + 1).copied();
        out.push(letter);
        if is_plain_neighbor(c, left) && is_plain_neighbor(c, right) {
            out.push(letter);
        }
    }
    out
}

/// Give every word-final letter its final glyph.
pub fn final_forms(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if has_final_form(c) && is_word_end(&chars, i) {
                to_final_form(c)
            } else {
                c
            }
        })
        .collect()
}

/// Mark a word as an abbreviation: geresh after a single letter, gershayim
/// before the last letter otherwise. A trailing hyphen is skipped over, and a
/// hyphen right before the last letter moves the gershayim in front of it.
///
/// A single letter followed by a geresh is no longer word-final, so it takes
/// its ordinary glyph.
pub fn quote_acronym(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    let end = if chars.last() == Some(&HYPHEN) {
        chars.len() - 1
    } else {
        chars.len()
    };
    match end {
        0 => return word.to_string(),
        1 => {
            chars[0] = to_medial_form(chars[0]);
            chars.insert(1, GERESH);
        }
        n if chars[n - 2] == HYPHEN => chars.insert(n - 2, GERSHAYIM),
        n => chars.insert(n - 1, GERSHAYIM),
    }
    chars.into_iter().collect()
}

/// Run the pipeline on one raw form. Returns `None` for dropped forms.
pub fn finalize(form: RawForm, acronym: bool) -> Option<SurfaceForm> {
    if form.has_markers() {
        trace!("resolving markers in {}", form.text);
    }
    let RawForm { text, tag, dropped } = form;
    let mut text = PIPELINE.iter().fold(text, |s, (_, step)| step(&s));
    if acronym {
        text = quote_acronym(&text);
    }
    if dropped {
        debug!("dropping {text} ({tag})");
        return None;
    }
    Some(SurfaceForm::new(text, tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wolig_core::{FormTag, Gender, Number, PartOfSpeech, Role};

    fn tag() -> FormTag {
        FormTag::new(PartOfSpeech::Noun, Gender::Masculine, Number::Singular, Role::Base)
    }

    #[test]
    fn medial_forms_inside_word() {
        assert_eq!(medial_forms("מלךי"), "מלכי");
        assert_eq!(medial_forms("שולחןות"), "שולחנות");
        assert_eq!(medial_forms("מלך"), "מלך");
    }

    #[test]
    fn medial_forms_keep_final_before_hyphen() {
        assert_eq!(medial_forms("חכם-"), "חכם-");
        assert_eq!(medial_forms("בןי-אדם"), "בני-אדם");
    }

    #[test]
    fn vowel_marker() {
        assert_eq!(resolve_vowel_markers("מקומIים"), "מקומיים");
    }

    #[test]
    fn glide_doubles_between_plain_letters() {
        assert_eq!(resolve_glides("קWים"), "קווים");
        assert_eq!(resolve_glides("חYת"), "חיית");
        assert_eq!(resolve_glides("ספרYך"), "ספרייך");
    }

    #[test]
    fn glide_is_single_at_word_edge() {
        assert_eq!(resolve_glides("Wרד"), "ורד");
        assert_eq!(resolve_glides("קW"), "קו");
    }

    #[test]
    fn glide_is_single_next_to_merging_vowel_letter() {
        assert_eq!(resolve_glides("מצWות"), "מצוות");
        assert_eq!(resolve_glides("חYות"), "חיות");
        assert_eq!(resolve_glides("עליYת"), "עלית");
    }

    #[test]
    fn glide_next_to_hyphen_is_single() {
        assert_eq!(resolve_glides("אW-"), "או-");
    }

    #[test]
    fn adjacent_glides_are_both_consonants() {
        assert_eq!(resolve_glides("קWYך"), "קווייך");
        assert_eq!(resolve_glides("WW"), "וו");
    }

    #[test]
    fn final_forms_at_word_end() {
        assert_eq!(final_forms("ספרימ"), "ספרים");
        assert_eq!(final_forms("יפנ"), "יפן");
        assert_eq!(final_forms("חכמ-"), "חכם-");
        assert_eq!(final_forms("ספר"), "ספר");
    }

    #[test]
    fn acronym_quoting() {
        assert_eq!(quote_acronym("ח"), "ח'");
        assert_eq!(quote_acronym("צהל"), "צה\"ל");
        assert_eq!(quote_acronym("חכ-"), "ח\"כ-");
        assert_eq!(quote_acronym("ח-"), "ח'-");
        assert_eq!(quote_acronym(""), "");
    }

    #[test]
    fn acronym_gershayim_skips_inner_hyphen() {
        assert_eq!(quote_acronym("אב-ג"), "אב\"-ג");
        assert_eq!(quote_acronym("אב-ג-"), "אב\"-ג-");
    }

    #[test]
    fn single_letter_acronym_uses_ordinary_glyph() {
        assert_eq!(quote_acronym("ם"), "מ'");
        assert_eq!(quote_acronym("ך-"), "כ'-");
        let form = RawForm::new("מ", tag());
        assert_eq!(finalize(form, true).unwrap().text, "מ'");
    }

    #[test]
    fn finalize_runs_all_steps() {
        let form = RawForm::new("מצWתךם", tag());
        // ך is not final, W doubles, ם stays final
        assert_eq!(finalize(form, false).unwrap().text, "מצוותכם");
    }

    #[test]
    fn finalize_drops_flagged_forms() {
        assert!(finalize(RawForm::dropped("ספרי", tag()), false).is_none());
    }

    #[test]
    fn finalize_quotes_acronyms_after_final_forms() {
        let form = RawForm::new("רמטכל", tag());
        assert_eq!(finalize(form, true).unwrap().text, "רמטכ\"ל");
        let form = RawForm::new("דוחות", tag());
        assert_eq!(finalize(form, true).unwrap().text, "דוחו\"ת");
    }

    #[test]
    fn finalize_keeps_tag() {
        let form = RawForm::new("ספר", tag());
        assert_eq!(finalize(form, false).unwrap().tag, tag());
    }
}
