// Paradigm generators for nouns and adjectives.
//
// A generator takes a parsed entry and its prepared marker stem and returns
// raw forms in paradigm order. Raw forms still carry markers; the driver
// runs each one through `finalize`.

mod adjective;
mod gender;
mod noun;
mod plural;
mod possessive;

pub use adjective::{AdjectiveParadigm, FeminineShape, feminine_shapes};
pub use gender::noun_gender;
pub use noun::NounParadigm;
pub use plural::{
    DEFAULT_PLURAL_RULES, DefaultPluralRule, ExplicitShape, PluralClass, PluralKind,
    default_plural, explicit_shape, plural_classes,
};

use wolig_core::{PartOfSpeech, RawForm};
use wolig_core::character::{HE, VAV};

use crate::options::{LexiconEntry, OptionSet};
use crate::prepare::PreparedWord;

/// Trait for paradigm generators.
pub trait ParadigmGenerator {
    /// Generate every raw form of `entry`, in emission order.
    fn generate(&self, entry: &LexiconEntry, word: &PreparedWord) -> Vec<RawForm>;
}

/// Select the generator for a part of speech.
pub fn generator_for(pos: PartOfSpeech) -> &'static dyn ParadigmGenerator {
    match pos {
        PartOfSpeech::Noun => &NounParadigm,
        PartOfSpeech::Adjective => &AdjectiveParadigm,
    }
}

/// The stem every inflected form is built on: the prepared stem, minus the
/// first vowel vav when `drop-first-vav` is set.
pub(crate) fn inflection_stem(word: &PreparedWord, options: &OptionSet) -> String {
    if options.drop_first_vav {
        drop_first_vav(&word.stem)
    } else {
        word.stem.clone()
    }
}

/// Remove the first vav after the first letter.
fn drop_first_vav(stem: &str) -> String {
    let mut removed = false;
    stem.chars()
        .enumerate()
        .filter(|&(i, c)| {
            if !removed && i > 0 && c == VAV {
                removed = true;
                false
            } else {
                true
            }
        })
        .map(|(_, c)| c)
        .collect()
}

/// Strip a final He unless `keep_he` is set.
pub(crate) fn strip_final_he(stem: &str, keep_he: bool) -> &str {
    if keep_he {
        stem
    } else {
        stem.strip_suffix(HE).unwrap_or(stem)
    }
}

/// Drop the last `n` characters of `s`.
pub(crate) fn drop_last_chars(s: &str, n: usize) -> &str {
    match s.char_indices().rev().nth(n.saturating_sub(1)) {
        Some((i, _)) if n > 0 => &s[..i],
        Some(_) => s,
        None => "",
    }
}
