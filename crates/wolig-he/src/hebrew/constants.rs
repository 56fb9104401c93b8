// Suffixes and word endings used across the noun and adjective paradigms.
//
// Suffix strings are in the internal alphabet: a `Y` is a consonantal yod
// that `finalize` doubles between plain letters.

use wolig_core::Possessor;
use wolig_core::character::{FINAL_MEM, HE, TAV, VAV, YOD};

/// Masculine plural suffix.
pub(crate) const SUFFIX_IM: &str = "ים";

/// Dual suffix.
pub(crate) const SUFFIX_IIM: &str = "יים";

/// Feminine plural suffix.
pub(crate) const SUFFIX_OT: &str = "ות";

/// Feminine plural suffix after a stem that loses its yod.
pub(crate) const SUFFIX_IOT: &str = "יות";

/// Feminine plural suffix with an alef.
pub(crate) const SUFFIX_XOT: &str = "אות";

/// Masculine plural construct ending.
pub(crate) const CONSTRUCT_YOD: &str = "י";

/// Nouns ending like this already look plural and get no plural forms.
pub(crate) const ALREADY_PLURAL_ENDING: &[char] = &[YOD, YOD, FINAL_MEM];

/// Ending that defaults to the `-iot` class.
pub(crate) const YOD_HE_ENDING: &[char] = &[YOD, HE];

/// Endings that default to the `-ot` class.
pub(crate) const HE_ENDING: &[char] = &[HE];
pub(crate) const TAV_ENDING: &[char] = &[TAV];

/// Explicit plural endings recognized for construct derivation.
pub(crate) const IM_ENDING: &[char] = &[YOD, FINAL_MEM];
pub(crate) const OT_ENDING: &[char] = &[VAV, TAV];

/// Possessive suffixes attached to a singular construct stem.
pub(crate) fn singular_possessive_suffix(p: Possessor) -> &'static str {
    match p {
        Possessor::Me => "י",
        Possessor::YouMasculine => "ך",
        Possessor::YouFeminine => "ך",
        Possessor::Him => "ו",
        Possessor::Her => "ה",
        Possessor::Us => "נו",
        Possessor::YouMasculinePlural => "כם",
        Possessor::YouFemininePlural => "כן",
        Possessor::ThemMasculine => "ם",
        Possessor::ThemFeminine => "ן",
    }
}

/// Possessive suffixes attached to a plural possessive base.
pub(crate) fn plural_possessive_suffix(p: Possessor) -> &'static str {
    match p {
        Possessor::Me => "י",
        Possessor::YouMasculine => "יך",
        Possessor::YouFeminine => "Yך",
        Possessor::Him => "יו",
        Possessor::Her => "יה",
        Possessor::Us => "ינו",
        Possessor::YouMasculinePlural => "יכם",
        Possessor::YouFemininePlural => "יכן",
        Possessor::ThemMasculine => "יהם",
        Possessor::ThemFeminine => "יהן",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_suffixes_start_with_yod_or_glide() {
        for p in Possessor::ALL {
            let first = plural_possessive_suffix(p).chars().next().unwrap();
            assert!(first == YOD || first == wolig_core::character::GLIDE_Y);
        }
    }

    #[test]
    fn second_person_feminine_doubles_the_yod() {
        assert_eq!(plural_possessive_suffix(Possessor::YouFeminine), "Yך");
        assert_eq!(singular_possessive_suffix(Possessor::YouFeminine), "ך");
    }
}
