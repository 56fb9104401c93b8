// Possessive suffix paradigms.

use wolig_core::character::HE;
use wolig_core::{FormTag, Possessor, RawForm, Role};

use crate::hebrew::constants::{plural_possessive_suffix, singular_possessive_suffix};

/// Where a hand-listed extra-yod form is built.
#[derive(Debug, Clone, Copy)]
enum ExtraYodForm {
    /// Suffix on the stem plus yod.
    OnStem(&'static str),
    /// Suffix directly on the head word.
    OnHead(&'static str),
}

/// The extra-yod paradigm (אב, אח, חם): every form but "his" is built on
/// `stem+י`.
const EXTRA_YOD_POSSESSIVES: [(Possessor, ExtraYodForm); 10] = [
    (Possessor::Me, ExtraYodForm::OnStem("")),
    (Possessor::YouMasculine, ExtraYodForm::OnStem("ך")),
    (Possessor::YouFeminine, ExtraYodForm::OnStem("יך")),
    (Possessor::Him, ExtraYodForm::OnHead("יו")),
    (Possessor::Her, ExtraYodForm::OnStem("ה")),
    (Possessor::Us, ExtraYodForm::OnStem("נו")),
    (Possessor::YouMasculinePlural, ExtraYodForm::OnStem("כם")),
    (Possessor::YouFemininePlural, ExtraYodForm::OnStem("כן")),
    (Possessor::ThemMasculine, ExtraYodForm::OnStem("הם")),
    (Possessor::ThemFeminine, ExtraYodForm::OnStem("הן")),
];

/// Long alternate of "his" emitted after the short form in the defective-He
/// paradigm.
const DEFECTIVE_HE_LONG_HIS: &str = "ו";

/// One plural possessive form on `base`.
pub(crate) fn plural_possessive(
    base: &str,
    possessor: Possessor,
    tag: FormTag,
    dropped: bool,
) -> RawForm {
    let text = format!("{base}{}", plural_possessive_suffix(possessor));
    let tag = tag.with_role(Role::Possessive(possessor));
    if dropped {
        RawForm::dropped(text, tag)
    } else {
        RawForm::new(text, tag)
    }
}

/// The regular singular possessive paradigm.
pub(crate) fn singular_possessives(stem: &str, tag: FormTag, forms: &mut Vec<RawForm>) {
    for p in Possessor::ALL {
        forms.push(RawForm::new(
            format!("{stem}{}", singular_possessive_suffix(p)),
            tag.with_role(Role::Possessive(p)),
        ));
    }
}

/// Singular possessives of a defective-He noun: the He is dropped before
/// each suffix, and "his" also gets a long form that keeps it.
pub(crate) fn defective_he_possessives(stem: &str, tag: FormTag, forms: &mut Vec<RawForm>) {
    let short = stem.strip_suffix(HE).unwrap_or(stem);
    for p in Possessor::ALL {
        let tag = tag.with_role(Role::Possessive(p));
        forms.push(RawForm::new(
            format!("{short}{}", singular_possessive_suffix(p)),
            tag,
        ));
        if p == Possessor::Him {
            forms.push(RawForm::new(format!("{stem}{DEFECTIVE_HE_LONG_HIS}"), tag));
        }
    }
}

/// Singular possessives of the extra-yod class.
pub(crate) fn extra_yod_possessives(
    head_word: &str,
    stem: &str,
    tag: FormTag,
    forms: &mut Vec<RawForm>,
) {
    for (p, form) in EXTRA_YOD_POSSESSIVES {
        let text = match form {
            ExtraYodForm::OnStem(suffix) => format!("{stem}י{suffix}"),
            ExtraYodForm::OnHead(suffix) => format!("{head_word}{suffix}"),
        };
        forms.push(RawForm::new(text, tag.with_role(Role::Possessive(p))));
    }
}
