// Plural classes.
//
// A noun's plural classes are either listed by its flags or picked by the
// first matching default rule. Each regular class derives three strings from
// the inflection stem: the plural itself, its construct, and the base the
// possessive suffixes attach to. An explicit plural is taken as written and
// its ending decides the other two.

use log::debug;
use wolig_core::character::{GLIDE_Y, TAV, YOD, ends_with_letters};
use wolig_core::{FormTag, Gender, Number, PartOfSpeech, Possessor, RawForm, Role};

use super::{drop_last_chars, possessive, strip_final_he};
use crate::hebrew::constants::{
    ALREADY_PLURAL_ENDING, CONSTRUCT_YOD, HE_ENDING, IM_ENDING, OT_ENDING, SUFFIX_IIM, SUFFIX_IM,
    SUFFIX_IOT, SUFFIX_OT, SUFFIX_XOT, TAV_ENDING, YOD_HE_ENDING,
};
use crate::options::LexiconEntry;

/// A regular plural class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralKind {
    Im,
    Iim,
    Ot,
    Iot,
    Xot,
}

/// A plural class active for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluralClass {
    /// A plural given verbatim by `plural=`.
    Explicit(String),
    Regular(PluralKind),
}

/// Default plural rule: words with this ending get this class (`None` means
/// no plural at all).
#[derive(Debug, Clone, Copy)]
pub struct DefaultPluralRule {
    pub name: &'static str,
    pub ending: &'static [char],
    pub kind: Option<PluralKind>,
}

/// Ranked default rules; the empty ending always matches.
pub const DEFAULT_PLURAL_RULES: &[DefaultPluralRule] = &[
    DefaultPluralRule {
        name: "already-plural",
        ending: ALREADY_PLURAL_ENDING,
        kind: None,
    },
    DefaultPluralRule {
        name: "yod-he",
        ending: YOD_HE_ENDING,
        kind: Some(PluralKind::Iot),
    },
    DefaultPluralRule {
        name: "he",
        ending: HE_ENDING,
        kind: Some(PluralKind::Ot),
    },
    DefaultPluralRule {
        name: "tav",
        ending: TAV_ENDING,
        kind: Some(PluralKind::Ot),
    },
    DefaultPluralRule {
        name: "fallback",
        ending: &[],
        kind: Some(PluralKind::Im),
    },
];

/// The default plural class of a head word.
pub fn default_plural(head_word: &str) -> Option<PluralKind> {
    let rule = DEFAULT_PLURAL_RULES
        .iter()
        .find(|rule| ends_with_letters(head_word, rule.ending))?;
    debug!("{head_word}: default plural rule {}", rule.name);
    rule.kind
}

/// Active plural classes of an entry, in emission order.
pub fn plural_classes(entry: &LexiconEntry) -> Vec<PluralClass> {
    let options = &entry.options;
    if options.no_plural {
        return Vec::new();
    }
    if !options.has_explicit_plural_class() {
        return default_plural(&entry.head_word)
            .map(PluralClass::Regular)
            .into_iter()
            .collect();
    }

    let mut classes = Vec::new();
    if let Some(plural) = &options.plural {
        classes.push(PluralClass::Explicit(plural.clone()));
    }
    let flagged = [
        (options.im, PluralKind::Im),
        (options.iim, PluralKind::Iim),
        (options.ot, PluralKind::Ot),
        (options.iot, PluralKind::Iot),
        (options.xot, PluralKind::Xot),
    ];
    classes.extend(
        flagged
            .into_iter()
            .filter(|&(on, _)| on)
            .map(|(_, kind)| PluralClass::Regular(kind)),
    );
    classes
}

/// The three strings a plural class contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PluralStems {
    pub base: String,
    pub construct: String,
    pub possessive_base: String,
}

impl PluralStems {
    /// Classes whose construct and possessive base equal the plural.
    fn uniform(base: String) -> Self {
        Self {
            construct: base.clone(),
            possessive_base: base.clone(),
            base,
        }
    }
}

impl PluralKind {
    pub(crate) fn stems(self, stem: &str, keep_he: bool) -> PluralStems {
        let short = strip_final_he(stem, keep_he);
        match self {
            PluralKind::Im | PluralKind::Iim => {
                let suffix = if self == PluralKind::Im {
                    SUFFIX_IM
                } else {
                    SUFFIX_IIM
                };
                PluralStems {
                    base: format!("{short}{suffix}"),
                    construct: format!("{short}{CONSTRUCT_YOD}"),
                    possessive_base: short.to_string(),
                }
            }
            PluralKind::Ot => {
                let t = short.strip_suffix(TAV).unwrap_or(short);
                PluralStems::uniform(format!("{t}{SUFFIX_OT}"))
            }
            PluralKind::Iot => {
                let t = short.strip_suffix(TAV).unwrap_or(short);
                let suffix = if t.ends_with(YOD) || t.ends_with(GLIDE_Y) {
                    SUFFIX_OT
                } else {
                    SUFFIX_IOT
                };
                PluralStems::uniform(format!("{t}{suffix}"))
            }
            PluralKind::Xot => PluralStems::uniform(format!("{short}{SUFFIX_XOT}")),
        }
    }
}

/// Recognized endings of an explicit plural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplicitShape {
    Im,
    Ot,
}

const EXPLICIT_SHAPES: &[(&[char], ExplicitShape)] =
    &[(IM_ENDING, ExplicitShape::Im), (OT_ENDING, ExplicitShape::Ot)];

/// Classify an explicit plural by its ending, first match wins.
pub fn explicit_shape(plural: &str) -> Option<ExplicitShape> {
    EXPLICIT_SHAPES
        .iter()
        .find(|(ending, _)| ends_with_letters(plural, ending))
        .map(|&(_, shape)| shape)
}

impl ExplicitShape {
    fn stems(self, plural: &str) -> PluralStems {
        match self {
            ExplicitShape::Im => PluralStems {
                base: plural.to_string(),
                construct: drop_last_chars(plural, 1).to_string(),
                possessive_base: drop_last_chars(plural, 2).to_string(),
            },
            ExplicitShape::Ot => PluralStems::uniform(plural.to_string()),
        }
    }
}

/// Append the plural forms of one class.
pub(crate) fn plural_forms(
    class: &PluralClass,
    entry: &LexiconEntry,
    stem: &str,
    gender: Gender,
    forms: &mut Vec<RawForm>,
) {
    let options = &entry.options;
    let tag = FormTag::new(PartOfSpeech::Noun, gender, Number::Plural, Role::Base);

    let (stems, recognized) = match class {
        PluralClass::Regular(kind) => (kind.stems(stem, options.keep_he), true),
        PluralClass::Explicit(plural) => match explicit_shape(plural) {
            Some(shape) => {
                let mut stems = shape.stems(plural);
                if let Some(construct) = &options.plural_construct {
                    stems.construct = construct.clone();
                }
                (stems, true)
            }
            None => {
                debug!(
                    "{}: unrecognized plural {plural}, construct forms dropped",
                    entry.head_word
                );
                (PluralStems::uniform(plural.clone()), false)
            }
        },
    };

    forms.push(RawForm::new(stems.base, tag));
    if !options.wants_construct() {
        return;
    }
    let construct_tag = tag.with_role(Role::Construct);
    forms.push(if recognized {
        RawForm::new(stems.construct, construct_tag)
    } else {
        RawForm::dropped(stems.construct, construct_tag)
    });

    if options.wants_possessives() {
        for possessor in Possessor::ALL {
            forms.push(possessive::plural_possessive(
                &stems.possessive_base,
                possessor,
                tag,
                !recognized,
            ));
        }
    }
}
