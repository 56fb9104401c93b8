// Adjective paradigm, with the country and people nouns of country
// adjectives.

use log::debug;
use wolig_core::character::{ALEF, CHIRIK_YOD, FINAL_MEM, HE, HYPHEN, YOD, ends_with_letters};
use wolig_core::{FormTag, Gender, Number, PartOfSpeech, RawForm, Role};

use super::{ParadigmGenerator, inflection_stem, strip_final_he};
use crate::hebrew::constants::{CONSTRUCT_YOD, SUFFIX_IM, SUFFIX_IOT, SUFFIX_OT};
use crate::options::{LexiconEntry, OptionSet};
use crate::prepare::PreparedWord;

/// Feminine singular shape of an adjective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeminineShape {
    /// `-ת`: מקומית
    T,
    /// `-ה`: גדולה
    Ah,
    /// `-ית`
    It,
}

impl FeminineShape {
    /// Feminine singular and its construct.
    fn forms(self, short: &str) -> (String, String) {
        match self {
            FeminineShape::T => {
                let fem = format!("{short}ת");
                let construct = format!("{fem}{HYPHEN}");
                (fem, construct)
            }
            FeminineShape::Ah => (format!("{short}{HE}"), format!("{short}ת")),
            FeminineShape::It => {
                let fem = format!("{short}ית");
                let construct = format!("{fem}{HYPHEN}");
                (fem, construct)
            }
        }
    }
}

/// Active feminine shapes, in emission order.
pub fn feminine_shapes(options: &OptionSet, stem: &str) -> Vec<FeminineShape> {
    let flagged = [
        (options.fem_t || options.country_adjective, FeminineShape::T),
        (options.fem_ah, FeminineShape::Ah),
        (options.fem_it, FeminineShape::It),
    ];
    let shapes: Vec<FeminineShape> = flagged
        .into_iter()
        .filter(|&(on, _)| on)
        .map(|(_, shape)| shape)
        .collect();
    if !shapes.is_empty() {
        return shapes;
    }
    if stem.ends_with(CHIRIK_YOD) {
        vec![FeminineShape::T]
    } else {
        vec![FeminineShape::Ah]
    }
}

/// Mark a final plain yod as a chirik-male vowel.
fn mark_final_vowel(stem: String) -> String {
    match stem.strip_suffix(YOD) {
        Some(short) => format!("{short}{CHIRIK_YOD}"),
        None => stem,
    }
}

/// Name of the country a country adjective is derived from.
fn country_name(entry: &LexiconEntry) -> Option<String> {
    if let Some(country) = &entry.options.country {
        return Some(country.clone());
    }
    let head = entry.head_word.as_str();
    if ends_with_letters(head, &[ALEF, YOD]) {
        let mut chars: Vec<char> = head.chars().collect();
        chars.truncate(chars.len() - 2);
        chars.push(HE);
        return Some(chars.into_iter().collect());
    }
    head.strip_suffix(YOD).map(str::to_string)
}

/// Masculine and feminine, singular and plural, each with a construct.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjectiveParadigm;

impl ParadigmGenerator for AdjectiveParadigm {
    fn generate(&self, entry: &LexiconEntry, word: &PreparedWord) -> Vec<RawForm> {
        let options = &entry.options;
        let stem = mark_final_vowel(inflection_stem(word, options));
        let short = strip_final_he(&stem, options.keep_he);
        let construct = options.wants_construct();

        let tag = |gender, number| {
            FormTag::new(PartOfSpeech::Adjective, gender, number, Role::Base)
        };
        let mut forms = Vec::new();
        let mut push = |text: String, construct_text: String, tag: FormTag| {
            forms.push(RawForm::new(text, tag));
            if construct {
                forms.push(RawForm::new(construct_text, tag.with_role(Role::Construct)));
            }
        };

        let masculine = options.singular.as_deref().unwrap_or(&entry.head_word);
        push(
            masculine.to_string(),
            format!("{masculine}{HYPHEN}"),
            tag(Gender::Masculine, Number::Singular),
        );
        push(
            format!("{short}{SUFFIX_IM}"),
            format!("{short}{CONSTRUCT_YOD}"),
            tag(Gender::Masculine, Number::Plural),
        );

        let shapes = feminine_shapes(options, &stem);
        for &shape in &shapes {
            let (fem, fem_construct) = shape.forms(short);
            push(fem, fem_construct, tag(Gender::Feminine, Number::Singular));
        }

        let feminine_plural = tag(Gender::Feminine, Number::Plural);
        if shapes.iter().any(|&s| s != FeminineShape::It) {
            let plural = format!("{short}{SUFFIX_OT}");
            push(plural.clone(), format!("{plural}{HYPHEN}"), feminine_plural);
        }
        if shapes.contains(&FeminineShape::It) {
            let plural = format!("{short}{SUFFIX_IOT}");
            push(plural.clone(), format!("{plural}{HYPHEN}"), feminine_plural);
        }

        if options.country_adjective {
            match country_name(entry) {
                Some(country) => forms.push(RawForm::new(
                    country,
                    FormTag::new(PartOfSpeech::Noun, Gender::Feminine, Number::Singular, Role::Base),
                )),
                None => debug!("{}: no country name derivable", entry.head_word),
            }
            forms.push(RawForm::new(
                format!("{}{FINAL_MEM}", entry.head_word),
                FormTag::new(PartOfSpeech::Noun, Gender::Masculine, Number::Plural, Role::Base),
            ));
        }
        forms
    }
}
