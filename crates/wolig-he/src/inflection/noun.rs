// Noun paradigm.

use log::debug;
use wolig_core::character::{HE, TAV};
use wolig_core::{FormTag, Gender, Number, PartOfSpeech, RawForm, Role};

use super::gender::noun_gender;
use super::plural::{plural_classes, plural_forms};
use super::{ParadigmGenerator, inflection_stem, possessive};
use crate::options::LexiconEntry;
use crate::prepare::{PreparedWord, prepare};

/// Singular, then every active plural class, each with its construct and
/// possessives.
#[derive(Debug, Clone, Copy, Default)]
pub struct NounParadigm;

impl ParadigmGenerator for NounParadigm {
    fn generate(&self, entry: &LexiconEntry, word: &PreparedWord) -> Vec<RawForm> {
        let gender = noun_gender(&entry.head_word, &entry.options);
        let stem = inflection_stem(word, &entry.options);

        let mut forms = Vec::new();
        singular_forms(entry, &stem, gender, &mut forms);
        for class in plural_classes(entry) {
            plural_forms(&class, entry, &stem, gender, &mut forms);
        }
        debug!("{}: {} raw forms", entry.head_word, forms.len());
        forms
    }
}

/// How the singular construct was derived. The possessive paradigm depends
/// on it.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SingularConstruct {
    /// `construct=` given; possessives attach to its prepared stem.
    Override { text: String, stem: String },
    /// Final He turned into Tav.
    HeToTav(String),
    /// Head word plus yod.
    ExtraYod(String),
    /// Identical to the free form.
    Unchanged,
}

impl SingularConstruct {
    fn derive(entry: &LexiconEntry, stem: &str) -> Self {
        let options = &entry.options;
        if let Some(text) = &options.construct {
            return SingularConstruct::Override {
                text: text.clone(),
                stem: prepare(text).stem,
            };
        }
        if let Some(short) = stem.strip_suffix(HE) {
            if !options.keep_he && !options.defective_he {
                return SingularConstruct::HeToTav(format!("{short}{TAV}"));
            }
        }
        if options.extra_yod_smichut {
            return SingularConstruct::ExtraYod(format!("{}י", entry.head_word));
        }
        SingularConstruct::Unchanged
    }
}

fn singular_forms(entry: &LexiconEntry, stem: &str, gender: Gender, forms: &mut Vec<RawForm>) {
    let options = &entry.options;
    let tag = FormTag::new(PartOfSpeech::Noun, gender, Number::Singular, Role::Base);
    let base = options.singular.as_deref().unwrap_or(&entry.head_word);
    forms.push(RawForm::new(base, tag));

    if !options.wants_construct() {
        return;
    }
    let construct = SingularConstruct::derive(entry, stem);
    let construct_text = match &construct {
        SingularConstruct::Override { text, .. } => text.as_str(),
        SingularConstruct::HeToTav(text) | SingularConstruct::ExtraYod(text) => text.as_str(),
        SingularConstruct::Unchanged => entry.head_word.as_str(),
    };
    forms.push(RawForm::new(construct_text, tag.with_role(Role::Construct)));

    if !options.wants_possessives() {
        return;
    }
    match &construct {
        SingularConstruct::Override { stem, .. } => {
            possessive::singular_possessives(stem, tag, forms)
        }
        SingularConstruct::HeToTav(text) => possessive::singular_possessives(text, tag, forms),
        SingularConstruct::ExtraYod(_) => {
            possessive::extra_yod_possessives(&entry.head_word, stem, tag, forms)
        }
        SingularConstruct::Unchanged if options.defective_he && stem.ends_with(HE) => {
            possessive::defective_he_possessives(stem, tag, forms)
        }
        SingularConstruct::Unchanged => possessive::singular_possessives(stem, tag, forms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wolig_core::Possessor;

    fn generate(word: &str, flags: &str) -> Vec<RawForm> {
        let entry = LexiconEntry::parse(word, flags).unwrap();
        NounParadigm.generate(&entry, &prepare(word))
    }

    fn texts(forms: &[RawForm]) -> Vec<&str> {
        forms.iter().map(|f| f.text.as_str()).collect()
    }

    #[test]
    fn regular_masculine_noun() {
        let forms = generate("ספר", "noun");
        assert_eq!(forms.len(), 24);
        assert_eq!(&texts(&forms)[..3], ["ספר", "ספר", "ספרי"]);
        assert_eq!(forms[12].text, "ספרים");
        assert_eq!(forms[12].tag.number, Number::Plural);
        assert_eq!(forms[13].text, "ספרי");
        assert_eq!(forms[13].tag.role, Role::Construct);
        assert!(forms.iter().all(|f| f.tag.gender == Gender::Masculine));
    }

    #[test]
    fn he_becomes_tav_in_construct() {
        let forms = generate("מצווה", "noun");
        assert_eq!(forms[0].text, "מצווה");
        assert_eq!(forms[1].text, "מצWת");
        assert_eq!(forms[2].text, "מצWתי");
        assert!(forms.iter().all(|f| f.tag.gender == Gender::Feminine));
    }

    #[test]
    fn keep_he_leaves_construct_unchanged() {
        let forms = generate("פה", "noun,keep-he,-im");
        assert_eq!(forms[1].text, "פה");
        assert_eq!(forms[2].text, "פהי");
    }

    #[test]
    fn no_construct_keeps_only_base_forms() {
        let forms = generate("שמיים", "noun,no-construct");
        assert_eq!(texts(&forms), ["שמיים"]);

        let forms = generate("ספר", "noun,no-construct");
        assert_eq!(texts(&forms), ["ספר", "ספרים"]);
    }

    #[test]
    fn no_possessives_keeps_constructs() {
        let forms = generate("ספר", "noun,no-possessives");
        assert_eq!(texts(&forms), ["ספר", "ספר", "ספרים", "ספרי"]);
    }

    #[test]
    fn overrides() {
        let forms = generate("בית", "noun,-im,construct=בית,singular=בית,plural=בתים");
        assert_eq!(forms[0].text, "בית");
        assert_eq!(forms[1].text, "בית");
        assert_eq!(forms[2].text, "ביתי");
        // explicit plural first, then -im
        assert_eq!(forms[12].text, "בתים");
        assert_eq!(forms[13].text, "בתי");
        assert_eq!(forms[14].text, "בתי");
        assert_eq!(forms[24].text, "ביתים");
    }

    #[test]
    fn construct_override_is_prepared() {
        let forms = generate("קו", "noun,construct=קו");
        assert_eq!(forms[1].text, "קו");
        assert_eq!(forms[2].text, "קWי");
    }

    #[test]
    fn extra_yod() {
        let forms = generate("אב", "noun,extra-yod-smichut,-ot");
        assert_eq!(forms[1].text, "אבי");
        assert_eq!(forms[5].text, "אביו");
        assert_eq!(forms[5].tag.role, Role::Possessive(Possessor::Him));
        assert_eq!(forms[12].text, "אבות");
    }

    #[test]
    fn defective_he() {
        let forms = generate("שדה", "noun,defective-he,masculine");
        assert_eq!(forms[1].text, "שדה");
        assert_eq!(forms[5].text, "שדו");
        assert_eq!(forms[6].text, "שדהו");
        // 1 base + 1 construct + 11 possessives
        assert_eq!(forms[13].text, "שדות");
        assert!(forms.iter().all(|f| f.tag.gender == Gender::Masculine));
    }

    #[test]
    fn drop_first_vav() {
        let forms = generate("אוהל", "noun,drop-first-vav");
        assert_eq!(forms[0].text, "אוהל");
        assert_eq!(forms[1].text, "אוהל");
        assert_eq!(forms[2].text, "אהלי");
        assert_eq!(forms[12].text, "אהלים");
    }
}
