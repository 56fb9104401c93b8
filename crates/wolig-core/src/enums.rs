// Grammatical categories attached to generated forms.
//
// The tag strings use the Hebrew abbreviations of the detailed word-list
// format: ז/נ for gender, יחיד/רבים for number, סמיכות for construct state,
// and כינוי/<pronoun> for possessive suffixes.

/// Part of speech of a lexicon entry. Verbs are not generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Adjective,
}

/// Grammatical gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Masculine,
    Feminine,
}

impl Gender {
    /// Tag used in detailed output.
    pub fn tag(self) -> &'static str {
        match self {
            Gender::Masculine => "ז",
            Gender::Feminine => "נ",
        }
    }
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    /// Tag used in detailed output.
    pub fn tag(self) -> &'static str {
        match self {
            Number::Singular => "יחיד",
            Number::Plural => "רבים",
        }
    }
}

/// The possessor encoded by a possessive suffix.
///
/// Ordered the way the paradigm is emitted: singular persons first, then
/// plural persons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Possessor {
    /// my
    Me,
    /// your (masculine singular)
    YouMasculine,
    /// your (feminine singular)
    YouFeminine,
    /// his
    Him,
    /// her
    Her,
    /// our
    Us,
    /// your (masculine plural)
    YouMasculinePlural,
    /// your (feminine plural)
    YouFemininePlural,
    /// their (masculine)
    ThemMasculine,
    /// their (feminine)
    ThemFeminine,
}

impl Possessor {
    /// Every possessor in emission order.
    pub const ALL: [Possessor; 10] = [
        Possessor::Me,
        Possessor::YouMasculine,
        Possessor::YouFeminine,
        Possessor::Him,
        Possessor::Her,
        Possessor::Us,
        Possessor::YouMasculinePlural,
        Possessor::YouFemininePlural,
        Possessor::ThemMasculine,
        Possessor::ThemFeminine,
    ];

    /// The independent pronoun naming this possessor, used as the tag.
    pub fn pronoun(self) -> &'static str {
        match self {
            Possessor::Me => "אני",
            Possessor::YouMasculine => "אתה",
            Possessor::YouFeminine => "את",
            Possessor::Him => "הוא",
            Possessor::Her => "היא",
            Possessor::Us => "אנחנו",
            Possessor::YouMasculinePlural => "אתם",
            Possessor::YouFemininePlural => "אתן",
            Possessor::ThemMasculine => "הם",
            Possessor::ThemFeminine => "הן",
        }
    }
}

/// Syntactic role of a generated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Free (nifrad) form.
    Base,
    /// Construct state (smichut).
    Construct,
    /// Possessive-suffixed form (kinuy).
    Possessive(Possessor),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_and_number_tags() {
        assert_eq!(Gender::Masculine.tag(), "ז");
        assert_eq!(Gender::Feminine.tag(), "נ");
        assert_eq!(Number::Singular.tag(), "יחיד");
        assert_eq!(Number::Plural.tag(), "רבים");
    }

    #[test]
    fn possessor_order_starts_with_first_person() {
        assert_eq!(Possessor::ALL[0], Possessor::Me);
        assert_eq!(Possessor::ALL[5], Possessor::Us);
        assert_eq!(Possessor::ALL.len(), 10);
    }

    #[test]
    fn possessor_pronouns_are_distinct() {
        let mut seen: Vec<&str> = Possessor::ALL.iter().map(|p| p.pronoun()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), Possessor::ALL.len());
    }

    #[test]
    fn role_equality() {
        assert_eq!(Role::Possessive(Possessor::Her), Role::Possessive(Possessor::Her));
        assert_ne!(Role::Base, Role::Construct);
    }
}
