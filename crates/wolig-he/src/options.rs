// Lexicon flag parsing.
//
// A record's flag string is a comma-separated list of `name` or
// `name=value` tokens. Names come from a closed catalog; anything else is
// rejected so that a typo in the lexicon cannot silently change a paradigm.

use hashbrown::HashMap;
use wolig_core::PartOfSpeech;

use crate::LexiconError;

/// Delimiter between flag tokens.
const FLAG_DELIMITER: char = ',';

/// Separator between a flag name and its value.
const VALUE_SEPARATOR: char = '=';

/// Catalog group of a flag, used for documentation and listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagGroup {
    PartOfSpeech,
    PluralClass,
    Spelling,
    Suppression,
    Override,
    Gender,
    Adjective,
    Orthography,
}

impl FlagGroup {
    /// Heading used when listing the catalog.
    pub fn label(self) -> &'static str {
        match self {
            FlagGroup::PartOfSpeech => "part of speech",
            FlagGroup::PluralClass => "plural class",
            FlagGroup::Spelling => "spelling exceptions",
            FlagGroup::Suppression => "suppression",
            FlagGroup::Override => "overrides",
            FlagGroup::Gender => "gender",
            FlagGroup::Adjective => "adjectives",
            FlagGroup::Orthography => "orthography",
        }
    }
}

/// Every recognized lexicon flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Noun,
    Adjective,
    NoPlural,
    Plural,
    PluralConstruct,
    Im,
    Iim,
    Ot,
    Iot,
    Xot,
    KeepHe,
    DropFirstVav,
    DefectiveHe,
    ExtraYodSmichut,
    NoConstruct,
    NoPossessives,
    Singular,
    Construct,
    Masculine,
    Feminine,
    FemT,
    FemAh,
    FemIt,
    CountryAdjective,
    Country,
    Acronym,
}

/// One catalog row: accepted spelling, flag, group, and whether the flag
/// carries a value.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub flag: Flag,
    pub group: FlagGroup,
    pub takes_value: bool,
}

const fn switch(name: &'static str, flag: Flag, group: FlagGroup) -> CatalogEntry {
    CatalogEntry {
        name,
        flag,
        group,
        takes_value: false,
    }
}

const fn valued(name: &'static str, flag: Flag, group: FlagGroup) -> CatalogEntry {
    CatalogEntry {
        name,
        flag,
        group,
        takes_value: true,
    }
}

/// The closed option catalog. `bizarre` is an alias of `plural`.
pub const OPTION_CATALOG: &[CatalogEntry] = &[
    switch("noun", Flag::Noun, FlagGroup::PartOfSpeech),
    switch("adjective", Flag::Adjective, FlagGroup::PartOfSpeech),
    switch("none", Flag::NoPlural, FlagGroup::PluralClass),
    valued("plural", Flag::Plural, FlagGroup::PluralClass),
    valued("bizarre", Flag::Plural, FlagGroup::PluralClass),
    valued("plural-construct", Flag::PluralConstruct, FlagGroup::PluralClass),
    switch("-im", Flag::Im, FlagGroup::PluralClass),
    switch("-iim", Flag::Iim, FlagGroup::PluralClass),
    switch("-ot", Flag::Ot, FlagGroup::PluralClass),
    switch("-iot", Flag::Iot, FlagGroup::PluralClass),
    switch("-xot", Flag::Xot, FlagGroup::PluralClass),
    switch("keep-he", Flag::KeepHe, FlagGroup::Spelling),
    switch("drop-first-vav", Flag::DropFirstVav, FlagGroup::Spelling),
    switch("defective-he", Flag::DefectiveHe, FlagGroup::Spelling),
    switch("extra-yod-smichut", Flag::ExtraYodSmichut, FlagGroup::Spelling),
    switch("no-construct", Flag::NoConstruct, FlagGroup::Suppression),
    switch("no-possessives", Flag::NoPossessives, FlagGroup::Suppression),
    valued("singular", Flag::Singular, FlagGroup::Override),
    valued("construct", Flag::Construct, FlagGroup::Override),
    switch("masculine", Flag::Masculine, FlagGroup::Gender),
    switch("feminine", Flag::Feminine, FlagGroup::Gender),
    switch("fem-t", Flag::FemT, FlagGroup::Adjective),
    switch("fem-ah", Flag::FemAh, FlagGroup::Adjective),
    switch("fem-it", Flag::FemIt, FlagGroup::Adjective),
    switch("country-adjective", Flag::CountryAdjective, FlagGroup::Adjective),
    valued("country", Flag::Country, FlagGroup::Adjective),
    switch("acronym", Flag::Acronym, FlagGroup::Orthography),
];

/// Look up a flag name in the catalog.
pub fn lookup(name: &str) -> Option<&'static CatalogEntry> {
    OPTION_CATALOG.iter().find(|entry| entry.name == name)
}

/// Typed option set of one lexicon entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    pub noun: bool,
    pub adjective: bool,

    // Plural classes
    pub no_plural: bool,
    pub plural: Option<String>,
    pub plural_construct: Option<String>,
    pub im: bool,
    pub iim: bool,
    pub ot: bool,
    pub iot: bool,
    pub xot: bool,

    // Spelling exceptions
    pub keep_he: bool,
    pub drop_first_vav: bool,
    pub defective_he: bool,
    pub extra_yod_smichut: bool,

    // Suppression
    pub no_construct: bool,
    pub no_possessives: bool,

    // Overrides
    pub singular: Option<String>,
    pub construct: Option<String>,

    // Gender annotation
    pub masculine: bool,
    pub feminine: bool,

    // Adjectives
    pub fem_t: bool,
    pub fem_ah: bool,
    pub fem_it: bool,
    pub country_adjective: bool,
    pub country: Option<String>,

    pub acronym: bool,
}

impl OptionSet {
    /// Parse a flag string. Later duplicates of the same flag win.
    ///
    /// `word` is only used for error messages.
    pub fn parse(word: &str, flags: &str) -> Result<Self, LexiconError> {
        let mut values: HashMap<Flag, Option<String>> = HashMap::new();

        let flags = flags.trim();
        if !flags.is_empty() {
            for token in flags.split(FLAG_DELIMITER) {
                let (flag, value) = parse_token(word, token)?;
                values.insert(flag, value);
            }
        }

        let mut set = OptionSet::default();
        for (flag, value) in values {
            set.apply(flag, value);
        }
        if let (Some(construct), None) = (&set.plural_construct, &set.plural) {
            return Err(LexiconError::MalformedFlag {
                word: word.to_string(),
                token: format!("plural-construct={construct}"),
                reason: "plural-construct requires plural",
            });
        }
        Ok(set)
    }

    fn apply(&mut self, flag: Flag, value: Option<String>) {
        match flag {
            Flag::Noun => self.noun = true,
            Flag::Adjective => self.adjective = true,
            Flag::NoPlural => self.no_plural = true,
            Flag::Plural => self.plural = value,
            Flag::PluralConstruct => self.plural_construct = value,
            Flag::Im => self.im = true,
            Flag::Iim => self.iim = true,
            Flag::Ot => self.ot = true,
            Flag::Iot => self.iot = true,
            Flag::Xot => self.xot = true,
            Flag::KeepHe => self.keep_he = true,
            Flag::DropFirstVav => self.drop_first_vav = true,
            Flag::DefectiveHe => self.defective_he = true,
            Flag::ExtraYodSmichut => self.extra_yod_smichut = true,
            Flag::NoConstruct => self.no_construct = true,
            Flag::NoPossessives => self.no_possessives = true,
            Flag::Singular => self.singular = value,
            Flag::Construct => self.construct = value,
            Flag::Masculine => self.masculine = true,
            Flag::Feminine => self.feminine = true,
            Flag::FemT => self.fem_t = true,
            Flag::FemAh => self.fem_ah = true,
            Flag::FemIt => self.fem_it = true,
            Flag::CountryAdjective => self.country_adjective = true,
            Flag::Country => self.country = value,
            Flag::Acronym => self.acronym = true,
        }
    }

    /// Resolve the part of speech. `noun` takes precedence when both
    /// selectors are present.
    pub fn part_of_speech(&self) -> Option<PartOfSpeech> {
        if self.noun {
            Some(PartOfSpeech::Noun)
        } else if self.adjective {
            Some(PartOfSpeech::Adjective)
        } else {
            None
        }
    }

    /// Whether any plural class was selected explicitly.
    pub fn has_explicit_plural_class(&self) -> bool {
        self.plural.is_some() || self.im || self.iim || self.ot || self.iot || self.xot
    }

    /// Whether construct forms are generated.
    pub fn wants_construct(&self) -> bool {
        !self.no_construct
    }

    /// Whether possessive forms are generated.
    pub fn wants_possessives(&self) -> bool {
        !self.no_construct && !self.no_possessives
    }
}

/// Parse one `name` or `name=value` token.
fn parse_token(word: &str, token: &str) -> Result<(Flag, Option<String>), LexiconError> {
    let token = token.trim();
    let malformed = |reason: &'static str| LexiconError::MalformedFlag {
        word: word.to_string(),
        token: token.to_string(),
        reason,
    };

    if token.is_empty() {
        return Err(malformed("empty flag"));
    }

    let (name, value) = match token.split_once(VALUE_SEPARATOR) {
        Some((name, value)) => (name.trim(), Some(value.trim())),
        None => (token, None),
    };
    if name.is_empty() {
        return Err(malformed("missing flag name"));
    }

    let entry = lookup(name).ok_or_else(|| LexiconError::UnknownFlag {
        word: word.to_string(),
        flag: name.to_string(),
    })?;

    match (entry.takes_value, value) {
        (false, None) => Ok((entry.flag, None)),
        (false, Some(_)) => Err(malformed("flag does not take a value")),
        (true, Some(v)) if !v.is_empty() => Ok((entry.flag, Some(v.to_string()))),
        (true, _) => Err(malformed("flag requires a value")),
    }
}

/// One parsed lexicon record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub head_word: String,
    pub pos: PartOfSpeech,
    pub options: OptionSet,
}

impl LexiconEntry {
    /// Parse a record's head word and flag string.
    pub fn parse(head_word: &str, flags: &str) -> Result<Self, LexiconError> {
        let options = OptionSet::parse(head_word, flags)?;
        let pos = options
            .part_of_speech()
            .ok_or_else(|| LexiconError::MissingPartOfSpeech {
                word: head_word.to_string(),
            })?;
        Ok(Self {
            head_word: head_word.to_string(),
            pos,
            options,
        })
    }
}
