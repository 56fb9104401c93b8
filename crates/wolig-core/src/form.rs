// Generated word forms: raw forms straight out of a paradigm generator and
// finished surface forms ready for output.

use std::fmt;

use crate::character::is_marker;
use crate::enums::{Gender, Number, PartOfSpeech, Role};

/// Grammatical annotation of a generated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormTag {
    pub pos: PartOfSpeech,
    pub gender: Gender,
    pub number: Number,
    pub role: Role,
}

impl FormTag {
    pub fn new(pos: PartOfSpeech, gender: Gender, number: Number, role: Role) -> Self {
        Self {
            pos,
            gender,
            number,
            role,
        }
    }

    /// Copy of this tag with a different role.
    pub fn with_role(self, role: Role) -> Self {
        Self { role, ..self }
    }
}

impl fmt::Display for FormTag {
    /// `<gender>,<number>` followed by `,סמיכות` for construct forms or
    /// `,כינוי/<pronoun>` for possessive forms.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.gender.tag(), self.number.tag())?;
        match self.role {
            Role::Base => Ok(()),
            Role::Construct => write!(f, ",סמיכות"),
            Role::Possessive(p) => write!(f, ",כינוי/{}", p.pronoun()),
        }
    }
}

/// A form as produced by a paradigm generator.
///
/// The text may still contain glide and vowel markers and final letter
/// glyphs in non-final position. A dropped form is computed but never
/// emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawForm {
    pub text: String,
    pub tag: FormTag,
    pub dropped: bool,
}

impl RawForm {
    pub fn new(text: impl Into<String>, tag: FormTag) -> Self {
        Self {
            text: text.into(),
            tag,
            dropped: false,
        }
    }

    /// A form that must be suppressed by `finalize`.
    pub fn dropped(text: impl Into<String>, tag: FormTag) -> Self {
        Self {
            text: text.into(),
            tag,
            dropped: true,
        }
    }

    /// Whether the text still carries internal markers.
    pub fn has_markers(&self) -> bool {
        self.text.chars().any(is_marker)
    }
}

/// A finished form in output orthography.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceForm {
    pub text: String,
    pub tag: FormTag,
}

impl SurfaceForm {
    pub fn new(text: impl Into<String>, tag: FormTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }

    /// Render one output line (without the newline). Detailed output appends
    /// the tag after a single space.
    pub fn render(&self, detailed: bool) -> String {
        if detailed {
            format!("{} {}", self.text, self.tag)
        } else {
            self.text.clone()
        }
    }
}
