// Marker preprocessing.
//
// Full spelling cannot tell a consonantal vav or yod from a vowel letter.
// Before any suffix is attached, the letters at the word edges that are known
// to be consonants are rewritten to the glide markers `W` and `Y`. The
// markers survive suffixation and are resolved by `finalize`, which doubles
// them inside a word and writes them single at a word edge.
//
// Rules are kept in a ranked table. The leading rule is independent; the
// trailing rules are tried in rank order and at most one of them fires.

use std::ops::Range;

use log::trace;
use wolig_core::character::{ALEF, GLIDE_W, GLIDE_Y, HE, VAV, YOD};

/// One position of a rule pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// This exact letter.
    Is(char),
    /// Any character except this letter.
    Not(char),
}

impl Slot {
    fn matches(self, c: char) -> bool {
        match self {
            Slot::Is(l) => c == l,
            Slot::Not(l) => c != l,
        }
    }
}

/// Which edge of the word a rule is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Leading,
    Trailing,
}

/// A fixed-length edge pattern and the span of it that becomes a marker.
#[derive(Debug, Clone)]
pub struct GlideRule {
    pub name: &'static str,
    pub anchor: Anchor,
    pub pattern: &'static [Slot],
    /// Pattern positions replaced by `marker` (a doubled letter pair
    /// collapses into one marker).
    pub span: Range<usize>,
    pub marker: char,
}

impl GlideRule {
    /// Apply the rule to `chars`, returning the rewritten word if the
    /// pattern matches.
    fn apply(&self, chars: &[char]) -> Option<Vec<char>> {
        let len = self.pattern.len();
        if chars.len() < len {
            return None;
        }
        let start = match self.anchor {
            Anchor::Leading => 0,
            Anchor::Trailing => chars.len() - len,
        };
        let window = &chars[start..start + len];
        if !self.pattern.iter().zip(window).all(|(slot, &c)| slot.matches(c)) {
            return None;
        }

        let mut out = Vec::with_capacity(chars.len());
        out.extend_from_slice(&chars[..start + self.span.start]);
        out.push(self.marker);
        out.extend_from_slice(&chars[start + self.span.end..]);
        Some(out)
    }
}

/// A word cannot begin with a vowel vav, so a leading vav is a consonant.
pub const LEADING_RULE: GlideRule = GlideRule {
    name: "leading-vav",
    anchor: Anchor::Leading,
    pattern: &[Slot::Is(VAV)],
    span: 0..1,
    marker: GLIDE_W,
};

/// Trailing rules in rank order; the first match wins.
pub const TRAILING_RULES: &[GlideRule] = &[
    // מצווה: the doubled vav before a final He is one consonant
    GlideRule {
        name: "double-vav-he",
        anchor: Anchor::Trailing,
        pattern: &[Slot::Not(VAV), Slot::Is(VAV), Slot::Is(VAV), Slot::Is(HE)],
        span: 1..3,
        marker: GLIDE_W,
    },
    // קו, תו
    GlideRule {
        name: "final-vav",
        anchor: Anchor::Trailing,
        pattern: &[Slot::Is(VAV)],
        span: 0..1,
        marker: GLIDE_W,
    },
    // תאוה, גאוה
    GlideRule {
        name: "alef-vav-he",
        anchor: Anchor::Trailing,
        pattern: &[Slot::Is(ALEF), Slot::Is(VAV), Slot::Is(HE)],
        span: 1..2,
        marker: GLIDE_W,
    },
    // חיה, אוניה
    GlideRule {
        name: "yod-he",
        anchor: Anchor::Trailing,
        pattern: &[Slot::Is(YOD), Slot::Is(HE)],
        span: 0..1,
        marker: GLIDE_Y,
    },
];

/// A head word together with its marker stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedWord {
    /// The head word exactly as the lexicon wrote it.
    pub head: String,
    /// The word with edge glides replaced by markers.
    pub stem: String,
}

/// Mark a leading consonantal vav.
pub fn mark_leading(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    match LEADING_RULE.apply(&chars) {
        Some(out) => {
            trace!("{word}: {} fired", LEADING_RULE.name);
            out.into_iter().collect()
        }
        None => word.to_string(),
    }
}

/// Apply the first matching trailing rule, if any.
pub fn mark_trailing(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    for rule in TRAILING_RULES {
        if let Some(out) = rule.apply(&chars) {
            trace!("{word}: {} fired", rule.name);
            return out.into_iter().collect();
        }
    }
    word.to_string()
}

/// Build the marker stem for a head word.
pub fn prepare(head: &str) -> PreparedWord {
    let stem = mark_trailing(&mark_leading(head));
    PreparedWord {
        head: head.to_string(),
        stem,
    }
}
