// Noun gender, decided by a ranked rule table.

use log::trace;
use wolig_core::Gender;
use wolig_core::character::{HE, TAV, ends_with_letters};

use crate::options::OptionSet;

type GenderTest = fn(&str, &OptionSet) -> bool;

fn masculine_flag(_: &str, options: &OptionSet) -> bool {
    options.masculine
}

fn feminine_flag(_: &str, options: &OptionSet) -> bool {
    options.feminine
}

fn feminine_ending(word: &str, _: &OptionSet) -> bool {
    ends_with_letters(word, &[HE]) || ends_with_letters(word, &[TAV])
}

/// Rules in rank order; masculine is the fallback.
const GENDER_RULES: &[(&str, GenderTest, Gender)] = &[
    ("masculine-flag", masculine_flag as GenderTest, Gender::Masculine),
    ("feminine-flag", feminine_flag as GenderTest, Gender::Feminine),
    ("feminine-ending", feminine_ending as GenderTest, Gender::Feminine),
];

/// Gender of a noun's forms.
pub fn noun_gender(head_word: &str, options: &OptionSet) -> Gender {
    for &(name, test, gender) in GENDER_RULES {
        if test(head_word, options) {
            trace!("{head_word}: gender from {name}");
            return gender;
        }
    }
    Gender::Masculine
}
