//! Hebrew noun and adjective inflection.
//!
//! Reads a lexicon of head words annotated with comma-separated flags and
//! expands every record into its full paradigm: singular and plural, construct
//! state, and possessive-suffixed forms.
//!
//! The pipeline for one record is
//! [`LexiconEntry::parse`] → [`prepare::prepare`] → a
//! [`inflection::ParadigmGenerator`] → [`finalize::finalize`]; the
//! [`generator`] module drives it over a whole lexicon.

pub mod finalize;
pub mod generator;
pub mod hebrew;
pub mod inflection;
pub mod lexicon;
pub mod options;
pub mod prepare;

pub use generator::{RunConfig, RunError, RunStats, generate_forms, run};
pub use options::{LexiconEntry, OptionSet};

/// Line written after the forms of every record.
pub const RECORD_SEPARATOR: &str = "-------";

/// A lexicon record that cannot be inflected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexiconError {
    /// Neither `noun` nor `adjective` was given.
    #[error("{word}: no part of speech (expected `noun` or `adjective`)")]
    MissingPartOfSpeech { word: String },

    #[error("{word}: unknown flag `{flag}`")]
    UnknownFlag { word: String, flag: String },

    #[error("{word}: malformed flag `{token}`: {reason}")]
    MalformedFlag {
        word: String,
        token: String,
        reason: &'static str,
    },
}
