//! Shared types for the wolig Hebrew inflection engine.
//!
//! - [`character`] -- Hebrew letters, final glyphs, internal markers
//! - [`enums`] -- part of speech, gender, number, possessor, role
//! - [`form`] -- raw and surface word forms with their tags

pub mod character;
pub mod enums;
pub mod form;

pub use enums::{Gender, Number, PartOfSpeech, Possessor, Role};
pub use form::{FormTag, RawForm, SurfaceForm};
