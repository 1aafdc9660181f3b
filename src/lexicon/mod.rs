//! Verb morphology for the two target languages.
//!
//! The classifier is pure table lookup: no allocation beyond the lowered
//! matching copy, no errors, safe to call from any number of threads.

pub mod classifier;
pub mod tables;
pub mod types;

pub use classifier::{
    classify, classify_all, color_for, has_temporal_prefix, identify_tense, is_conjugated_verb,
    is_pronoun,
};
pub use tables::{
    pronouns_for, table_for, PrefixTable, DEFAULT_COLOR, FUTURE_COLOR, KIBOUCHI_PREFIXES,
    KIBOUCHI_PRONOUNS, PAST_COLOR, PRESENT_COLOR, SHIMAORE_PREFIXES, SHIMAORE_PRONOUNS,
};
pub use types::{Classification, ClassifiedWord, LanguageVariant, Tense};
