//! # Malango - Shimaoré/Kibouchi learning engine
//!
//! Malango is the headless core of a vocabulary-learning app for the two
//! languages of Mayotte. The mobile client renders screens and plays audio;
//! this crate holds the logic that is worth testing on its own:
//!
//! - **Lexicon**: a rule-based classifier that splits a conjugated verb into
//!   its tense prefix and root using ordered table lookup, and maps each
//!   tense to a display color.
//! - **Atlas**: the map progression engine. Players travel between villages,
//!   complete quizzes, unlock routes and earn badges; progress persists in an
//!   embedded sled store.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use malango::atlas::{AtlasEngine, ProgressStore, canonical_world};
//! use malango::lexicon::{classify, LanguageVariant};
//!
//! fn main() -> anyhow::Result<()> {
//!     let split = classify("nisrenga", LanguageVariant::Shimaore);
//!     assert!(split.is_verb);
//!
//!     let store = ProgressStore::open("data/atlas")?;
//!     let mut engine = AtlasEngine::new(store, canonical_world());
//!     engine.travel_to("koungou");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`lexicon`] - Verb prefix classification and tense coloring
//! - [`atlas`] - Village progression, badges, and progress persistence
//! - [`config`] - Configuration management and validation

pub mod atlas;
pub mod config;
pub mod lexicon;
