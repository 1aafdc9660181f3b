//! Static pronoun and conjugation-prefix tables.
//!
//! Declaration order is load-bearing: the classifier scans `present`, then
//! `past`, then `future`, and each list front to back, taking the FIRST
//! prefix that matches. Overlapping prefixes therefore resolve to whichever
//! one is declared earlier, not to the longest match. Existing vocabulary
//! decks rely on this resolution, so reorder these tables only together with
//! a deck migration.

use crate::lexicon::types::LanguageVariant;

/// Ordered prefix lists for one language variant.
#[derive(Debug, Clone, Copy)]
pub struct PrefixTable {
    pub present: &'static [&'static str],
    pub past: &'static [&'static str],
    pub future: &'static [&'static str],
}

/// Standalone Shimaoré pronouns. A word equal to one of these is never a verb.
pub const SHIMAORE_PRONOUNS: &[&str] = &["wami", "wawe", "waye", "wasi", "wanyu", "wao"];

/// Standalone Kibouchi pronouns. `za` and `ana` are handled separately: they
/// double as conjugation prefixes and only count as pronouns when bare.
pub const KIBOUCHI_PRONOUNS: &[&str] = &["zaho", "anao", "izy", "atsika", "anareo", "reo"];

/// Shimaoré subject+tense prefixes, one entry per person.
pub const SHIMAORE_PREFIXES: PrefixTable = PrefixTable {
    present: &["nis", "us", "as", "ris", "mus", "was"],
    past: &["tsi", "uka", "aka", "rika", "muka", "waka"],
    future: &["nitso", "utso", "atso", "ritso", "mutso", "watso"],
};

/// Kibouchi prefixes. Present markers coincide with the subject pronouns;
/// past and future are marked by a single particle regardless of person.
pub const KIBOUCHI_PREFIXES: PrefixTable = PrefixTable {
    present: &["za", "ana", "izi", "atsika", "anareo", "reo"],
    past: &["ni"],
    future: &["mbu", "hu"],
};

/// Display colors per tense, mirroring the client palette.
pub const PRESENT_COLOR: &str = "#4CAF50";
pub const PAST_COLOR: &str = "#FF9800";
pub const FUTURE_COLOR: &str = "#2196F3";
pub const DEFAULT_COLOR: &str = "#757575";

/// Pronoun exclusion list for a variant.
pub fn pronouns_for(variant: LanguageVariant) -> &'static [&'static str] {
    match variant {
        LanguageVariant::Shimaore => SHIMAORE_PRONOUNS,
        LanguageVariant::Kibouchi => KIBOUCHI_PRONOUNS,
    }
}

/// Prefix table for a variant.
pub fn table_for(variant: LanguageVariant) -> &'static PrefixTable {
    match variant {
        LanguageVariant::Shimaore => &SHIMAORE_PREFIXES,
        LanguageVariant::Kibouchi => &KIBOUCHI_PREFIXES,
    }
}
