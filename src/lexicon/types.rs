use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target language of a classification request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LanguageVariant {
    Shimaore,
    Kibouchi,
}

impl fmt::Display for LanguageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageVariant::Shimaore => write!(f, "shimaore"),
            LanguageVariant::Kibouchi => write!(f, "kibouchi"),
        }
    }
}

impl FromStr for LanguageVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shimaore" => Ok(LanguageVariant::Shimaore),
            "kibouchi" => Ok(LanguageVariant::Kibouchi),
            other => Err(format!("unknown language variant: {}", other)),
        }
    }
}

/// Grammatical tense carried by a conjugation prefix. `Default` covers
/// pronouns, unprefixed words, and the empty string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Present,
    Past,
    Future,
    Default,
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tense::Present => write!(f, "present"),
            Tense::Past => write!(f, "past"),
            Tense::Future => write!(f, "future"),
            Tense::Default => write!(f, "default"),
        }
    }
}

/// Result of classifying one word. `prefix` and `root` are slices of the
/// original input, so `prefix` followed by `root` always reconstructs it.
/// Derived on demand, never persisted.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Classification<'a> {
    pub prefix: &'a str,
    pub root: &'a str,
    pub tense: Tense,
    pub is_verb: bool,
}

impl<'a> Classification<'a> {
    /// Non-verb result that leaves the whole word in `root`.
    pub(crate) fn plain(word: &'a str) -> Self {
        Self {
            prefix: "",
            root: word,
            tense: Tense::Default,
            is_verb: false,
        }
    }
}

/// One entry of a batch classification: the word, its split, and the color
/// the client should render it with.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ClassifiedWord<'a> {
    pub word: &'a str,
    pub classification: Classification<'a>,
    pub color: &'static str,
}
