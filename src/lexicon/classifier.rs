//! Rule-based conjugation classifier.
//!
//! Given a word and a language variant, decides whether the word is a
//! conjugated verb and splits it into tense prefix + root. Matching happens
//! on a trimmed, lowered copy; the returned slices come from the original
//! string so casing is preserved and `prefix + root` reconstructs the input.
//! Every input has a defined result and nothing here can fail.

use crate::lexicon::tables::{
    pronouns_for, table_for, DEFAULT_COLOR, FUTURE_COLOR, PAST_COLOR, PRESENT_COLOR,
};
use crate::lexicon::types::{Classification, ClassifiedWord, LanguageVariant, Tense};

/// Classify a single word.
///
/// Resolution order: empty word, exact pronoun, then the variant's prefix
/// table scanned present → past → future, each list front to back, first
/// match wins. For Kibouchi, a word that IS exactly the prefix `za` or `ana`
/// (no trailing characters) is a bare pronoun rather than a verb.
pub fn classify(word: &str, variant: LanguageVariant) -> Classification<'_> {
    if word.is_empty() {
        return Classification::plain(word);
    }

    let needle = word.trim().to_lowercase();
    if pronouns_for(variant).contains(&needle.as_str()) {
        return Classification::plain(word);
    }

    let table = table_for(variant);
    let scan = [
        (Tense::Present, table.present),
        (Tense::Past, table.past),
        (Tense::Future, table.future),
    ];
    for (tense, prefixes) in scan {
        for prefix in prefixes {
            if !needle.starts_with(prefix) {
                continue;
            }
            if variant == LanguageVariant::Kibouchi
                && (*prefix == "za" || *prefix == "ana")
                && needle == *prefix
            {
                // Bare subject pronoun, not a conjugation.
                return Classification::plain(word);
            }
            let cut = char_offset(word, prefix.chars().count());
            return Classification {
                prefix: &word[..cut],
                root: &word[cut..],
                tense,
                is_verb: true,
            };
        }
    }

    Classification::plain(word)
}

/// Byte offset of the `n`-th character of `word`, clamped to its end.
fn char_offset(word: &str, n: usize) -> usize {
    word.char_indices().nth(n).map_or(word.len(), |(idx, _)| idx)
}

/// True when the word is a standalone pronoun for the variant, including the
/// bare Kibouchi `za`/`ana` forms.
pub fn is_pronoun(word: &str, variant: LanguageVariant) -> bool {
    let needle = word.trim().to_lowercase();
    if pronouns_for(variant).contains(&needle.as_str()) {
        return true;
    }
    variant == LanguageVariant::Kibouchi && (needle == "za" || needle == "ana")
}

/// True when the word carries a recognized conjugation prefix.
pub fn is_conjugated_verb(word: &str, variant: LanguageVariant) -> bool {
    classify(word, variant).is_verb
}

/// Tense of the word, `Tense::Default` when it is not a conjugated verb.
pub fn identify_tense(word: &str, variant: LanguageVariant) -> Tense {
    classify(word, variant).tense
}

/// True when classification resolved a temporal (tense-marking) prefix.
pub fn has_temporal_prefix(word: &str, variant: LanguageVariant) -> bool {
    classify(word, variant).tense != Tense::Default
}

/// Display color for a tense.
pub fn color_for(tense: Tense) -> &'static str {
    match tense {
        Tense::Present => PRESENT_COLOR,
        Tense::Past => PAST_COLOR,
        Tense::Future => FUTURE_COLOR,
        Tense::Default => DEFAULT_COLOR,
    }
}

/// Classify a sequence of words, resolving the display color for each:
/// the tense color for verbs, the default color for everything else.
/// Output order mirrors input order; the whole result is materialized.
pub fn classify_all<'a, I>(words: I, variant: LanguageVariant) -> Vec<ClassifiedWord<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    words
        .into_iter()
        .map(|word| {
            let classification = classify(word, variant);
            let color = if classification.is_verb {
                color_for(classification.tense)
            } else {
                DEFAULT_COLOR
            };
            ClassifiedWord {
                word,
                classification,
                color,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::tables::{KIBOUCHI_PRONOUNS, SHIMAORE_PRONOUNS};

    #[test]
    fn empty_word_is_total() {
        let result = classify("", LanguageVariant::Shimaore);
        assert_eq!(result.prefix, "");
        assert_eq!(result.root, "");
        assert_eq!(result.tense, Tense::Default);
        assert!(!result.is_verb);
    }

    #[test]
    fn pronouns_are_never_verbs() {
        for pronoun in SHIMAORE_PRONOUNS {
            assert!(!classify(pronoun, LanguageVariant::Shimaore).is_verb);
        }
        for pronoun in KIBOUCHI_PRONOUNS {
            assert!(!classify(pronoun, LanguageVariant::Kibouchi).is_verb);
        }
    }

    #[test]
    fn splits_shimaore_present() {
        let result = classify("nisrenga", LanguageVariant::Shimaore);
        assert_eq!(result.prefix, "nis");
        assert_eq!(result.root, "renga");
        assert_eq!(result.tense, Tense::Present);
        assert!(result.is_verb);
    }

    #[test]
    fn preserves_original_casing_in_slices() {
        let result = classify("Nisrenga", LanguageVariant::Shimaore);
        assert_eq!(result.prefix, "Nis");
        assert_eq!(result.root, "renga");
        assert!(result.is_verb);
    }

    #[test]
    fn slice_reconstruction_holds() {
        let words = ["nisrenga", "wami", "zamihinagna", "randzo", "", "Utsolala"];
        for word in words {
            for variant in [LanguageVariant::Shimaore, LanguageVariant::Kibouchi] {
                let result = classify(word, variant);
                assert_eq!(format!("{}{}", result.prefix, result.root), word);
            }
        }
    }

    #[test]
    fn bare_za_is_a_pronoun_but_prefixed_za_conjugates() {
        assert!(!classify("za", LanguageVariant::Kibouchi).is_verb);
        assert!(!classify("ana", LanguageVariant::Kibouchi).is_verb);

        let result = classify("zamihinagna", LanguageVariant::Kibouchi);
        assert!(result.is_verb);
        assert_eq!(result.tense, Tense::Present);
        assert_eq!(result.prefix, "za");
        assert_eq!(result.root, "mihinagna");
    }

    #[test]
    fn first_declared_prefix_wins_over_longer_overlaps() {
        // "ana" is declared before "anareo", so the shorter prefix wins even
        // though the longer one also matches.
        let result = classify("anareomisoma", LanguageVariant::Kibouchi);
        assert_eq!(result.prefix, "ana");
        assert_eq!(result.root, "reomisoma");
        assert_eq!(result.tense, Tense::Present);
    }

    #[test]
    fn unknown_words_fall_through() {
        let result = classify("randzo", LanguageVariant::Shimaore);
        assert!(!result.is_verb);
        assert_eq!(result.prefix, "");
        assert_eq!(result.root, "randzo");
        assert_eq!(result.tense, Tense::Default);
    }

    #[test]
    fn tense_helpers_agree_with_classify() {
        assert!(is_conjugated_verb("nisrenga", LanguageVariant::Shimaore));
        assert!(!is_conjugated_verb("wami", LanguageVariant::Shimaore));
        assert_eq!(
            identify_tense("nitsofanya", LanguageVariant::Shimaore),
            Tense::Future
        );
        assert!(has_temporal_prefix("tsirenga", LanguageVariant::Shimaore));
        assert!(!has_temporal_prefix("randzo", LanguageVariant::Shimaore));
        assert!(is_pronoun("za", LanguageVariant::Kibouchi));
        assert!(is_pronoun("Wami", LanguageVariant::Shimaore));
        assert!(!is_pronoun("za", LanguageVariant::Shimaore));
    }

    #[test]
    fn colors_resolve_per_tense() {
        assert_eq!(color_for(Tense::Present), "#4CAF50");
        assert_eq!(color_for(Tense::Past), "#FF9800");
        assert_eq!(color_for(Tense::Future), "#2196F3");
        assert_eq!(color_for(Tense::Default), "#757575");
    }

    #[test]
    fn batch_classification_keeps_order_and_colors() {
        let words = vec!["nisrenga", "wami", "tsirenga"];
        let classified = classify_all(words.clone(), LanguageVariant::Shimaore);
        assert_eq!(classified.len(), 3);
        assert_eq!(classified[0].word, "nisrenga");
        assert_eq!(classified[0].color, "#4CAF50");
        assert_eq!(classified[1].color, "#757575");
        assert_eq!(classified[2].color, "#FF9800");
        // Pure function of its input: a second run is identical.
        assert_eq!(classified, classify_all(words, LanguageVariant::Shimaore));
    }
}
