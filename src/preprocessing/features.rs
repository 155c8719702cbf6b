//! Basic lexical statistics over a text string.

use serde::Serialize;
use std::collections::HashSet;

/// Lexical features of a single text.
///
/// Computed from whatever string is passed in; no cleaning happens here.
/// Callers wanting case-insensitive unique counts must clean first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextFeatures {
    pub word_count: usize,
    pub char_count: usize,
    pub avg_word_length: f64,
    pub unique_word_count: usize,
}

/// Extract word count, character count, average word length and unique word
/// count from a text. Total over all inputs; an empty string yields zeros.
pub fn extract_features(text: &str) -> TextFeatures {
    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();
    let char_count = text.chars().count();

    let avg_word_length = if word_count > 0 {
        let total: usize = words.iter().map(|w| w.chars().count()).sum();
        total as f64 / word_count as f64
    } else {
        0.0
    };

    let unique_word_count = words.iter().collect::<HashSet<_>>().len();

    TextFeatures {
        word_count,
        char_count,
        avg_word_length,
        unique_word_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_zeros() {
        let features = extract_features("");
        assert_eq!(features.word_count, 0);
        assert_eq!(features.char_count, 0);
        assert_eq!(features.avg_word_length, 0.0);
        assert_eq!(features.unique_word_count, 0);
    }

    #[test]
    fn counts_words_chars_and_uniques() {
        let features = extract_features("hello world test");
        assert_eq!(features.word_count, 3);
        assert_eq!(features.char_count, 16);
        assert_eq!(features.unique_word_count, 3);
        assert!((features.avg_word_length - 14.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn repeated_words_counted_once_as_unique() {
        let features = extract_features("la la la land");
        assert_eq!(features.word_count, 4);
        assert_eq!(features.unique_word_count, 2);
    }

    #[test]
    fn unique_count_is_case_sensitive() {
        let features = extract_features("Rain rain");
        assert_eq!(features.unique_word_count, 2);
    }

    #[test]
    fn features_serialize_to_named_fields() {
        let features = extract_features("hello world");
        let value = serde_json::to_value(&features).unwrap();
        assert_eq!(value["word_count"], 2);
        assert_eq!(value["char_count"], 11);
        assert_eq!(value["unique_word_count"], 2);
        assert_eq!(value["avg_word_length"], 5.0);
    }

    #[test]
    fn whitespace_only_has_no_words() {
        let features = extract_features("   \t  \n");
        assert_eq!(features.word_count, 0);
        assert_eq!(features.avg_word_length, 0.0);
        assert!(features.char_count > 0);
    }
}
