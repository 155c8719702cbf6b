//! Compiled-in English stopword set.
//!
//! The list is the standard NLTK English one. Contracted forms ("don't",
//! "should've") are omitted: cleaning strips punctuation before the filter
//! runs, so tokens can never contain apostrophes.

use lazy_static::lazy_static;
use std::collections::HashSet;

const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "her", "hers", "herself", "it", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "these", "those", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing",
    "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "about", "against", "between",
    "into", "through", "during", "before", "after", "above", "below", "to",
    "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "should", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn",
    "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn",
    "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
];

lazy_static! {
    static ref ENGLISH: HashSet<&'static str> =
        ENGLISH_STOPWORDS.iter().copied().collect();
}

/// The English stopword set.
pub fn english() -> &'static HashSet<&'static str> {
    &ENGLISH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_words_are_stopwords() {
        let set = english();
        for word in ["the", "is", "and", "of"] {
            assert!(set.contains(word), "expected stopword: {}", word);
        }
    }

    #[test]
    fn content_words_are_not_stopwords() {
        let set = english();
        for word in ["love", "sunshine", "guitar"] {
            assert!(!set.contains(word), "unexpected stopword: {}", word);
        }
    }
}
