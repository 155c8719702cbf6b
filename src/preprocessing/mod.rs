//! Text cleaning and feature extraction for lyrics.

mod features;
mod stopwords;

pub use features::{extract_features, TextFeatures};
pub use stopwords::english as english_stopwords;

use crate::dataset::{DatasetError, Table};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "https" starts with "http", so two alternatives cover all three prefixes.
    static ref URL_RE: Regex = Regex::new(r"(?:http|www)\S+").unwrap();
    static ref NON_LETTER_RE: Regex = Regex::new(r"[^a-zA-Z\s]").unwrap();
}

/// Normalize a raw text for analysis.
///
/// In order: lowercase, strip URL-like tokens, strip everything that is not
/// a Latin letter or whitespace (digits and punctuation included), collapse
/// whitespace runs, and then optionally drop English stopwords. A missing
/// value cleans to the empty string.
pub fn clean_text(text: Option<&str>, remove_stopwords: bool) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let text = text.to_lowercase();
    let text = URL_RE.replace_all(&text, "");
    let text = NON_LETTER_RE.replace_all(&text, "");
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if !remove_stopwords {
        return cleaned;
    }

    let stopwords = stopwords::english();
    cleaned
        .split_whitespace()
        .filter(|word| !stopwords.contains(*word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clean the text column of a table, appending `cleaned_lyrics` and
/// `word_count` columns. Row order and all existing columns are preserved;
/// missing cells clean to empty strings.
pub fn preprocess_table(table: &Table, text_column: &str) -> Result<Table, DatasetError> {
    let col = table
        .column(text_column)
        .ok_or_else(|| DatasetError::MissingColumn(text_column.to_string()))?;

    let cleaned: Vec<String> = table
        .rows()
        .iter()
        .map(|row| clean_text(row.get(col).map(String::as_str), false))
        .collect();
    let word_counts: Vec<String> = cleaned
        .iter()
        .map(|text| text.split_whitespace().count().to_string())
        .collect();

    let mut out = table.clone();
    out.push_column("cleaned_lyrics", cleaned)?;
    out.push_column("word_count", word_counts)?;
    Ok(out)
}
