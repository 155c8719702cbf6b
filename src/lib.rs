//! Lyrics Sentiment Library
//!
//! Lexicon-based sentiment analysis over tabular song-lyrics data: text
//! cleaning, lexical feature extraction, dual-backend scoring and
//! classification, and CSV/JSON table I/O.

pub mod dataset;
pub mod preprocessing;
pub mod sentiment;

// Re-export commonly used types for convenience
pub use dataset::{DatasetError, Table};
pub use preprocessing::{clean_text, extract_features, preprocess_table, TextFeatures};
pub use sentiment::{AnalyzerError, Sentiment, SentimentAnalyzer, SentimentScores};
