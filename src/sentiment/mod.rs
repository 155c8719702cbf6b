//! Sentiment scoring and classification.
//!
//! [`SentimentAnalyzer`] dispatches text to one or both lexicon backends
//! (`valence`, `pattern`) and maps the resulting scores to a
//! positive/negative/neutral label with fixed per-backend thresholds.

mod pattern;
mod valence;

pub use pattern::PatternScores;
pub use valence::{ValenceAnalyzer, ValenceScores};

use crate::dataset::{DatasetError, Table};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors from scoring.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("unknown sentiment method: {0:?} (expected \"valence\", \"pattern\" or \"both\")")]
    UnknownMethod(String),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Classification label. Displays lowercase, as written to output columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Valence,
    Pattern,
    Both,
}

impl Method {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "valence" => Some(Method::Valence),
            "pattern" => Some(Method::Pattern),
            "both" => Some(Method::Both),
            _ => None,
        }
    }

    /// Output column names, in the order the scores flatten to.
    fn score_columns(self) -> &'static [&'static str] {
        match self {
            Method::Valence => &["neg", "neu", "pos", "compound"],
            Method::Pattern => &["polarity", "subjectivity"],
            Method::Both => &["neg", "neu", "pos", "compound", "polarity", "subjectivity"],
        }
    }
}

/// Scores for one text, tagged by the method that produced them.
///
/// The two schemas have no overlapping names, so `Both` flattens to the
/// plain union of their columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SentimentScores {
    Valence(ValenceScores),
    Pattern(PatternScores),
    Both {
        valence: ValenceScores,
        pattern: PatternScores,
    },
}

impl SentimentScores {
    /// Flatten to named values, in the same order as
    /// [`Method::score_columns`].
    pub fn values(&self) -> Vec<(&'static str, f64)> {
        match self {
            SentimentScores::Valence(v) => vec![
                ("neg", v.neg),
                ("neu", v.neu),
                ("pos", v.pos),
                ("compound", v.compound),
            ],
            SentimentScores::Pattern(p) => vec![
                ("polarity", p.polarity),
                ("subjectivity", p.subjectivity),
            ],
            SentimentScores::Both { valence, pattern } => vec![
                ("neg", valence.neg),
                ("neu", valence.neu),
                ("pos", valence.pos),
                ("compound", valence.compound),
                ("polarity", pattern.polarity),
                ("subjectivity", pattern.subjectivity),
            ],
        }
    }
}

/// Dispatches scoring to the configured backend(s) and classifies results.
///
/// Construction is lenient: any method string is accepted (lowercased), and
/// an unrecognized one only fails once [`score`](Self::score) is called.
/// The valence backend is built up front when the method needs it.
pub struct SentimentAnalyzer {
    raw_method: String,
    method: Option<Method>,
    valence: Option<ValenceAnalyzer>,
}

impl SentimentAnalyzer {
    pub fn new(method: &str) -> Self {
        let raw_method = method.to_lowercase();
        let method = Method::parse(&raw_method);
        let valence = matches!(method, Some(Method::Valence) | Some(Method::Both))
            .then(ValenceAnalyzer::new);
        Self {
            raw_method,
            method,
            valence,
        }
    }

    fn method(&self) -> Result<Method, AnalyzerError> {
        self.method
            .ok_or_else(|| AnalyzerError::UnknownMethod(self.raw_method.clone()))
    }

    fn valence_backend(&self) -> &ValenceAnalyzer {
        // Present whenever method is Valence or Both, see new().
        self.valence.as_ref().unwrap()
    }

    /// Score a single text with the configured method.
    pub fn score(&self, text: &str) -> Result<SentimentScores, AnalyzerError> {
        Ok(match self.method()? {
            Method::Valence => {
                SentimentScores::Valence(self.valence_backend().polarity_scores(text))
            }
            Method::Pattern => SentimentScores::Pattern(pattern::sentiment(text)),
            Method::Both => SentimentScores::Both {
                valence: self.valence_backend().polarity_scores(text),
                pattern: pattern::sentiment(text),
            },
        })
    }

    /// Map scores to a label.
    ///
    /// Valence scores classify on `compound` with inclusive +-0.05
    /// thresholds; pattern scores on `polarity` with exclusive +-0.1
    /// thresholds. The two backends have different natural dynamic ranges,
    /// so the thresholds differ. When both schemas are present only the
    /// compound rule applies.
    pub fn classify(&self, scores: &SentimentScores) -> Sentiment {
        match scores {
            SentimentScores::Valence(v) | SentimentScores::Both { valence: v, .. } => {
                if v.compound >= 0.05 {
                    Sentiment::Positive
                } else if v.compound <= -0.05 {
                    Sentiment::Negative
                } else {
                    Sentiment::Neutral
                }
            }
            SentimentScores::Pattern(p) => {
                if p.polarity > 0.1 {
                    Sentiment::Positive
                } else if p.polarity < -0.1 {
                    Sentiment::Negative
                } else {
                    Sentiment::Neutral
                }
            }
        }
    }

    /// Score and classify every row of a table, appending the method's
    /// score columns plus a `sentiment` column.
    ///
    /// Rows are independent, so they are scored in parallel; output order
    /// matches input order. Missing cells score as empty text. The method
    /// is batch-global: an unrecognized one fails the whole call before any
    /// row is scored.
    pub fn analyze_table(
        &self,
        table: &Table,
        text_column: &str,
    ) -> Result<Table, AnalyzerError> {
        let method = self.method()?;
        let col = table
            .column(text_column)
            .ok_or_else(|| DatasetError::MissingColumn(text_column.to_string()))?;

        let results: Vec<(SentimentScores, Sentiment)> = table
            .rows()
            .par_iter()
            .map(|row| {
                let text = row.get(col).map(String::as_str).unwrap_or("");
                let scores = self.score(text)?;
                let label = self.classify(&scores);
                Ok((scores, label))
            })
            .collect::<Result<_, AnalyzerError>>()?;

        let mut out = table.clone();
        for (j, name) in method.score_columns().iter().enumerate() {
            let values: Vec<String> = results
                .iter()
                .map(|(scores, _)| format_score(scores.values()[j].1))
                .collect();
            out.push_column(name, values)?;
        }
        let labels: Vec<String> = results
            .iter()
            .map(|(_, label)| label.to_string())
            .collect();
        out.push_column("sentiment", labels)?;
        Ok(out)
    }
}

fn format_score(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lyrics_table() -> Table {
        let mut table = Table::new(vec!["song_title", "lyrics"]);
        table.push_row(vec![
            "Happy Song",
            "I am so happy today, sunshine and joy everywhere",
        ]);
        table.push_row(vec![
            "Sad Ballad",
            "My heart is broken, tears falling down, sadness all around",
        ]);
        table.push_row(vec!["Neutral Tune", "Walking down the street, just another day"]);
        table
    }

    #[test]
    fn valence_method_returns_valence_schema() {
        let analyzer = SentimentAnalyzer::new("valence");
        let scores = analyzer.score("I love this").unwrap();
        assert!(matches!(scores, SentimentScores::Valence(_)));
        let names: Vec<&str> = scores.values().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["neg", "neu", "pos", "compound"]);
    }

    #[test]
    fn pattern_method_returns_pattern_schema() {
        let analyzer = SentimentAnalyzer::new("pattern");
        let scores = analyzer.score("I love this wonderful song").unwrap();
        let SentimentScores::Pattern(p) = scores else {
            panic!("expected pattern scores");
        };
        assert!(p.polarity > 0.0);
        assert!((0.0..=1.0).contains(&p.subjectivity));
    }

    #[test]
    fn both_method_returns_union_of_schemas() {
        let analyzer = SentimentAnalyzer::new("both");
        let scores = analyzer.score("I love this").unwrap();
        let names: Vec<&str> = scores.values().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            ["neg", "neu", "pos", "compound", "polarity", "subjectivity"]
        );
    }

    #[test]
    fn method_is_case_insensitive() {
        let analyzer = SentimentAnalyzer::new("VaLeNcE");
        assert!(analyzer.score("fine").is_ok());
    }

    #[test]
    fn unknown_method_fails_at_score_time() {
        // Lenient construction, strict scoring.
        let analyzer = SentimentAnalyzer::new("magic8ball");
        let err = analyzer.score("any text").unwrap_err();
        assert!(matches!(
            err,
            AnalyzerError::UnknownMethod(value) if value == "magic8ball"
        ));
    }

    #[test]
    fn classifies_compound_with_inclusive_thresholds() {
        let analyzer = SentimentAnalyzer::new("valence");
        let classify = |compound: f64| {
            analyzer.classify(&SentimentScores::Valence(ValenceScores {
                neg: 0.0,
                neu: 1.0,
                pos: 0.0,
                compound,
            }))
        };
        assert_eq!(classify(0.5), Sentiment::Positive);
        assert_eq!(classify(-0.5), Sentiment::Negative);
        assert_eq!(classify(0.02), Sentiment::Neutral);
        assert_eq!(classify(0.05), Sentiment::Positive);
        assert_eq!(classify(-0.05), Sentiment::Negative);
        assert_eq!(classify(0.0), Sentiment::Neutral);
    }

    #[test]
    fn classifies_polarity_with_exclusive_thresholds() {
        let analyzer = SentimentAnalyzer::new("pattern");
        let classify = |polarity: f64| {
            analyzer.classify(&SentimentScores::Pattern(PatternScores {
                polarity,
                subjectivity: 0.5,
            }))
        };
        assert_eq!(classify(0.5), Sentiment::Positive);
        assert_eq!(classify(-0.5), Sentiment::Negative);
        assert_eq!(classify(0.1), Sentiment::Neutral);
        assert_eq!(classify(-0.1), Sentiment::Neutral);
        assert_eq!(classify(0.0), Sentiment::Neutral);
    }

    #[test]
    fn both_mode_classifies_on_compound_only() {
        let analyzer = SentimentAnalyzer::new("both");
        // Strongly positive polarity must not override a neutral compound.
        let scores = SentimentScores::Both {
            valence: ValenceScores {
                neg: 0.0,
                neu: 1.0,
                pos: 0.0,
                compound: 0.0,
            },
            pattern: PatternScores {
                polarity: 0.9,
                subjectivity: 0.9,
            },
        };
        assert_eq!(analyzer.classify(&scores), Sentiment::Neutral);
    }

    #[test]
    fn end_to_end_labels_match_lyrics() {
        let analyzer = SentimentAnalyzer::new("valence");
        let positive = analyzer
            .score("I love this song, it's amazing and wonderful!")
            .unwrap();
        assert_eq!(analyzer.classify(&positive), Sentiment::Positive);

        let negative = analyzer
            .score("This is terrible, awful, and horrible.")
            .unwrap();
        assert_eq!(analyzer.classify(&negative), Sentiment::Negative);
    }

    #[test]
    fn analyze_table_appends_method_columns_and_labels() {
        let analyzer = SentimentAnalyzer::new("valence");
        let out = analyzer.analyze_table(&lyrics_table(), "lyrics").unwrap();

        assert_eq!(out.len(), 3);
        assert_eq!(
            out.headers(),
            ["song_title", "lyrics", "neg", "neu", "pos", "compound", "sentiment"]
        );
        // Order preserved.
        assert_eq!(out.cell(0, 0), Some("Happy Song"));
        assert_eq!(out.cell(2, 0), Some("Neutral Tune"));

        let sentiment = out.column("sentiment").unwrap();
        assert_eq!(out.cell(0, sentiment), Some("positive"));
        assert_eq!(out.cell(1, sentiment), Some("negative"));
        assert_eq!(out.cell(2, sentiment), Some("neutral"));
    }

    #[test]
    fn analyze_table_with_both_appends_union_columns() {
        let analyzer = SentimentAnalyzer::new("both");
        let out = analyzer.analyze_table(&lyrics_table(), "lyrics").unwrap();
        assert_eq!(
            out.headers(),
            [
                "song_title",
                "lyrics",
                "neg",
                "neu",
                "pos",
                "compound",
                "polarity",
                "subjectivity",
                "sentiment"
            ]
        );
    }

    #[test]
    fn analyze_table_scores_missing_cells_as_empty_text() {
        let mut table = Table::new(vec!["song_title", "lyrics"]);
        table.push_row(vec!["No Lyrics"]);

        let analyzer = SentimentAnalyzer::new("valence");
        let out = analyzer.analyze_table(&table, "lyrics").unwrap();
        let sentiment = out.column("sentiment").unwrap();
        assert_eq!(out.cell(0, sentiment), Some("neutral"));
    }

    #[test]
    fn analyze_table_aborts_on_unknown_method() {
        let analyzer = SentimentAnalyzer::new("nope");
        let err = analyzer.analyze_table(&lyrics_table(), "lyrics").unwrap_err();
        assert!(matches!(err, AnalyzerError::UnknownMethod(_)));
    }

    #[test]
    fn analyze_table_requires_text_column() {
        let analyzer = SentimentAnalyzer::new("valence");
        let err = analyzer.analyze_table(&lyrics_table(), "words").unwrap_err();
        assert!(matches!(
            err,
            AnalyzerError::Dataset(DatasetError::MissingColumn(_))
        ));
    }
}
