//! Pattern-style sentiment backend.
//!
//! Averages per-word (polarity, subjectivity) entries from an embedded
//! lexicon, in the manner of pattern/TextBlob: an intensifier directly
//! before a hit scales it, a negator within the two preceding tokens flips
//! and halves the polarity. Stateless; a text with no lexicon hits scores
//! (0, 0).

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Polarity multiplier applied by a preceding negator.
const NEGATION_FACTOR: f64 = -0.5;
/// Scaling applied by a directly preceding intensifier.
const INTENSITY_FACTOR: f64 = 1.3;
/// How many preceding tokens a negator acts across.
const NEGATION_WINDOW: usize = 2;

/// Polarity in [-1, 1] and subjectivity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatternScores {
    pub polarity: f64,
    pub subjectivity: f64,
}

const NEGATORS: &[&str] = &[
    "not", "no", "never", "don't", "doesn't", "didn't", "isn't",
    "wasn't", "won't", "can't", "couldn't", "wouldn't", "shouldn't", "ain't",
];

const INTENSIFIERS: &[&str] = &[
    "very", "really", "extremely", "incredibly", "absolutely", "so", "totally",
];

// (word, polarity, subjectivity)
const LEXICON: &[(&str, f64, f64)] = &[
    ("alive", 0.2, 0.4),
    ("alone", -0.25, 0.5),
    ("amazing", 0.6, 0.9),
    ("angry", -0.5, 1.0),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("bitter", -0.4, 0.7),
    ("boring", -1.0, 1.0),
    ("brave", 0.6, 0.9),
    ("bright", 0.4, 0.65),
    ("brilliant", 0.9, 0.9),
    ("broken", -0.4, 0.6),
    ("calm", 0.3, 0.7),
    ("cold", -0.2, 0.5),
    ("cruel", -0.8, 0.9),
    ("dark", -0.15, 0.4),
    ("dead", -0.2, 0.4),
    ("dreadful", -1.0, 1.0),
    ("empty", -0.2, 0.5),
    ("excellent", 1.0, 1.0),
    ("excited", 0.4, 0.8),
    ("fantastic", 0.4, 0.9),
    ("free", 0.4, 0.8),
    ("fun", 0.3, 0.2),
    ("furious", -0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("hate", -0.8, 0.9),
    ("hopeful", 0.5, 0.8),
    ("hopeless", -0.8, 0.9),
    ("horrible", -1.0, 1.0),
    ("hurt", -0.5, 0.7),
    ("kind", 0.6, 0.9),
    ("lonely", -0.4, 0.6),
    ("lost", -0.25, 0.5),
    ("love", 0.5, 0.6),
    ("lovely", 0.5, 0.7),
    ("lucky", 0.6, 0.7),
    ("mad", -0.65, 0.9),
    ("miserable", -1.0, 1.0),
    ("nice", 0.6, 1.0),
    ("painful", -0.7, 0.9),
    ("peaceful", 0.45, 0.8),
    ("perfect", 1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("pretty", 0.25, 0.7),
    ("proud", 0.5, 0.8),
    ("sad", -0.5, 1.0),
    ("scared", -0.6, 0.8),
    ("sick", -0.7, 0.9),
    ("strong", 0.4, 0.5),
    ("sweet", 0.35, 0.65),
    ("tender", 0.3, 0.7),
    ("terrible", -1.0, 1.0),
    ("tired", -0.4, 0.7),
    ("ugly", -0.7, 0.8),
    ("warm", 0.5, 0.6),
    ("weak", -0.4, 0.4),
    ("wonderful", 1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.5),
];

lazy_static! {
    static ref LEXICON_MAP: HashMap<&'static str, (f64, f64)> = LEXICON
        .iter()
        .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
        .collect();
}

/// Score a text by averaging its lexicon hits.
pub fn sentiment(text: &str) -> PatternScores {
    let tokens: Vec<String> = text
        .unicode_words()
        .map(|word| word.to_lowercase())
        .collect();

    let mut assessments: Vec<(f64, f64)> = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        let Some(&(polarity, subjectivity)) = LEXICON_MAP.get(token.as_str()) else {
            continue;
        };
        let mut polarity = polarity;
        let mut subjectivity = subjectivity;

        if i > 0 && INTENSIFIERS.contains(&tokens[i - 1].as_str()) {
            polarity *= INTENSITY_FACTOR;
            subjectivity *= INTENSITY_FACTOR;
        }

        let window_start = i.saturating_sub(NEGATION_WINDOW);
        let negated = tokens[window_start..i]
            .iter()
            .any(|t| NEGATORS.contains(&t.as_str()));
        if negated {
            polarity *= NEGATION_FACTOR;
        }

        assessments.push((polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0)));
    }

    if assessments.is_empty() {
        return PatternScores {
            polarity: 0.0,
            subjectivity: 0.0,
        };
    }

    let count = assessments.len() as f64;
    PatternScores {
        polarity: assessments.iter().map(|(p, _)| p).sum::<f64>() / count,
        subjectivity: assessments.iter().map(|(_, s)| s).sum::<f64>() / count,
    }
}
