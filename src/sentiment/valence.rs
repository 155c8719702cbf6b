//! Valence-intensity sentiment backend.
//!
//! A rule-based scorer in the VADER family: every token is looked up in an
//! embedded valence table, preceding booster words amplify or dampen the
//! hit, a negation window flips it, and exclamation marks add emphasis.
//! The output is the four-part breakdown: `neg`/`neu`/`pos` proportions
//! (summing to ~1 when any token exists) and a normalized `compound` score
//! in [-1, 1].

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Booster amplification step.
const BOOST_STEP: f64 = 0.293;
/// Valence multiplier applied by a preceding negation.
const NEGATION_SCALAR: f64 = -0.74;
/// Emphasis added per exclamation mark.
const EXCLAMATION_STEP: f64 = 0.292;
/// Exclamation marks counted beyond this add nothing.
const MAX_EXCLAMATIONS: usize = 4;
/// Normalization constant for the compound score.
const NORMALIZATION_ALPHA: f64 = 15.0;
/// How many preceding tokens boosters and negations act across.
const CONTEXT_WINDOW: usize = 3;

/// Four-part valence breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValenceScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

const NEGATIONS: &[&str] = &[
    "ain't", "aint", "can't", "cannot", "cant", "couldn't", "couldnt",
    "didn't", "didnt", "doesn't", "doesnt", "don't", "dont", "isn't", "isnt",
    "neither", "never", "no", "nobody", "none", "nor", "not", "nothing",
    "nowhere", "shouldn't", "shouldnt", "wasn't", "wasnt", "weren't",
    "werent", "without", "won't", "wont", "wouldn't", "wouldnt",
];

// Positive step amplifies, negative step dampens.
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOST_STEP),
    ("amazingly", BOOST_STEP),
    ("completely", BOOST_STEP),
    ("deeply", BOOST_STEP),
    ("especially", BOOST_STEP),
    ("extremely", BOOST_STEP),
    ("incredibly", BOOST_STEP),
    ("really", BOOST_STEP),
    ("remarkably", BOOST_STEP),
    ("so", BOOST_STEP),
    ("totally", BOOST_STEP),
    ("truly", BOOST_STEP),
    ("utterly", BOOST_STEP),
    ("very", BOOST_STEP),
    ("almost", -BOOST_STEP),
    ("barely", -BOOST_STEP),
    ("hardly", -BOOST_STEP),
    ("kinda", -BOOST_STEP),
    ("marginally", -BOOST_STEP),
    ("occasionally", -BOOST_STEP),
    ("partly", -BOOST_STEP),
    ("scarcely", -BOOST_STEP),
    ("slightly", -BOOST_STEP),
    ("somewhat", -BOOST_STEP),
    ("sorta", -BOOST_STEP),
];

// Word valences on the [-4, 4] scale the VADER family uses.
const VALENCES: &[(&str, f64)] = &[
    // positive
    ("adore", 2.9),
    ("alive", 1.4),
    ("amazing", 2.8),
    ("angel", 2.0),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("bless", 1.8),
    ("brave", 2.2),
    ("bright", 1.9),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("care", 2.2),
    ("celebrate", 2.7),
    ("charm", 2.1),
    ("cheer", 2.3),
    ("comfort", 1.5),
    ("dance", 1.3),
    ("darling", 2.2),
    ("delight", 2.9),
    ("divine", 2.4),
    ("dream", 1.0),
    ("enjoy", 2.2),
    ("excellent", 2.7),
    ("excited", 2.4),
    ("faith", 1.9),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("forgive", 1.5),
    ("free", 1.9),
    ("freedom", 2.3),
    ("friend", 2.2),
    ("fun", 2.3),
    ("glad", 2.0),
    ("glorious", 2.8),
    ("glory", 2.5),
    ("good", 1.9),
    ("grace", 1.8),
    ("grateful", 2.2),
    ("great", 3.1),
    ("happiness", 2.7),
    ("happy", 2.7),
    ("heal", 1.9),
    ("heaven", 2.3),
    ("hope", 1.9),
    ("hopeful", 2.0),
    ("hug", 2.1),
    ("joy", 2.8),
    ("kind", 2.4),
    ("kiss", 1.8),
    ("laugh", 2.6),
    ("light", 1.0),
    ("like", 1.5),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loves", 2.7),
    ("loving", 2.9),
    ("lucky", 1.8),
    ("magic", 2.1),
    ("miracle", 2.8),
    ("nice", 1.8),
    ("paradise", 3.2),
    ("peace", 2.5),
    ("perfect", 2.7),
    ("play", 1.1),
    ("pleasure", 2.5),
    ("pretty", 2.2),
    ("proud", 2.1),
    ("safe", 1.8),
    ("shine", 1.6),
    ("smile", 2.3),
    ("strong", 2.3),
    ("sunshine", 2.2),
    ("sweet", 2.1),
    ("tender", 1.4),
    ("thank", 1.9),
    ("treasure", 2.3),
    ("triumph", 2.4),
    ("trust", 2.3),
    ("warm", 1.6),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("worthy", 1.9),
    ("yes", 1.7),
    // negative
    ("abandon", -1.9),
    ("afraid", -2.2),
    ("alone", -1.0),
    ("angry", -2.3),
    ("anguish", -2.9),
    ("ashamed", -2.2),
    ("awful", -2.0),
    ("bad", -2.5),
    ("betray", -2.8),
    ("bitter", -1.8),
    ("broke", -1.6),
    ("broken", -1.9),
    ("cold", -0.8),
    ("cruel", -2.6),
    ("cry", -2.1),
    ("crying", -2.2),
    ("dark", -0.7),
    ("dead", -3.3),
    ("death", -2.9),
    ("despair", -2.9),
    ("destroy", -2.6),
    ("die", -2.9),
    ("dirty", -1.6),
    ("disaster", -3.1),
    ("doom", -2.4),
    ("doubt", -1.5),
    ("empty", -1.3),
    ("enemy", -2.4),
    ("evil", -3.4),
    ("fail", -2.5),
    ("failure", -2.5),
    ("fear", -2.2),
    ("fight", -1.6),
    ("fool", -1.9),
    ("furious", -2.7),
    ("goodbye", -0.6),
    ("grief", -2.5),
    ("hate", -2.7),
    ("hated", -2.9),
    ("heartbreak", -2.8),
    ("hopeless", -2.6),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("lie", -1.8),
    ("lonely", -1.5),
    ("lose", -1.7),
    ("loss", -1.3),
    ("lost", -1.3),
    ("mad", -2.0),
    ("misery", -2.7),
    ("nightmare", -2.8),
    ("pain", -2.3),
    ("painful", -2.3),
    ("poor", -1.9),
    ("rage", -2.5),
    ("regret", -1.9),
    ("ruin", -2.2),
    ("sad", -2.1),
    ("sadness", -2.1),
    ("scared", -2.2),
    ("shame", -2.1),
    ("sick", -2.0),
    ("sorrow", -2.3),
    ("suffer", -2.5),
    ("tears", -1.5),
    ("terrible", -2.1),
    ("tired", -1.4),
    ("ugly", -2.3),
    ("war", -2.4),
    ("weak", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worthless", -2.7),
    ("wrong", -2.1),
];

lazy_static! {
    static ref BOOSTER_MAP: HashMap<&'static str, f64> =
        BOOSTERS.iter().copied().collect();
}

/// Valence backend. Owns its lookup table, built once at construction.
pub struct ValenceAnalyzer {
    lexicon: HashMap<&'static str, f64>,
}

impl ValenceAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: VALENCES.iter().copied().collect(),
        }
    }

    /// Score a text into the four-part breakdown. Deterministic; texts with
    /// no tokens score all zeros.
    pub fn polarity_scores(&self, text: &str) -> ValenceScores {
        let tokens: Vec<String> = text
            .unicode_words()
            .map(|word| word.to_lowercase())
            .collect();

        let mut sentiments = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            // Boosters carry no valence of their own.
            if BOOSTER_MAP.contains_key(token.as_str()) {
                sentiments.push(0.0);
                continue;
            }
            let valence = match self.lexicon.get(token.as_str()) {
                Some(&v) => self.contextual_valence(v, &tokens, i),
                None => 0.0,
            };
            sentiments.push(valence);
        }

        score_valences(&sentiments, text)
    }

    /// Adjust a word's valence for boosters and negations in the preceding
    /// context window. Booster effect decays with distance.
    fn contextual_valence(&self, valence: f64, tokens: &[String], index: usize) -> f64 {
        let mut valence = valence;
        let window_start = index.saturating_sub(CONTEXT_WINDOW);

        for (distance, j) in (window_start..index).rev().enumerate() {
            let preceding = tokens[j].as_str();
            if let Some(&step) = BOOSTER_MAP.get(preceding) {
                let decay = match distance {
                    0 => 1.0,
                    1 => 0.95,
                    _ => 0.9,
                };
                let boost = step * decay;
                valence += if valence < 0.0 { -boost } else { boost };
            }
        }

        let negated = tokens[window_start..index]
            .iter()
            .any(|t| NEGATIONS.contains(&t.as_str()));
        if negated {
            valence *= NEGATION_SCALAR;
        }
        valence
    }
}

impl Default for ValenceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold per-token valences into the neg/neu/pos/compound breakdown.
fn score_valences(sentiments: &[f64], text: &str) -> ValenceScores {
    if sentiments.is_empty() {
        return ValenceScores {
            neg: 0.0,
            neu: 0.0,
            pos: 0.0,
            compound: 0.0,
        };
    }

    let mut sum: f64 = sentiments.iter().sum();
    let emphasis = exclamation_emphasis(text);
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize(sum);

    // Proportions: each scored token contributes its valence shifted one
    // unit away from zero; unscored tokens count toward neutral.
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    ValenceScores {
        neg: round3(neg_sum.abs() / total),
        neu: round3(neu_count / total),
        pos: round3(pos_sum / total),
        compound: round3(compound),
    }
}

fn exclamation_emphasis(text: &str) -> f64 {
    let count = text.matches('!').count().min(MAX_EXCLAMATIONS);
    count as f64 * EXCLAMATION_STEP
}

fn normalize(sum: f64) -> f64 {
    let normalized = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
    normalized.clamp(-1.0, 1.0)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
