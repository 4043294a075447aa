//! Intent classification.
//!
//! A bag-of-words multinomial naive Bayes model, trained once from a small
//! labelled corpus and read-only afterwards.

pub mod corpus;

use std::collections::HashMap;
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

pub use corpus::Corpus;

/// What a line of staffing text is asking for.
///
/// Variants are declared in label order; an exact score tie resolves to the
/// earliest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    Availability,
    Preference,
    ShiftRequest,
    Unavailability,
}

impl Intent {
    pub const ALL: [Intent; 4] = [
        Intent::Availability,
        Intent::Preference,
        Intent::ShiftRequest,
        Intent::Unavailability,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Intent::Availability => "AVAILABILITY",
            Intent::Preference => "PREFERENCE",
            Intent::ShiftRequest => "SHIFT_REQUEST",
            Intent::Unavailability => "UNAVAILABILITY",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A labelled sentence, as accepted from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub text: String,
    pub intent: Intent,
}

/// Trained multinomial naive Bayes classifier.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    token_pattern: Regex,
    vocabulary: HashMap<String, usize>,
    log_priors: [f64; 4],
    /// Per intent, the smoothed log probability of each vocabulary word.
    log_likelihoods: [Vec<f64>; 4],
}

impl IntentClassifier {
    /// Trains on one of the built-in corpora with Laplace smoothing.
    pub fn from_corpus(corpus: Corpus) -> Result<Self, ClassifierError> {
        Self::train(corpus.examples().iter().copied(), 1.0)
    }

    /// Trains on arbitrary labelled text.
    ///
    /// `smoothing` is the additive (Lidstone) constant and must be positive.
    pub fn train<'a, I>(examples: I, smoothing: f64) -> Result<Self, ClassifierError>
    where
        I: IntoIterator<Item = (&'a str, Intent)>,
    {
        if smoothing.is_nan() || smoothing <= 0.0 {
            return Err(ClassifierError::InvalidSmoothing(smoothing));
        }

        let token_pattern = token_pattern();
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_counts = [0usize; 4];
        let mut word_counts: [HashMap<usize, f64>; 4] = Default::default();

        for (text, intent) in examples {
            doc_counts[intent.index()] += 1;
            for token in tokenize(&token_pattern, text) {
                let next_id = vocabulary.len();
                let id = *vocabulary.entry(token).or_insert(next_id);
                *word_counts[intent.index()].entry(id).or_insert(0.0) += 1.0;
            }
        }

        let total_docs: usize = doc_counts.iter().sum();
        if total_docs == 0 {
            return Err(ClassifierError::EmptyCorpus);
        }
        if vocabulary.is_empty() {
            return Err(ClassifierError::EmptyVocabulary);
        }

        let vocab_size = vocabulary.len() as f64;
        let mut log_priors = [f64::NEG_INFINITY; 4];
        let mut log_likelihoods: [Vec<f64>; 4] = Default::default();

        for intent in Intent::ALL {
            let i = intent.index();
            if doc_counts[i] > 0 {
                log_priors[i] = (doc_counts[i] as f64 / total_docs as f64).ln();
            }
            let class_total: f64 = word_counts[i].values().sum();
            let denominator = class_total + smoothing * vocab_size;
            log_likelihoods[i] = (0..vocabulary.len())
                .map(|id| {
                    let count = word_counts[i].get(&id).copied().unwrap_or(0.0);
                    ((count + smoothing) / denominator).ln()
                })
                .collect();
        }

        tracing::debug!(
            documents = total_docs,
            vocabulary = vocabulary.len(),
            "trained intent classifier"
        );

        Ok(Self {
            token_pattern,
            vocabulary,
            log_priors,
            log_likelihoods,
        })
    }

    /// Number of distinct training tokens.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Returns the most probable intent for a line. Never fails: words the
    /// model has not seen simply carry no weight.
    pub fn classify(&self, line: &str) -> Intent {
        let scores = self.joint_log_likelihood(line);
        let mut best = Intent::ALL[0];
        for intent in Intent::ALL.into_iter().skip(1) {
            if scores[intent.index()] > scores[best.index()] {
                best = intent;
            }
        }
        best
    }

    /// Normalised probability of every intent, in label order.
    pub fn posteriors(&self, line: &str) -> Vec<(Intent, f64)> {
        let scores = self.joint_log_likelihood(line);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let total: f64 = scores.iter().map(|s| (s - max).exp()).sum();
        Intent::ALL
            .into_iter()
            .map(|intent| (intent, (scores[intent.index()] - max).exp() / total))
            .collect()
    }

    fn joint_log_likelihood(&self, line: &str) -> [f64; 4] {
        let mut scores = self.log_priors;
        for token in tokenize(&self.token_pattern, line) {
            if let Some(&id) = self.vocabulary.get(&token) {
                for (i, score) in scores.iter_mut().enumerate() {
                    *score += self.log_likelihoods[i][id];
                }
            }
        }
        scores
    }
}

/// Words of two or more characters.
fn token_pattern() -> Regex {
    Regex::new(r"\b\w\w+\b").expect("static token pattern")
}

fn tokenize(pattern: &Regex, text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    pattern
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}
