//! Error types for shift-roster.
//!
//! The roster pipeline itself never fails: bad lines degrade to defaults.
//! These errors cover the surfaces around it (configuration, classifier
//! training, file output).

use thiserror::Error;

/// Main error type.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised while training the intent classifier.
#[derive(Error, Debug, PartialEq)]
pub enum ClassifierError {
    #[error("Training corpus is empty")]
    EmptyCorpus,

    #[error("Training corpus has no usable tokens")]
    EmptyVocabulary,

    #[error("Smoothing must be positive, got {0}")]
    InvalidSmoothing(f64),
}

pub type Result<T> = std::result::Result<T, RosterError>;
