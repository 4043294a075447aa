//! Configuration settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classifier::{Corpus, IntentClassifier, TrainingExample};
use crate::error::{ConfigError, Result};
use crate::schedule::{RosterGenerator, Variant};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "shift-roster.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scheduler: SchedulerConfig,
    pub classifier: ClassifierConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub variant: Variant,
    /// Training corpus; the variant's own corpus when unset.
    pub corpus: Option<Corpus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Additive smoothing constant.
    pub smoothing: f64,
    /// Labelled sentences appended to the built-in corpus.
    pub examples: Vec<TrainingExample>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            smoothing: 1.0,
            examples: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Longest request text accepted by the HTTP API.
    pub max_input_chars: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_input_chars: 20_000,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadFile)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Uses `path` when given, else the default file if present, else
    /// built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            tracing::info!("Loading config from: {}", path.display());
            return Self::from_file(path);
        }

        let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            tracing::info!("Loading config from: {}", fallback.display());
            return Self::from_file(&fallback);
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    fn validate(&self) -> Result<()> {
        if self.classifier.smoothing.is_nan() || self.classifier.smoothing <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "classifier.smoothing must be positive, got {}",
                self.classifier.smoothing
            ))
            .into());
        }
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must not be 0".to_string()).into());
        }
        if self.server.max_input_chars == 0 {
            return Err(
                ConfigError::Invalid("server.max_input_chars must not be 0".to_string()).into(),
            );
        }
        Ok(())
    }

    pub fn corpus(&self) -> Corpus {
        self.scheduler
            .corpus
            .unwrap_or_else(|| self.scheduler.variant.default_corpus())
    }

    /// Trains the classifier and builds the generator described by this
    /// configuration.
    pub fn generator(&self) -> Result<RosterGenerator> {
        let builtin = self.corpus().examples().iter().copied();
        let extra = self
            .classifier
            .examples
            .iter()
            .map(|e| (e.text.as_str(), e.intent));
        let classifier = IntentClassifier::train(builtin.chain(extra), self.classifier.smoothing)?;

        if !self.classifier.examples.is_empty() {
            tracing::info!(
                extra = self.classifier.examples.len(),
                "extended training corpus from configuration"
            );
        }

        Ok(RosterGenerator::new(self.scheduler.variant, classifier))
    }
}
