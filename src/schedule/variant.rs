use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::classifier::Corpus;
use crate::parser::{Preprocessor, ShiftTime};

/// Which flavour of the parsing and matching rules to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// One constraint per line, strict day equality, no time check.
    Classic,
    /// Clause splitting, subject carry-over, loose day and time matching.
    #[default]
    Contextual,
}

impl Variant {
    pub fn preprocessor(self) -> Preprocessor {
        match self {
            Variant::Classic => Preprocessor::lines_only(),
            Variant::Contextual => Preprocessor::with_clauses(),
        }
    }

    pub fn default_corpus(self) -> Corpus {
        match self {
            Variant::Classic => Corpus::Extended,
            Variant::Contextual => Corpus::Compact,
        }
    }

    /// Time given to a shift request that names none.
    pub fn default_shift_time(self) -> ShiftTime {
        match self {
            Variant::Classic => ShiftTime::range("9-5"),
            Variant::Contextual => ShiftTime::Any,
        }
    }

    pub fn carries_subject(self) -> bool {
        matches!(self, Variant::Contextual)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Contextual => "contextual",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(Variant::Classic),
            "contextual" => Ok(Variant::Contextual),
            other => Err(format!("unknown variant '{}' (expected classic or contextual)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names() {
        assert_eq!("Classic".parse::<Variant>(), Ok(Variant::Classic));
        assert_eq!(" contextual ".parse::<Variant>(), Ok(Variant::Contextual));
        assert!("fuzzy".parse::<Variant>().is_err());
    }

    #[test]
    fn variant_defaults() {
        assert_eq!(Variant::default(), Variant::Contextual);
        let compound = "Bob is free and Sam is not";
        assert_eq!(Variant::Contextual.preprocessor().split(compound).len(), 2);
        assert_eq!(Variant::Classic.preprocessor().split(compound).len(), 1);
        assert_eq!(Variant::Classic.default_shift_time().to_string(), "9-5");
        assert_eq!(Variant::Classic.default_corpus(), Corpus::Extended);
    }
}
