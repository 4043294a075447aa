//! Turning raw staffing text into slot records.

pub mod extract;
pub mod lexicon;
pub mod preprocess;

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

pub use extract::SlotExtractor;
pub use preprocess::Preprocessor;

/// Canonical staff roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    Stock,
    Cashier,
    Supervisor,
    #[default]
    General,
}

impl Role {
    /// Maps free text to a role by scanning the keyword table in order; the
    /// first keyword found anywhere in the text wins.
    pub fn normalize(text: &str) -> Role {
        let lower = text.to_lowercase();
        lexicon::ROLE_KEYWORDS
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map(|(_, role)| *role)
            .unwrap_or(Role::General)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Stock => "Stock",
            Role::Cashier => "Cashier",
            Role::Supervisor => "Supervisor",
            Role::General => "General",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shift time: either unconstrained or a range kept as written ("9-5",
/// "12 to 8").
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShiftTime {
    #[default]
    Any,
    Range(String),
}

impl ShiftTime {
    pub fn range(text: impl Into<String>) -> Self {
        ShiftTime::Range(text.into())
    }

    pub fn is_any(&self) -> bool {
        matches!(self, ShiftTime::Any)
    }
}

impl fmt::Display for ShiftTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftTime::Any => f.write_str("Any"),
            ShiftTime::Range(text) => f.write_str(text),
        }
    }
}

impl Serialize for ShiftTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Fields pulled out of one line.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Slots {
    pub name: Option<String>,
    pub day: Option<String>,
    pub time: ShiftTime,
    pub role: Role,
}
