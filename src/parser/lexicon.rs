//! Word lists used by the slot extractor.

use super::Role;

/// Surface keyword to canonical role. Scanned in order.
pub const ROLE_KEYWORDS: &[(&str, Role)] = &[
    ("stock", Role::Stock),
    ("restock", Role::Stock),
    ("inventory", Role::Stock),
    ("cashier", Role::Cashier),
    ("register", Role::Cashier),
    ("supervisor", Role::Supervisor),
    ("manager", Role::Supervisor),
    ("floor", Role::General),
    ("help", Role::General),
    ("general", Role::General),
];

pub const WEEKDAYS: &[&str] = &[
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

pub const MONTHS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Capitalised words that are never part of a person's name. Lowercase.
pub const NON_NAME_WORDS: &[&str] = &[
    // pronouns and determiners
    "i", "i'm", "i'd", "i'll", "i've", "im", "we", "we're", "you", "he", "she", "they", "it",
    "me", "my", "our", "your", "his", "her", "their", "this", "that", "these", "those", "the",
    "a", "an", "any", "anyone", "someone", "somebody", "everyone", "who", "what", "when",
    // conjunctions and fillers
    "and", "or", "but", "so", "if", "also", "only", "just", "all", "every", "next", "please",
    "thanks", "hi", "hello", "yes", "no", "not", "ok", "okay", "maybe", "sorry",
    "unfortunately", "ideally", "better", "then",
    // prepositions
    "on", "in", "at", "for", "from", "to", "by", "with", "of", "as", "due", "because",
    // sentence-initial verbs
    "need", "needs", "needed", "looking", "searching", "ready", "sign", "schedule", "put",
    "free", "available", "unavailable", "do", "don't", "can", "can't", "cannot", "will",
    "won't", "would", "should", "must", "is", "are", "has", "have", "let", "taking", "going",
    "feeling", "stuck", "requires", "require", "prefer", "prefers", "preferred", "opening",
    "vacant", "off", "shift", "open",
    // numbers
    "one", "two", "three", "four", "five",
    // time of day and relative dates
    "morning", "mornings", "afternoon", "evening", "evenings", "night", "nights", "weekend",
    "weekends", "today", "tomorrow", "tonight", "am", "pm", "utc",
    // roles and staff words
    "cashier", "cashiers", "stock", "stockers", "inventory", "restock", "register", "manager",
    "supervisor", "floor", "general", "help", "staff", "server", "bartender",
];

pub fn is_weekday(lower: &str) -> bool {
    let singular = lower.strip_suffix('s').unwrap_or(lower);
    WEEKDAYS.contains(&singular)
}

pub fn is_month(lower: &str) -> bool {
    MONTHS.contains(&lower)
}

pub fn is_non_name(lower: &str) -> bool {
    NON_NAME_WORDS.contains(&lower) || is_weekday(lower) || is_month(lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_plurals() {
        assert!(is_weekday("mondays"));
        assert!(is_weekday("friday"));
        assert!(!is_weekday("fri"));
    }

    #[test]
    fn names_are_not_stop_words() {
        for name in ["alice", "bob", "claire", "dan", "erin", "frank", "sam"] {
            assert!(!is_non_name(name), "{name}");
        }
        assert!(is_non_name("we"));
        assert!(is_non_name("saturday"));
    }
}
