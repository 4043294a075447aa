use regex::Regex;

use super::lexicon;
use super::{Role, ShiftTime, Slots};
use crate::classifier::Intent;

/// Best-effort slot extraction: person, day, time range and role.
///
/// Nothing here is guaranteed correct; a field that cannot be found is left at
/// its default.
#[derive(Debug, Clone)]
pub struct SlotExtractor {
    word: Regex,
    day: Regex,
    time_range: Regex,
}

impl Default for SlotExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotExtractor {
    pub fn new() -> Self {
        Self {
            word: Regex::new(r"\p{L}+(?:['’]\p{L}+)*").expect("static word pattern"),
            day: Regex::new(
                r"(?i)\b(?:(?:(?:this|next|every)\s+)?(?:mon|tues|wednes|thurs|fri|satur|sun)days?|today|tomorrow|tonight|this\s+week(?:end)?|(?:next\s+)?weekends?)\b",
            )
            .expect("static day pattern"),
            time_range: Regex::new(
                r"(?i)\b\d{1,2}(?::\d{2})?(?:\s?[ap]m)?\s*(?:-|–|—|\bto\b)\s*\d{1,2}(?::\d{2})?(?:\s?[ap]m)?\b",
            )
            .expect("static time pattern"),
        }
    }

    /// Extracts slots from one line.
    ///
    /// `subject` is the person carried over from earlier clauses; it only
    /// fills the name of an AVAILABILITY line that names nobody.
    pub fn extract(&self, line: &str, intent: Intent, subject: Option<&str>) -> Slots {
        let mut name = self.person(line);
        if name.is_none() && intent == Intent::Availability {
            name = subject.map(str::to_string);
        }

        Slots {
            name,
            day: self.day(line),
            time: self.time(line),
            role: Role::normalize(line),
        }
    }

    /// First run of capitalised words that are not known non-names.
    pub fn person(&self, line: &str) -> Option<String> {
        let mut parts: Vec<&str> = Vec::new();
        let mut last_end = 0;

        for m in self.word.find_iter(line) {
            let word = strip_possessive(m.as_str());
            let adjacent = line[last_end..m.start()].chars().all(|c| c == ' ');

            if is_name_word(word) && (parts.is_empty() || adjacent) {
                parts.push(word);
                last_end = m.end();
                continue;
            }
            if !parts.is_empty() {
                break;
            }
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    pub fn day(&self, line: &str) -> Option<String> {
        self.day.find(line).map(|m| m.as_str().to_string())
    }

    pub fn time(&self, line: &str) -> ShiftTime {
        self.time_range
            .find(line)
            .map(|m| ShiftTime::range(m.as_str()))
            .unwrap_or_default()
    }
}

fn strip_possessive(word: &str) -> &str {
    word.strip_suffix("'s")
        .or_else(|| word.strip_suffix("’s"))
        .unwrap_or(word)
}

fn is_name_word(word: &str) -> bool {
    let starts_upper = word.chars().next().is_some_and(char::is_uppercase);
    let has_lower = word.chars().any(char::is_lowercase);
    starts_upper && has_lower && !lexicon::is_non_name(&word.to_lowercase())
}
