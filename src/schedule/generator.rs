//! The roster generator: parse, match, infer.
//!
//! # Algorithm
//!
//! 1. Split the input into lines (and clauses, for the contextual variant).
//! 2. Classify each line and route it: conflicts, employees, preferences and
//!    shift requests. The last named person is threaded through as the
//!    current subject.
//! 3. First-fit matching of requested slots against employees.
//! 4. Inferred slots for whoever is left.

use serde::Serialize;
use tracing::{debug, info};

use super::matching::{infer_from_availability, match_explicit};
use super::types::{ConflictRecord, Employee, Roster, ShiftSlot};
use super::Variant;
use crate::classifier::{Intent, IntentClassifier};
use crate::parser::{Preprocessor, SlotExtractor, Slots};

/// Number of slots a shift request asks for.
///
/// "two"/"2" means two and "three"/"3" means three. Both checks run, so a
/// line mentioning both numbers asks for three.
pub fn headcount(line: &str) -> usize {
    let lower = line.to_lowercase();
    let mut count = 1;
    if lower.contains("two") || line.contains('2') {
        count = 2;
    }
    if lower.contains("three") || line.contains('3') {
        count = 3;
    }
    count
}

/// Probability assigned to one intent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntentScore {
    pub intent: Intent,
    pub probability: f64,
}

/// How a single line was understood.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineAnalysis {
    pub line: String,
    pub intent: Intent,
    pub scores: Vec<IntentScore>,
    pub slots: Slots,
}

/// Accumulated state of the parse phase.
#[derive(Debug, Default)]
struct ParseState {
    employees: Vec<Employee>,
    shifts: Vec<ShiftSlot>,
    conflicts: Vec<ConflictRecord>,
    subject: Option<String>,
}

/// Turns staffing text into a roster.
///
/// Holds the trained classifier and compiled patterns; build it once and
/// share it by reference. Generation never mutates it.
#[derive(Debug, Clone)]
pub struct RosterGenerator {
    variant: Variant,
    classifier: IntentClassifier,
    extractor: SlotExtractor,
    preprocessor: Preprocessor,
}

impl RosterGenerator {
    pub fn new(variant: Variant, classifier: IntentClassifier) -> Self {
        Self {
            variant,
            classifier,
            extractor: SlotExtractor::new(),
            preprocessor: variant.preprocessor(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    /// Runs all three phases over the input text.
    pub fn generate(&self, text: &str) -> Roster {
        let lines = self.preprocessor.split(text);
        let ParseState {
            mut employees,
            mut shifts,
            conflicts,
            ..
        } = lines
            .iter()
            .fold(ParseState::default(), |state, line| self.absorb(state, line));

        let requested = shifts.len();
        let matched = match_explicit(self.variant, &mut shifts, &mut employees);
        let inferred = infer_from_availability(&mut employees, &mut shifts);

        info!(
            variant = %self.variant,
            lines = lines.len(),
            employees = employees.len(),
            requested,
            matched,
            inferred,
            conflicts = conflicts.len(),
            "generated roster"
        );

        Roster {
            employees,
            shifts,
            conflicts,
        }
    }

    /// Classifies and extracts every line without building a roster.
    pub fn analyze(&self, text: &str) -> Vec<LineAnalysis> {
        self.preprocessor
            .split(text)
            .into_iter()
            .scan(None::<String>, |subject, line| {
                let (intent, slots) = self.read(&line, subject.as_deref());
                self.carry_subject(subject, &slots);
                let scores = self
                    .classifier
                    .posteriors(&line)
                    .into_iter()
                    .map(|(intent, probability)| IntentScore { intent, probability })
                    .collect();
                Some(LineAnalysis {
                    line,
                    intent,
                    scores,
                    slots,
                })
            })
            .collect()
    }

    fn read(&self, line: &str, subject: Option<&str>) -> (Intent, Slots) {
        let intent = self.classifier.classify(line);
        let subject = if self.variant.carries_subject() { subject } else { None };
        let slots = self.extractor.extract(line, intent, subject);
        debug!(%intent, line, name = ?slots.name, "classified line");
        (intent, slots)
    }

    fn carry_subject(&self, subject: &mut Option<String>, slots: &Slots) {
        if self.variant.carries_subject() {
            if let Some(name) = &slots.name {
                *subject = Some(name.clone());
            }
        }
    }

    fn absorb(&self, mut state: ParseState, line: &str) -> ParseState {
        let (intent, slots) = self.read(line, state.subject.as_deref());
        self.carry_subject(&mut state.subject, &slots);

        match intent {
            Intent::Unavailability => {
                state
                    .conflicts
                    .push(ConflictRecord::new(slots.name.as_deref(), line));
            }
            Intent::Availability => {
                state.employees.push(Employee::from_slots(slots));
            }
            Intent::Preference => {
                let attached = self.attach_preference(&mut state, slots.name.as_deref(), line);
                if attached == 0 {
                    debug!(line, "preference has no matching employee, dropped");
                }
            }
            Intent::ShiftRequest => {
                let time = if slots.time.is_any() {
                    self.variant.default_shift_time()
                } else {
                    slots.time
                };
                for _ in 0..headcount(line) {
                    state
                        .shifts
                        .push(ShiftSlot::requested(slots.day.clone(), time.clone(), slots.role));
                }
            }
        }

        state
    }

    /// Attaches `line` as a preference. Returns how many employees took it.
    fn attach_preference(&self, state: &mut ParseState, name: Option<&str>, line: &str) -> usize {
        let target = match self.variant {
            Variant::Classic => match name {
                Some(name) => name.to_string(),
                None => {
                    return match state.employees.last_mut() {
                        Some(employee) => {
                            employee.preference = Some(line.to_string());
                            1
                        }
                        None => 0,
                    };
                }
            },
            Variant::Contextual => match name.or(state.subject.as_deref()) {
                Some(name) => name.to_string(),
                None => return 0,
            },
        };

        let mut attached = 0;
        for employee in state
            .employees
            .iter_mut()
            .filter(|e| e.name.as_deref() == Some(target.as_str()))
        {
            employee.preference = Some(line.to_string());
            attached += 1;
        }
        attached
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Corpus;
    use crate::parser::{Role, ShiftTime};
    use crate::schedule::ShiftSource;

    fn contextual() -> RosterGenerator {
        RosterGenerator::new(
            Variant::Contextual,
            IntentClassifier::from_corpus(Corpus::Compact).unwrap(),
        )
    }

    fn classic() -> RosterGenerator {
        RosterGenerator::new(
            Variant::Classic,
            IntentClassifier::from_corpus(Corpus::Compact).unwrap(),
        )
    }

    #[test]
    fn headcount_rules() {
        assert_eq!(headcount("Need a cashier"), 1);
        assert_eq!(headcount("Need two cashiers"), 2);
        assert_eq!(headcount("Requires 3 people"), 3);
        assert_eq!(headcount("Need THREE stockers"), 3);
        assert_eq!(headcount("two people on 3-11"), 3);
        assert_eq!(headcount("general help on Saturday 12-8"), 2);
    }

    #[test]
    fn shift_request_creates_one_slot_per_head() {
        let roster = contextual().generate("Need two cashiers");
        assert_eq!(roster.shifts.len(), 2);
        for shift in &roster.shifts {
            assert_eq!(shift.role, Role::Cashier);
            assert_eq!(shift.source, ShiftSource::ExplicitRequest);
            assert_eq!(shift.assigned(), None);
        }
    }

    #[test]
    fn unavailability_only_logs_a_conflict() {
        let roster = contextual().generate("Sam cannot work\nI am sick");
        assert_eq!(roster.conflicts.len(), 2);
        assert_eq!(roster.conflicts[0].as_str(), "Sam is unavailable (Sam cannot work)");
        assert_eq!(roster.conflicts[1].as_str(), "Unknown is unavailable (I am sick)");
        assert!(roster.employees.is_empty());
        assert!(roster.shifts.is_empty());
    }

    #[test]
    fn preference_attaches_to_named_employee_only() {
        let roster = contextual().generate(
            "Bob is available Monday\nErin is available Friday\nBob prefers mornings",
        );
        assert_eq!(roster.employees.len(), 2);
        assert_eq!(roster.employees[0].preference.as_deref(), Some("Bob prefers mornings"));
        assert_eq!(roster.employees[1].preference, None);
    }

    #[test]
    fn preference_follows_carried_subject() {
        let roster = contextual().generate(
            "Frank is available Monday 9-5 and Tuesday 9-5 but prefers evenings.",
        );
        assert_eq!(roster.employees.len(), 1);
        assert_eq!(
            roster.employees[0].preference.as_deref(),
            Some("Tuesday 9-5 but prefers evenings.")
        );
    }

    #[test]
    fn preference_without_target_is_dropped() {
        let roster = contextual().generate("I prefer evening shifts\nBob is available Monday");
        assert_eq!(roster.employees.len(), 1);
        assert_eq!(roster.employees[0].preference, None);
    }

    #[test]
    fn classic_preference_falls_back_to_latest_employee() {
        let roster = classic().generate(
            "Bob is available Monday\nErin is available Friday\nI prefer evening shifts",
        );
        assert_eq!(roster.employees[0].preference, None);
        assert_eq!(
            roster.employees[1].preference.as_deref(),
            Some("I prefer evening shifts")
        );
    }

    #[test]
    fn subject_fills_nameless_availability_clause() {
        let roster = contextual().generate(
            "Bob is available Tuesday 3-11 for stock and Friday 9-5 as a cashier.",
        );
        assert_eq!(roster.employees.len(), 2);
        assert_eq!(roster.employees[1].name.as_deref(), Some("Bob"));
        assert_eq!(roster.employees[1].day.as_deref(), Some("Friday"));
        assert_eq!(roster.employees[1].role, Role::Cashier);
    }

    #[test]
    fn classic_shift_defaults_to_nine_to_five() {
        let roster = classic().generate("Need two cashiers");
        assert!(roster
            .shifts
            .iter()
            .all(|s| s.time == ShiftTime::range("9-5")));
    }

    #[test]
    fn every_employee_lands_on_the_roster_once() {
        let roster = contextual().generate(
            "Bob is available Monday\nErin is available Friday\nNeed two cashiers",
        );
        for id in 0..roster.employees.len() {
            let seats = roster
                .shifts
                .iter()
                .filter(|s| s.assigned() == Some(id))
                .count();
            assert_eq!(seats, 1);
            assert!(roster.employees[id].is_assigned);
        }
    }

    #[test]
    fn analysis_reports_every_clause() {
        let analysis = contextual().analyze("Claire prefers mornings and is free on Friday 9-1");
        assert_eq!(analysis.len(), 2);
        assert_eq!(analysis[0].intent, Intent::Preference);
        assert_eq!(analysis[1].intent, Intent::Availability);
        assert_eq!(analysis[1].slots.name.as_deref(), Some("Claire"));
        assert_eq!(analysis[1].scores.len(), 4);
    }
}
