use shift_roster::schedule::{RowStatus, ShiftSource};
use shift_roster::{Config, Roster, RosterGenerator, Variant, DEFAULT_SCENARIO};

const CLASSIC_SCENARIO: &str = "Bob is free all day Saturday.
Sam cannot make it Monday because he has a class.
We need two cashiers for the Friday 9-5 shift.
Sam prefers working mornings.
Alice is available for the restocking shift on Wednesday.
I can work Sunday.";

fn default_roster() -> Roster {
    Config::default()
        .generator()
        .expect("default configuration builds a generator")
        .generate(DEFAULT_SCENARIO)
}

fn classic_generator() -> RosterGenerator {
    let config = Config::from_toml_str("[scheduler]\nvariant = \"classic\"")
        .expect("classic configuration parses");
    let generator = config.generator().expect("classic configuration builds a generator");
    assert_eq!(generator.variant(), Variant::Classic);
    generator
}

#[test]
fn conflicts_come_from_unavailability_lines() {
    let roster = default_roster();
    let conflicts: Vec<&str> = roster.conflicts.iter().map(|c| c.as_str()).collect();

    assert_eq!(
        conflicts,
        vec![
            "Dan is unavailable (Dan cannot work on Tuesday because of a doctor’s appointment.)",
            "Sam is unavailable (Sam has an exam on Friday)",
            "Unknown is unavailable (cannot work that day.)",
        ]
    );
}

#[test]
fn employees_are_created_per_availability_clause() {
    let roster = default_roster();
    let names: Vec<&str> = roster.employees.iter().map(|e| e.display_name()).collect();

    assert_eq!(names, vec!["Alice", "Alice", "Bob", "Bob", "Claire", "Erin", "Frank"]);
    assert_eq!(roster.employees[1].day.as_deref(), Some("Wednesday"));
    assert_eq!(roster.employees[4].day.as_deref(), Some("Friday"));
    assert_eq!(
        roster.employees[6].preference.as_deref(),
        Some("Tuesday 9-5 but prefers evenings.")
    );
    // "Claire prefers mornings" arrives before any Claire availability
    assert_eq!(roster.employees[4].preference, None);
}

#[test]
fn monday_cashier_goes_to_alice_before_inference() {
    let roster = default_roster();
    let first = &roster.shifts[0];

    assert_eq!(first.source, ShiftSource::ExplicitRequest);
    assert_eq!(first.assigned(), Some(0));
}

#[test]
fn roster_rows_match_expected_table() {
    let rows = default_roster().rows();
    let table: Vec<(&str, &str, &str, &str, RowStatus)> = rows
        .iter()
        .map(|r| {
            (
                r.day.as_str(),
                r.time.as_str(),
                r.role.as_str(),
                r.employee.as_str(),
                r.status,
            )
        })
        .collect();

    assert_eq!(
        table,
        vec![
            ("Monday", "9-5", "Cashier", "Alice", RowStatus::Scheduled),
            ("Tuesday", "3-11", "Stock", "Bob", RowStatus::Scheduled),
            ("Tuesday", "3-11", "Stock", "UNFILLED", RowStatus::Unfilled),
            ("Tuesday", "3-11", "Stock", "UNFILLED", RowStatus::Unfilled),
            ("Friday", "9-1", "Supervisor", "Claire", RowStatus::Scheduled),
            ("Friday", "9-5", "Cashier", "Bob", RowStatus::Scheduled),
            ("Saturday", "12-8", "General", "Erin", RowStatus::Scheduled),
            ("Saturday", "12-8", "General", "UNFILLED", RowStatus::Unfilled),
            ("Wednesday", "1-9", "General", "Alice", RowStatus::Added),
            ("Monday", "9-5", "General", "Frank", RowStatus::Added),
        ]
    );
    assert_eq!(rows[9].note, "MATCHED PREF: Tuesday 9-5 but prefers evenings.");
    assert_eq!(rows[1].note, "Explicit Request");
}

#[test]
fn every_employee_is_seated_exactly_once() {
    let roster = default_roster();

    for id in 0..roster.employees.len() {
        let seats = roster
            .shifts
            .iter()
            .filter(|s| s.assigned() == Some(id))
            .count();
        assert_eq!(seats, 1, "employee {} seated {} times", id, seats);
    }
    assert_eq!(roster.unfilled().count(), 3);
}

#[test]
fn classic_requires_three_people_opens_three_requests() {
    let roster = classic_generator().generate("Requires 3 people");

    assert_eq!(roster.shifts.len(), 3);
    assert!(roster.employees.is_empty());
    for shift in &roster.shifts {
        assert_eq!(shift.source, ShiftSource::ExplicitRequest);
        assert_eq!(shift.assigned(), None);
    }
}

#[test]
fn classic_scenario_rows() {
    let roster = classic_generator().generate(CLASSIC_SCENARIO);
    let conflicts: Vec<&str> = roster.conflicts.iter().map(|c| c.as_str()).collect();
    assert_eq!(
        conflicts,
        vec!["Sam is unavailable (Sam cannot make it Monday because he has a class.)"]
    );

    let rows = roster.rows();
    let table: Vec<(&str, &str, &str, RowStatus)> = rows
        .iter()
        .map(|r| (r.day.as_str(), r.role.as_str(), r.employee.as_str(), r.status))
        .collect();
    assert_eq!(
        table,
        vec![
            ("Friday", "Cashier", "UNFILLED", RowStatus::Unfilled),
            ("Friday", "Cashier", "UNFILLED", RowStatus::Unfilled),
            ("Saturday", "General", "Bob", RowStatus::Added),
            ("Wednesday", "Stock", "Alice", RowStatus::Added),
            ("Sunday", "General", "Unknown", RowStatus::Added),
        ]
    );
    assert_eq!(rows[0].time, "9-5");
    // no Sam availability, so the preference has nowhere to go
    assert!(rows.iter().all(|r| !r.note.starts_with("MATCHED PREF")));
}
