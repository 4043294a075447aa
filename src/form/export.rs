use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::error::Result;
use crate::schedule::Roster;

const HEADER: [&str; 6] = ["Day", "Time", "Role", "Employee", "Note", "Status"];

/// Writes every roster row as CSV, header first.
pub fn write_roster_csv<W: Write>(roster: &Roster, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    wtr.write_record(HEADER)?;
    for row in roster.rows() {
        wtr.write_record([
            row.day.as_str(),
            row.time.as_str(),
            row.role.as_str(),
            row.employee.as_str(),
            row.note.as_str(),
            row.status.label(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports the roster to a CSV file, replacing any existing file.
pub fn export_roster_to_csv(roster: &Roster, csv_path: &Path) -> Result<()> {
    let file = File::create(csv_path)?;
    write_roster_csv(roster, file)?;
    tracing::info!(path = %csv_path.display(), rows = roster.shifts.len(), "exported roster");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{Corpus, IntentClassifier};
    use crate::schedule::{RosterGenerator, Variant};

    fn roster(text: &str) -> Roster {
        let classifier = IntentClassifier::from_corpus(Corpus::Compact).unwrap();
        RosterGenerator::new(Variant::Contextual, classifier).generate(text)
    }

    fn to_csv(roster: &Roster) -> String {
        let mut buffer = Vec::new();
        write_roster_csv(roster, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn empty_roster_is_header_only() {
        assert_eq!(to_csv(&roster("")), "Day,Time,Role,Employee,Note,Status\n");
    }

    #[test]
    fn rows_follow_shift_order() {
        let csv = to_csv(&roster("Bob is available Monday 9-5\nNeed two cashiers"));
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "TBD,Any,Cashier,UNFILLED,Explicit Request,Unfilled");
        assert_eq!(lines[2], "TBD,Any,Cashier,UNFILLED,Explicit Request,Unfilled");
        assert_eq!(
            lines[3],
            "Monday,9-5,General,Bob,Inferred from Availability,Added (Availability)"
        );
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let csv = to_csv(&roster("Bob is available Monday\nBob prefers mornings, not evenings"));
        assert!(csv.contains("\"MATCHED PREF: Bob prefers mornings, not evenings\""));
    }
}
