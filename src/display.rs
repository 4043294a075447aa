use std::fs::File;
use std::io::Write;

use crate::error::Result;
use crate::schedule::{LineAnalysis, Roster, RosterRow};

const HEADERS: [&str; 6] = ["Day", "Time", "Role", "Employee", "Note", "Status"];

fn cells(row: &RosterRow) -> [&str; 6] {
    [
        &row.day,
        &row.time,
        &row.role,
        &row.employee,
        &row.note,
        row.status.label(),
    ]
}

/// Renders rows as a fixed-width text table.
pub fn render_table(rows: &[RosterRow]) -> String {
    let mut widths = HEADERS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(cells(row)) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |values: [&str; 6]| -> String {
        let padded: Vec<String> = values
            .iter()
            .zip(widths)
            .map(|(value, width)| format!("{:<width$}", value, width = width))
            .collect();
        padded.join(" | ").trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&format_line(HEADERS));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in rows {
        out.push_str(&format_line(cells(row)));
        out.push('\n');
    }
    out
}

/// Writes the conflicts and the roster table to a text file.
pub fn write_roster_to_file(roster: &Roster, filename: &str) -> Result<()> {
    let mut file = File::create(filename)?;

    writeln!(file, "** Conflicts **")?;
    for conflict in &roster.conflicts {
        writeln!(file, "{}", conflict)?;
    }
    writeln!(file)?;
    writeln!(file, "** Roster **")?;
    write!(file, "{}", render_table(&roster.rows()))?;

    Ok(())
}

/// Prints a roster in a readable format
pub fn print_roster(roster: &Roster) {
    println!("\n=== Conflicts Detected ===");
    if roster.conflicts.is_empty() {
        println!("  (none)");
    }
    for conflict in &roster.conflicts {
        println!("  - {}", conflict);
    }

    let unfilled = roster.unfilled().count();
    println!("\n=== Final Roster ===");
    println!(
        "Total shifts: {} ({} unfilled, {} employees)",
        roster.shifts.len(),
        unfilled,
        roster.employees.len()
    );
    println!();
    print!("{}", render_table(&roster.rows()));
}

/// Prints one line per classified clause with its confidence.
pub fn print_analysis(analysis: &[LineAnalysis]) {
    println!("\n=== Intent Detection ===");
    for entry in analysis {
        let confidence = entry
            .scores
            .iter()
            .find(|s| s.intent == entry.intent)
            .map(|s| s.probability)
            .unwrap_or(0.0);
        println!(
            "  [{:<14}] {:>5.1}%  {}",
            entry.intent.label(),
            confidence * 100.0,
            entry.line
        );
        println!(
            "      name={} day={} time={} role={}",
            entry.slots.name.as_deref().unwrap_or("-"),
            entry.slots.day.as_deref().unwrap_or("-"),
            entry.slots.time,
            entry.slots.role
        );
    }
}
