use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parser::{Role, ShiftTime, Slots};

/// Index of an employee within one roster run.
pub type EmployeeId = usize;

/// Someone who declared availability.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub name: Option<String>,
    pub day: Option<String>,
    pub time: ShiftTime,
    pub role: Role,
    pub preference: Option<String>,
    pub is_assigned: bool,
}

impl Employee {
    pub fn from_slots(slots: Slots) -> Self {
        Self {
            name: slots.name,
            day: slots.day,
            time: slots.time,
            role: slots.role,
            preference: None,
            is_assigned: false,
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

/// Why a shift slot exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftSource {
    ExplicitRequest,
    InferredFromAvailability,
}

impl ShiftSource {
    pub fn label(self) -> &'static str {
        match self {
            ShiftSource::ExplicitRequest => "Explicit Request",
            ShiftSource::InferredFromAvailability => "Inferred from Availability",
        }
    }
}

impl fmt::Display for ShiftSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One seat on the roster. The assignee can be set once and never replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftSlot {
    pub day: Option<String>,
    pub time: ShiftTime,
    pub role: Role,
    pub source: ShiftSource,
    assigned: Option<EmployeeId>,
}

impl ShiftSlot {
    /// An open slot from an explicit request.
    pub fn requested(day: Option<String>, time: ShiftTime, role: Role) -> Self {
        Self {
            day,
            time,
            role,
            source: ShiftSource::ExplicitRequest,
            assigned: None,
        }
    }

    /// A slot shaped after an employee's own availability, already theirs.
    pub fn inferred(id: EmployeeId, employee: &Employee) -> Self {
        Self {
            day: employee.day.clone(),
            time: employee.time.clone(),
            role: employee.role,
            source: ShiftSource::InferredFromAvailability,
            assigned: Some(id),
        }
    }

    pub fn assigned(&self) -> Option<EmployeeId> {
        self.assigned
    }

    /// Assigns an employee unless the slot is already taken. Returns whether
    /// the assignment happened.
    pub fn assign(&mut self, id: EmployeeId) -> bool {
        if self.assigned.is_some() {
            return false;
        }
        self.assigned = Some(id);
        true
    }

    pub fn day_label(&self) -> &str {
        self.day.as_deref().unwrap_or("TBD")
    }
}

/// "<name> is unavailable (<line>)". Append-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictRecord(String);

impl ConflictRecord {
    pub fn new(name: Option<&str>, line: &str) -> Self {
        Self(format!("{} is unavailable ({})", name.unwrap_or("Unknown"), line))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConflictRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome shown for a roster row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowStatus {
    Scheduled,
    Unfilled,
    #[serde(rename = "Added (Availability)")]
    Added,
}

impl RowStatus {
    pub fn label(self) -> &'static str {
        match self {
            RowStatus::Scheduled => "Scheduled",
            RowStatus::Unfilled => "Unfilled",
            RowStatus::Added => "Added (Availability)",
        }
    }
}

/// A roster line ready for tabular display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterRow {
    pub day: String,
    pub time: String,
    pub role: String,
    pub employee: String,
    pub note: String,
    pub status: RowStatus,
}

/// Rows plus conflict messages, as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterReport {
    pub shifts: Vec<RosterRow>,
    pub conflicts: Vec<String>,
}

/// Everything one generation run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    pub employees: Vec<Employee>,
    pub shifts: Vec<ShiftSlot>,
    pub conflicts: Vec<ConflictRecord>,
}

impl Roster {
    pub fn assignee(&self, shift: &ShiftSlot) -> Option<&Employee> {
        shift.assigned().and_then(|id| self.employees.get(id))
    }

    pub fn unfilled(&self) -> impl Iterator<Item = &ShiftSlot> {
        self.shifts.iter().filter(|s| s.assigned().is_none())
    }

    pub fn row(&self, shift: &ShiftSlot) -> RosterRow {
        let assignee = self.assignee(shift);

        let note = match assignee.and_then(|e| e.preference.as_deref()) {
            Some(preference) => format!("MATCHED PREF: {}", preference),
            None => shift.source.label().to_string(),
        };
        let status = match (assignee, shift.source) {
            (_, ShiftSource::InferredFromAvailability) => RowStatus::Added,
            (Some(_), ShiftSource::ExplicitRequest) => RowStatus::Scheduled,
            (None, ShiftSource::ExplicitRequest) => RowStatus::Unfilled,
        };

        RosterRow {
            day: shift.day_label().to_string(),
            time: shift.time.to_string(),
            role: shift.role.to_string(),
            employee: assignee
                .map(|e| e.display_name().to_string())
                .unwrap_or_else(|| "UNFILLED".to_string()),
            note,
            status,
        }
    }

    pub fn rows(&self) -> Vec<RosterRow> {
        self.shifts.iter().map(|s| self.row(s)).collect()
    }

    pub fn report(&self) -> RosterReport {
        RosterReport {
            shifts: self.rows(),
            conflicts: self.conflicts.iter().map(|c| c.to_string()).collect(),
        }
    }
}
