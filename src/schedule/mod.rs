pub mod generator;
pub mod matching;
pub mod types;
pub mod variant;

pub use generator::{headcount, IntentScore, LineAnalysis, RosterGenerator};
pub use matching::{Affinity, Verdict};
pub use types::{
    ConflictRecord, Employee, EmployeeId, Roster, RosterReport, RosterRow, RowStatus, ShiftSlot,
    ShiftSource,
};
pub use variant::Variant;
