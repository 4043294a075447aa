pub mod export;
pub mod submission;

pub use export::{export_roster_to_csv, write_roster_csv};
pub use submission::{validate_request, RosterRequest};
