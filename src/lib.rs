//! Staffing roster generation from free text.
//!
//! Lines such as "Bob is available Monday" or "We need two cashiers Friday"
//! are classified by intent, mined for name/day/time/role, and fed to a
//! greedy first-fit matcher that fills requested shifts and then gives every
//! remaining available employee a shift of their own.
//!
//! # Modules
//!
//! - **`classifier`**: naive Bayes intent classifier and its training corpora
//! - **`parser`**: line splitting and slot extraction
//! - **`schedule`**: roster data model, matching rules and the generator
//! - **`config`**: TOML settings
//! - **`display`**, **`form`**, **`web`**: text, CSV and HTTP front ends

pub mod classifier;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod parser;
pub mod schedule;
pub mod web;

pub use classifier::{Corpus, Intent, IntentClassifier};
pub use config::Config;
pub use error::{Result, RosterError};
pub use schedule::{Roster, RosterGenerator, RosterReport, RosterRow, Variant};

/// Sample constraints used by `--demo` and the web form.
pub const DEFAULT_SCENARIO: &str = "Alice can only work Monday 9-5 as a cashier and Wednesday 1-9 on the floor.
Bob is available Tuesday 3-11 for stock and Friday 9-5 as a cashier.
Claire prefers mornings and is free on Friday 9-1 as a supervisor.
Dan cannot work on Tuesday because of a doctor’s appointment.
Erin is available all day Saturday for any role.
Frank is available Monday 9-5 and Tuesday 9-5 but prefers evenings.
We need one cashier on Monday 9-5.
We need two people in stock on Tuesday 3-11.
We need a supervisor on Friday 9-1.
We need a cashier on Friday 9-5.
We need one more person for general help on Saturday 12-8.
Sam has an exam on Friday and cannot work that day.";
