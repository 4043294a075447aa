use serde::{Deserialize, Serialize};

use super::Intent;
use Intent::{Availability, Preference, ShiftRequest, Unavailability};

/// Built-in labelled training sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corpus {
    /// Two sentences per intent.
    Compact,
    /// 85 sentences, skewed towards UNAVAILABILITY.
    Extended,
}

impl Corpus {
    pub fn examples(self) -> &'static [(&'static str, Intent)] {
        match self {
            Corpus::Compact => COMPACT,
            Corpus::Extended => EXTENDED,
        }
    }
}

const COMPACT: &[(&str, Intent)] = &[
    ("I can work Saturday", Availability),
    ("Bob is available Monday", Availability),
    ("Sam cannot work", Unavailability),
    ("I am sick", Unavailability),
    ("Need two cashiers", ShiftRequest),
    ("We need stockers", ShiftRequest),
    ("Sam prefers mornings", Preference),
    ("I prefer evening shifts", Preference),
];

const EXTENDED: &[(&str, Intent)] = &[
    // availability
    ("I can work Saturday", Availability),
    ("Bob is available Monday", Availability),
    ("I am free all day Tuesday", Availability),
    ("Put me down for the Wednesday shift", Availability),
    ("I can do the morning shift", Availability),
    ("Sign me up for Friday", Availability),
    ("I'm good to work this weekend", Availability),
    ("Available for the night shift", Availability),
    ("Ready to work on Thursday", Availability),
    ("I have open availability this week", Availability),
    ("I can take the cashier role", Availability),
    ("Sam is free to work", Availability),
    ("Schedule me for Monday", Availability),
    ("I'm around on Sunday", Availability),
    ("I can come in", Availability),
    ("Free to help out", Availability),
    ("I will be there", Availability),
    ("I can cover that shift", Availability),
    ("Alice is available", Availability),
    ("I have time on Friday", Availability),
    // unavailability
    ("Sam cannot work", Unavailability),
    ("I am unable to work due to exam", Unavailability),
    ("I am sick", Unavailability),
    ("not available", Unavailability),
    ("I have a doctor appointment", Unavailability),
    ("Bob is out of town", Unavailability),
    ("I can't make it", Unavailability),
    ("Do not schedule me for Monday", Unavailability),
    ("I'm busy on Saturday", Unavailability),
    ("Taking a personal day", Unavailability),
    ("I have class so I can't work", Unavailability),
    ("My car broke down, cannot come", Unavailability),
    ("Sam is away", Unavailability),
    ("Please remove me from the schedule", Unavailability),
    ("I won't be able to work", Unavailability),
    ("Off duty today", Unavailability),
    ("Unavailable for the weekend", Unavailability),
    ("I have a family emergency", Unavailability),
    ("Taking the day off", Unavailability),
    ("Not free Tuesday", Unavailability),
    ("I have a dentist appointment", Unavailability),
    ("Going on vacation", Unavailability),
    ("Stuck in traffic, can't work", Unavailability),
    ("Feeling unwell", Unavailability),
    ("No availability", Unavailability),
    // shift requests
    ("Need two cashiers", ShiftRequest),
    ("Shift open for server", ShiftRequest),
    ("We need stockers Friday", ShiftRequest),
    ("Looking for a manager", ShiftRequest),
    ("Who can work Monday?", ShiftRequest),
    ("Need coverage for the morning", ShiftRequest),
    ("One server needed", ShiftRequest),
    ("Requires 3 people for inventory", ShiftRequest),
    ("Opening available for 9-5", ShiftRequest),
    ("We are short staffed on Saturday", ShiftRequest),
    ("Need help on the floor", ShiftRequest),
    ("Looking for someone to cover", ShiftRequest),
    ("Vacant shift Tuesday", ShiftRequest),
    ("Need a bartender", ShiftRequest),
    ("Searching for staff", ShiftRequest),
    ("Shift available 3-11", ShiftRequest),
    ("We need more hands on deck", ShiftRequest),
    ("Cashier role open", ShiftRequest),
    ("Manager needed urgently", ShiftRequest),
    ("Any takers for Friday?", ShiftRequest),
    // preferences
    ("Sam prefers mornings", Preference),
    ("I prefer evening shifts", Preference),
    ("Bob likes night shift", Preference),
    ("I would rather work weekends", Preference),
    ("Please give me the early shift", Preference),
    ("I hate working Mondays", Preference),
    ("I love the closing shift", Preference),
    ("My preference is Tuesday", Preference),
    ("Ideally I want 9-5", Preference),
    ("I'd prefer not to close", Preference),
    ("Sam likes to work alone", Preference),
    ("Prefer the stock room", Preference),
    ("I favor the afternoon slot", Preference),
    ("Better if I work mornings", Preference),
    ("I prefer to be a cashier", Preference),
    ("Please assign me evenings", Preference),
    ("I really like Sundays", Preference),
    ("Preferred shift is 3-11", Preference),
    ("I'd rather do restocking", Preference),
    ("My choice is Friday", Preference),
];
