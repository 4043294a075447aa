//! Shift/employee compatibility and the two assignment passes.
//!
//! Each of day, role and time is compared on its own and yields an
//! [`Affinity`]. A pairing is acceptable when none of the three is a
//! mismatch.
//!
//! # Algorithm
//!
//! 1. For every shift in creation order, take the first unassigned employee
//!    (creation order) that is compatible. No backtracking, no swaps.
//! 2. Every employee still unassigned gets a slot shaped after their own
//!    availability.

use super::types::{Employee, ShiftSlot};
use super::Variant;
use crate::parser::{Role, ShiftTime};

/// Result of comparing one attribute of a shift with an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affinity {
    /// One side is unconstrained.
    Wildcard,
    /// Both sides agree (containment counts under the contextual rules).
    Exact,
    Mismatch,
}

impl Affinity {
    pub fn is_compatible(self) -> bool {
        self != Affinity::Mismatch
    }
}

/// Day, role and time affinities for one shift/employee pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub day: Affinity,
    pub role: Affinity,
    pub time: Affinity,
}

impl Verdict {
    pub fn is_match(&self) -> bool {
        self.day.is_compatible() && self.role.is_compatible() && self.time.is_compatible()
    }
}

pub fn day_affinity(variant: Variant, shift: Option<&str>, employee: Option<&str>) -> Affinity {
    match variant {
        Variant::Classic => match (shift, employee) {
            (None, _) | (_, None) => Affinity::Wildcard,
            (Some(s), Some(e)) if s == e => Affinity::Exact,
            _ => Affinity::Mismatch,
        },
        Variant::Contextual => match (shift, employee) {
            (_, None) => Affinity::Wildcard,
            // an open-dated request does not pull in dated availability
            (None, Some(_)) => Affinity::Mismatch,
            (Some(s), Some(e)) => {
                let s = s.to_lowercase();
                let e = e.to_lowercase();
                if s.contains(&e) || e.contains(&s) {
                    Affinity::Exact
                } else {
                    Affinity::Mismatch
                }
            }
        },
    }
}

pub fn role_affinity(variant: Variant, shift: Role, employee: Role) -> Affinity {
    if shift == employee {
        Affinity::Exact
    } else if shift == Role::General {
        Affinity::Wildcard
    } else if variant == Variant::Classic && employee == Role::General {
        Affinity::Wildcard
    } else {
        Affinity::Mismatch
    }
}

pub fn time_affinity(variant: Variant, shift: &ShiftTime, employee: &ShiftTime) -> Affinity {
    if variant == Variant::Classic {
        return Affinity::Wildcard;
    }
    match (shift, employee) {
        (ShiftTime::Any, _) | (_, ShiftTime::Any) => Affinity::Wildcard,
        (ShiftTime::Range(s), ShiftTime::Range(e)) if s == e => Affinity::Exact,
        _ => Affinity::Mismatch,
    }
}

pub fn evaluate(variant: Variant, shift: &ShiftSlot, employee: &Employee) -> Verdict {
    Verdict {
        day: day_affinity(variant, shift.day.as_deref(), employee.day.as_deref()),
        role: role_affinity(variant, shift.role, employee.role),
        time: time_affinity(variant, &shift.time, &employee.time),
    }
}

/// First-fit pass over open slots. Returns how many slots were filled.
pub fn match_explicit(
    variant: Variant,
    shifts: &mut [ShiftSlot],
    employees: &mut [Employee],
) -> usize {
    let mut filled = 0;

    for shift in shifts.iter_mut() {
        if shift.assigned().is_some() {
            continue;
        }
        let open: &ShiftSlot = shift;
        let candidate = employees
            .iter()
            .position(|e| !e.is_assigned && evaluate(variant, open, e).is_match());

        if let Some(id) = candidate {
            if shift.assign(id) {
                employees[id].is_assigned = true;
                filled += 1;
            }
        }
    }

    filled
}

/// Gives every still-unassigned employee a slot of their own. Returns how
/// many slots were added.
pub fn infer_from_availability(employees: &mut [Employee], shifts: &mut Vec<ShiftSlot>) -> usize {
    let mut added = 0;

    for (id, employee) in employees.iter_mut().enumerate() {
        if employee.is_assigned {
            continue;
        }
        shifts.push(ShiftSlot::inferred(id, employee));
        employee.is_assigned = true;
        added += 1;
    }

    added
}
