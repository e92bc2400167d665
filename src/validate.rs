//! Requisite evaluator
//!
//! Pure verdict computation for a course at a term position. No I/O and no
//! plan mutation: callers pass a plan snapshot and the zero-based index of
//! the term the course is (or would be) placed in.
//!
//! Three checks feed one verdict:
//! - offered: the term's trimester number appears in the course's offerings
//!   (custom courses are always offered)
//! - anti-requisite conflict: a conflicting code anywhere in the plan,
//!   same or later terms included
//! - prerequisites: every requisite entry must hold against the codes
//!   completed strictly before the term's sequence position

use crate::models::{Course, ReqLogic, Requisite};
use crate::plan::Plan;

pub const MSG_COURSE_NOT_FOUND: &str = "Course data not found.";
pub const MSG_NOT_OFFERED: &str = "Not offered in this trimester.";
pub const MSG_ANTI_REQUISITE: &str =
    "Incompatible course (anti-requisite) is also in the plan.";
pub const MSG_PREREQUISITES: &str = "Prerequisites not met in a previous trimester.";

/// Pass/fail plus human-readable failure reasons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub is_valid: bool,
    pub messages: Vec<String>,
}

impl Verdict {
    fn valid() -> Self {
        Self {
            is_valid: true,
            messages: Vec::new(),
        }
    }

    fn invalid(messages: Vec<String>) -> Self {
        Self {
            is_valid: false,
            messages,
        }
    }
}

/// Evaluate a course at a term position.
///
/// `course` is `None` when a planned code has no catalog record; that is an
/// invalid verdict, not an error. A `term_index` past the end of the plan
/// behaves as a term with no matching trimester.
pub fn validate_course(course: Option<&Course>, plan: &Plan, term_index: usize) -> Verdict {
    let course = match course {
        Some(c) => c,
        None => return Verdict::invalid(vec![MSG_COURSE_NOT_FOUND.to_string()]),
    };

    let offered = course.is_custom
        || plan
            .term_at(term_index)
            .is_some_and(|t| course.offered_in_trimester(t.trimester));
    let conflict = has_anti_requisite_conflict(course, plan);
    let prereqs_met = prerequisites_met(course, &plan.completed_before(term_index));

    let mut messages = Vec::new();
    if !offered {
        messages.push(MSG_NOT_OFFERED.to_string());
    }
    if conflict {
        messages.push(MSG_ANTI_REQUISITE.to_string());
    }
    if !prereqs_met {
        messages.push(MSG_PREREQUISITES.to_string());
    }

    if messages.is_empty() {
        Verdict::valid()
    } else {
        Verdict::invalid(messages)
    }
}

/// True if any anti-requisite code is planned anywhere under a different code.
///
/// Position is irrelevant here: a conflicting course in the same or a later
/// term still conflicts. An anti-requisite naming the course's own code is
/// ignored.
fn has_anti_requisite_conflict(course: &Course, plan: &Plan) -> bool {
    if course.anti_requisites.is_empty() {
        return false;
    }
    let planned = plan.planned_codes();
    course
        .anti_requisites
        .iter()
        .flat_map(|req| req.codes())
        .any(|code| code != &course.code && planned.contains(&code.as_str()))
}

/// Every requisite entry must independently hold (AND across entries).
///
/// `units`-kind entries always hold: the engine does not compute cumulative
/// credit totals for gating, matching the source behavior.
fn prerequisites_met(course: &Course, completed_before: &[&str]) -> bool {
    course.prerequisites.iter().all(|req| match req {
        Requisite::Courses { logic, codes, .. } => match logic {
            ReqLogic::Or => codes.iter().any(|c| completed_before.contains(&c.as_str())),
            ReqLogic::And => codes.iter().all(|c| completed_before.contains(&c.as_str())),
        },
        Requisite::Units { .. } => true,
    })
}
