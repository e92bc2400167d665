//! Plan scaffolder
//!
//! Derives the default empty plan for a program: enough terms for the total
//! credit requirement at a standard full-time load, following the T1/T2
//! cadence. Trimester 3 is never auto-scheduled; users add it manually.

use chrono::Datelike;

use crate::models::Program;
use crate::plan::{Plan, Term};

/// Credit points per course assumed by the scaffolder
const CREDIT_POINTS_PER_COURSE: u32 = 10;
/// Courses per term at a standard full-time load
const COURSES_PER_TERM: u32 = 4;

/// Build the default empty plan for a program starting at `start_year`.
///
/// Term count is `ceil(credit_points / 10 / 4)`. Terms alternate trimester
/// 1 and 2, advancing the year after trimester 2. No program means an empty
/// plan.
pub fn scaffold_plan(program: Option<&Program>, start_year: i32) -> Plan {
    let program = match program {
        Some(p) => p,
        None => return Plan::new(),
    };

    let per_term = CREDIT_POINTS_PER_COURSE * COURSES_PER_TERM;
    let terms_needed = program.credit_points.div_ceil(per_term);

    let mut terms = Vec::with_capacity(terms_needed as usize);
    let mut year = start_year;
    let mut trimester = 1u8;
    for _ in 0..terms_needed {
        terms.push(Term::new(year, trimester));
        if trimester == 1 {
            trimester = 2;
        } else {
            trimester = 1;
            year += 1;
        }
    }
    Plan::from_terms(terms)
}

/// `scaffold_plan` starting at the current calendar year
pub fn scaffold_plan_now(program: Option<&Program>) -> Plan {
    scaffold_plan(program, chrono::Local::now().year())
}
