//! Property tests for plan model invariants.

use std::collections::HashSet;

use proptest::prelude::*;

use gradplan::{PeriodField, Plan};

/// A randomized plan mutation.
#[derive(Debug, Clone)]
enum Op {
    AddTerm,
    RemoveTerm(usize),
    Place(String, usize),
    Remove(String, usize),
    SetYear(usize, i32),
    SetTrimester(usize, i32),
}

fn op() -> impl Strategy<Value = Op> {
    let code = || proptest::string::string_regex("[1-3]00[0-9]ICT").unwrap();
    prop_oneof![
        Just(Op::AddTerm),
        (0..8usize).prop_map(Op::RemoveTerm),
        (code(), 0..8usize).prop_map(|(c, i)| Op::Place(c, i)),
        (code(), 0..8usize).prop_map(|(c, i)| Op::Remove(c, i)),
        (0..8usize, 2000..2100i32).prop_map(|(i, y)| Op::SetYear(i, y)),
        (0..8usize, -5..10i32).prop_map(|(i, t)| Op::SetTrimester(i, t)),
    ]
}

fn apply(plan: &mut Plan, op: Op) {
    // positional ops resolve to whatever term currently sits there; out of
    // range indices exercise the missing-target no-op path
    let id_at = |plan: &Plan, i: usize| plan.term_at(i).map(|t| t.id());
    match op {
        Op::AddTerm => {
            plan.add_term(2026);
        }
        Op::RemoveTerm(i) => {
            if let Some(id) = id_at(plan, i) {
                plan.remove_term(id);
            }
        }
        Op::Place(code, i) => {
            if let Some(id) = id_at(plan, i) {
                plan.place_course(&code, id);
            }
        }
        Op::Remove(code, i) => {
            if let Some(id) = id_at(plan, i) {
                plan.remove_course(&code, id);
            }
        }
        Op::SetYear(i, year) => {
            if let Some(id) = id_at(plan, i) {
                plan.set_term_period(id, PeriodField::Year, year);
            }
        }
        Op::SetTrimester(i, tri) => {
            if let Some(id) = id_at(plan, i) {
                plan.set_term_period(id, PeriodField::Trimester, tri);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after any mutation sequence, no course code appears in
    /// more than one term and every term id is unique.
    #[test]
    fn property_plan_invariants_hold(ops in proptest::collection::vec(op(), 0..40)) {
        let mut plan = Plan::new();
        for op in ops {
            apply(&mut plan, op);

            let codes = plan.planned_codes();
            let unique: HashSet<_> = codes.iter().collect();
            prop_assert_eq!(codes.len(), unique.len(), "course planned twice");

            let ids: HashSet<_> = plan.terms().iter().map(|t| t.id()).collect();
            prop_assert_eq!(ids.len(), plan.len(), "duplicate term id");

            for term in plan.terms() {
                prop_assert!((1..=3).contains(&term.trimester), "trimester out of range");
            }
        }
    }

    /// PROPERTY: each term's course list stays sorted and duplicate-free.
    #[test]
    fn property_term_courses_stay_sorted(ops in proptest::collection::vec(op(), 0..40)) {
        let mut plan = Plan::new();
        for op in ops {
            apply(&mut plan, op);
            for term in plan.terms() {
                let mut sorted = term.courses().to_vec();
                sorted.sort();
                sorted.dedup();
                prop_assert_eq!(term.courses(), sorted.as_slice());
            }
        }
    }
}
