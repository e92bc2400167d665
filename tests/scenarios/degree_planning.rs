//! Scenario: a student builds a first-year plan.
//!
//! Journey:
//! 1. Pick the Bachelor of IT - six empty terms appear
//! 2. Place the intro course in term 1 - valid
//! 3. Place its dependent course in the SAME term - invalid
//! 4. Move the dependent course one term later - valid
//! 5. Plan an anti-requisite pair - conflict both ways

use crate::common::*;

#[test]
fn scenario_first_year_planning_journey() {
    let mut session = fixture_session();

    // Step 1: six terms, alternating T1/T2 from 2026
    assert_eq!(session.plan.len(), 6);
    let first = session.plan.term_at(0).unwrap();
    assert_eq!((first.year, first.trimester), (2026, 1));

    // Step 2: intro course in term 1 is clean
    let t0 = session.plan.term_at(0).unwrap().id();
    session.plan.place_course("1004ICT", t0);
    let verdict = session.validate("1004ICT", 0);
    assert!(verdict.is_valid);
    assert!(verdict.messages.is_empty());

    // Step 3: dependent course in the same term fails - the prerequisite
    // must be strictly before, not alongside
    session.plan.place_course("2002ICT", t0);
    let verdict = session.validate("2002ICT", 0);
    assert!(!verdict.is_valid);
    assert_eq!(
        verdict.messages,
        ["Prerequisites not met in a previous trimester."]
    );

    // Step 4: moving it to term 2 resolves the failure
    let t1 = session.plan.term_at(1).unwrap().id();
    session.plan.place_course("2002ICT", t1);
    assert!(session.validate("2002ICT", 1).is_valid);
    // and the move kept the course in exactly one term
    assert_eq!(session.plan.planned_codes(), ["1004ICT", "2002ICT"]);

    // Step 5: the anti-requisite of 2002ICT conflicts from any term
    let t2 = session.plan.term_at(2).unwrap().id();
    session.plan.place_course("3005ICT", t2);
    let verdict = session.validate("3005ICT", 2);
    assert!(!verdict.is_valid);
    assert_eq!(
        verdict.messages,
        ["Incompatible course (anti-requisite) is also in the plan."]
    );

    // removing the conflicting course clears the verdict
    session.plan.remove_course("2002ICT", t1);
    assert!(session.validate("3005ICT", 2).is_valid);
}

#[test]
fn scenario_or_prerequisite_either_path_works() {
    let mut session = fixture_session();
    let t0 = session.plan.term_at(0).unwrap().id();
    let t1 = session.plan.term_at(1).unwrap().id();

    // 2004ICT needs 1004ICT OR 1007ICT beforehand
    session.plan.place_course("1007ICT", t0);
    session.plan.place_course("2004ICT", t1);
    assert!(session.validate("2004ICT", 1).is_valid);

    // swap to the other alternative - still fine
    session.plan.remove_course("1007ICT", t0);
    session.plan.place_course("1004ICT", t0);
    assert!(session.validate("2004ICT", 1).is_valid);

    // neither completed - fails
    session.plan.remove_course("1004ICT", t0);
    assert!(!session.validate("2004ICT", 1).is_valid);
}

#[test]
fn scenario_offering_terms_gate_placement() {
    let mut session = fixture_session();

    // 1004ICT only runs trimester 1; term index 1 is trimester 2
    let t1 = session.plan.term_at(1).unwrap().id();
    session.plan.place_course("1004ICT", t1);
    let verdict = session.validate("1004ICT", 1);
    assert!(!verdict.is_valid);
    assert_eq!(verdict.messages, ["Not offered in this trimester."]);

    // a custom course never fails the offering check
    session
        .add_custom_course("XWIL", "Work Integrated Learning", 10, "")
        .unwrap();
    let t1_id = session.plan.term_at(1).unwrap().id();
    session.plan.place_course("XWIL", t1_id);
    assert!(session.validate("XWIL", 1).is_valid);
}

#[test]
fn scenario_units_requisite_displays_but_never_blocks() {
    let mut session = fixture_session();
    // capstone demands 160 CP, but the engine does not gate on credit
    // totals - an empty transcript still validates
    let t0 = session.plan.term_at(0).unwrap().id();
    session.plan.place_course("3007ICT", t0);
    assert!(session.validate("3007ICT", 0).is_valid);
}

#[test]
fn scenario_manual_term_edits_do_not_reorder_time() {
    let mut session = fixture_session();
    let t0 = session.plan.term_at(0).unwrap().id();
    let t1 = session.plan.term_at(1).unwrap().id();

    session.plan.place_course("1004ICT", t0);
    session.plan.place_course("2002ICT", t1);
    assert!(session.validate("2002ICT", 1).is_valid);

    // push term 1's year past term 2's - sequence position still rules,
    // so the prerequisite stays satisfied
    session
        .plan
        .set_term_period(t0, gradplan::PeriodField::Year, 2030);
    assert!(session.validate("2002ICT", 1).is_valid);
}

#[test]
fn scenario_removing_a_term_returns_courses_to_the_pool() {
    let mut session = fixture_session();
    let t0 = session.plan.term_at(0).unwrap().id();
    session.plan.place_course("1004ICT", t0);
    assert_eq!(session.plan.planned_credit_points(session.catalog()), 10);

    session.plan.remove_term(t0);
    assert_eq!(session.plan.len(), 5);
    assert!(session.plan.planned_codes().is_empty());

    let unplanned = gradplan::pool(
        gradplan::PoolCategory::Core,
        session.catalog(),
        session.program(),
        None,
        &session.plan,
        &gradplan::ElectiveFilter::default(),
    );
    assert!(unplanned.iter().any(|c| c.code == "1004ICT"));
}
