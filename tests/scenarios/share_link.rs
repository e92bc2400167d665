//! Scenario: sharing a plan with another student.
//!
//! The sender builds a plan (including a custom course), exports a token,
//! and the receiver - with a pristine catalog - reconstructs the same plan
//! with the custom course merged in.

use crate::common::*;
use gradplan::{PlanError, Session};

#[test]
fn scenario_share_a_plan_with_a_friend() {
    let mut sender = fixture_session();
    sender.select_major(Some("Networks"));

    let t0 = sender.plan.term_at(0).unwrap().id();
    let t1 = sender.plan.term_at(1).unwrap().id();
    sender.plan.place_course("1004ICT", t0);
    sender.plan.place_course("2002ICT", t1);
    sender
        .add_custom_course("XPROJ", "Industry Project", 20, "external placement")
        .unwrap();

    let token = sender.share().unwrap();

    // the receiver starts from the stock catalog - no custom course
    let mut receiver = Session::new(fixture_catalog());
    assert!(receiver.catalog().course("XPROJ").is_none());
    receiver.load_share(&token).unwrap();

    assert_eq!(receiver.program().unwrap().code, 1001);
    assert_eq!(receiver.major().unwrap().name, "Networks");
    assert_eq!(receiver.plan.len(), sender.plan.len());
    for (sent, got) in sender.plan.terms().iter().zip(receiver.plan.terms()) {
        assert_eq!(sent.year, got.year);
        assert_eq!(sent.trimester, got.trimester);
        assert_eq!(sent.courses(), got.courses());
    }

    // the embedded custom course arrived and validates anywhere
    let custom = receiver.catalog().course("XPROJ").unwrap();
    assert!(custom.is_custom);
    assert_eq!(custom.credit_points, 20);
    assert!(receiver.validate("XPROJ", 0).is_valid);
}

#[test]
fn scenario_share_requires_a_program() {
    let session = Session::new(fixture_catalog());
    assert!(matches!(session.share(), Err(PlanError::NothingToShare)));
}

#[test]
fn scenario_corrupt_link_is_reported_and_state_survives() {
    let mut session = fixture_session();
    let t0 = session.plan.term_at(0).unwrap().id();
    session.plan.place_course("1004ICT", t0);
    let before = session.plan.clone();

    for bad in ["", "%%%", "bm90IGpzb24", "bbbbbbbbbbbbbbbbbbbbbbbb"] {
        let err = session.load_share(bad).unwrap_err();
        assert!(
            matches!(err, PlanError::CorruptShareToken { .. }),
            "token {bad:?} should be reported as corrupt, got: {err}"
        );
        assert_eq!(session.plan, before, "session must survive token {bad:?}");
    }
}

#[test]
fn scenario_share_does_not_duplicate_existing_customs() {
    let mut sender = fixture_session();
    sender
        .add_custom_course("XPROJ", "Industry Project", 20, "")
        .unwrap();
    let token = sender.share().unwrap();

    // the receiver already authored a course under the same code; their
    // definition wins
    let mut receiver = fixture_session();
    receiver
        .add_custom_course("XPROJ", "My Own Project", 40, "")
        .unwrap();
    receiver.load_share(&token).unwrap();

    assert_eq!(receiver.catalog().course("XPROJ").unwrap().name, "My Own Project");
}
