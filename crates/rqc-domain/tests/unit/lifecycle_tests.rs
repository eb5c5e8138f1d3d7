//! Unit tests for the request lifecycle state machine

use rqc_domain::value_objects::{RequestLifecycle, RequestPhase};

#[test]
fn test_new_lifecycle_starts_idle() {
    let lifecycle = RequestLifecycle::new();

    assert_eq!(lifecycle.phase(), RequestPhase::Idle);
    assert_eq!(lifecycle.history(), &[RequestPhase::Idle]);
    assert!(!lifecycle.dispatched());
}

#[test]
fn test_successful_round_trip_history() {
    let mut lifecycle = RequestLifecycle::new();
    lifecycle.begin();
    lifecycle.succeed();
    lifecycle.settle();

    assert_eq!(
        lifecycle.history(),
        &[
            RequestPhase::Idle,
            RequestPhase::InFlight,
            RequestPhase::Succeeded,
            RequestPhase::Idle,
        ]
    );
    assert_eq!(lifecycle.phase(), RequestPhase::Idle);
    assert!(lifecycle.succeeded());
    assert!(!lifecycle.failed());
}

#[test]
fn test_failed_round_trip_history() {
    let mut lifecycle = RequestLifecycle::new();
    lifecycle.begin();
    lifecycle.fail();
    lifecycle.settle();

    assert_eq!(
        lifecycle.history(),
        &[
            RequestPhase::Idle,
            RequestPhase::InFlight,
            RequestPhase::Failed,
            RequestPhase::Idle,
        ]
    );
    assert!(lifecycle.failed());
    assert!(!lifecycle.succeeded());
}

#[test]
fn test_dispatched_reflects_in_flight_entry() {
    let mut lifecycle = RequestLifecycle::new();
    assert!(!lifecycle.dispatched());

    lifecycle.begin();
    assert!(lifecycle.dispatched());
    assert_eq!(lifecycle.phase(), RequestPhase::InFlight);
}

#[test]
fn test_default_matches_new() {
    assert_eq!(RequestLifecycle::default(), RequestLifecycle::new());
}
