// Host-side tests for the motion-permission state machine.

use petal_core::*;

#[test]
fn starts_idle_with_trigger_enabled() {
    let gate = PermissionGate::new();
    assert_eq!(gate.status(), PermissionStatus::NotRequested);
    assert!(gate.trigger_enabled());
    assert!(!gate.is_streaming());
    assert_eq!(gate.status_text(), STATUS_IDLE);
}

#[test]
fn grant_disables_trigger_for_good() {
    let mut gate = PermissionGate::new();
    assert!(gate.begin());
    assert_eq!(gate.status(), PermissionStatus::Pending);
    assert!(!gate.trigger_enabled());
    assert_eq!(gate.resolve(PermissionOutcome::Granted), PermissionStatus::Granted);
    assert!(gate.is_streaming());
    assert!(!gate.trigger_enabled());
    assert_eq!(gate.status_text(), STATUS_GRANTED);
    assert!(!gate.begin());
    assert_eq!(gate.status(), PermissionStatus::Granted);
}

#[test]
fn denial_and_failure_allow_a_fresh_trigger() {
    let mut gate = PermissionGate::new();
    gate.begin();
    gate.resolve(PermissionOutcome::Denied);
    assert_eq!(gate.status_text(), STATUS_DENIED);
    assert!(gate.trigger_enabled());
    assert!(!gate.is_streaming());

    assert!(gate.begin());
    gate.resolve(PermissionOutcome::Failed("NotAllowedError".into()));
    assert_eq!(gate.status(), PermissionStatus::Failed);
    assert_eq!(gate.status_text(), STATUS_FAILED);
    assert!(gate.trigger_enabled());

    assert!(gate.begin());
    gate.resolve(PermissionOutcome::Granted);
    assert!(gate.is_streaming());
}

#[test]
fn missing_api_degrades_quietly() {
    let mut gate = PermissionGate::new();
    gate.begin();
    assert_eq!(gate.resolve(PermissionOutcome::Unavailable), PermissionStatus::Unsupported);
    assert!(!gate.is_streaming());
    assert!(!gate.trigger_enabled());
    assert_eq!(gate.status_text(), STATUS_IDLE);
}

#[test]
fn resolve_without_request_is_ignored() {
    let mut gate = PermissionGate::new();
    assert_eq!(gate.resolve(PermissionOutcome::Granted), PermissionStatus::NotRequested);
    gate.begin();
    assert!(!gate.begin(), "second trigger while pending");
    gate.resolve(PermissionOutcome::Denied);
    assert_eq!(gate.resolve(PermissionOutcome::Granted), PermissionStatus::Denied);
}

#[test]
fn outcomes_map_onto_sensor_errors() {
    assert_eq!(PermissionOutcome::Granted.into_result(), Ok(()));
    assert_eq!(
        PermissionOutcome::Denied.into_result(),
        Err(SensorError::PermissionDenied)
    );
    assert_eq!(
        PermissionOutcome::Unavailable.into_result(),
        Err(SensorError::Unavailable)
    );
    let err = PermissionOutcome::Failed("boom".into()).into_result().unwrap_err();
    assert_eq!(err.to_string(), "motion permission request failed: boom");
}

#[test]
fn settled_labels_follow_the_page_language() {
    let mut gate = PermissionGate::new();
    gate.begin();
    gate.resolve(PermissionOutcome::Denied);
    assert_eq!(gate.status_text(), "許可されませんでした");
    gate.begin();
    gate.resolve(PermissionOutcome::Failed("timeout".into()));
    assert_eq!(gate.status_text(), "失敗しました");
    gate.begin();
    gate.resolve(PermissionOutcome::Granted);
    assert_eq!(gate.status_text(), "許可OK");
    assert!(gate.is_streaming());
}
