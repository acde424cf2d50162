use crate::FlowError;

use mt_core::CoreError;
use mt_store::StoreError;

#[test]
fn test_visitor_errors_are_recoverable() {
    assert!(FlowError::validation("Please enter your full name.").is_recoverable());
    assert!(FlowError::duplicate_email("a@b.co").is_recoverable());
    assert!(FlowError::not_found("MT-AAAAAA").is_recoverable());
    assert!(FlowError::no_active_session().is_recoverable());
}

#[test]
fn test_system_errors_are_not_recoverable() {
    assert!(!FlowError::identity_exhausted(16).is_recoverable());
    assert!(!FlowError::from(StoreError::quota_exceeded("memoryTrailUsers", 10, 5)).is_recoverable());
}

#[test]
fn test_user_messages() {
    assert_eq!(
        FlowError::validation("Please enter a valid email address.").user_message(),
        "Please enter a valid email address."
    );
    assert_eq!(
        FlowError::duplicate_email("a@b.co").user_message(),
        "This email is already registered."
    );
    assert_eq!(
        FlowError::not_found("MT-AAAAAA").user_message(),
        "Trail ID not found. Please check and try again."
    );
    assert_eq!(
        FlowError::from(CoreError::invalid_kiosk("kiosk9")).user_message(),
        "Unknown kiosk."
    );
}

#[test]
fn test_store_error_message_uses_recovery_hint() {
    let store = StoreError::quota_exceeded("memoryTrailUsers", 10, 5);
    let hint = store.recovery_hint();

    assert_eq!(FlowError::from(store).user_message(), hint);
}

#[test]
fn test_error_display_includes_detail() {
    let error = FlowError::not_found("MT-ZZZZZZ");
    assert!(error.to_string().contains("MT-ZZZZZZ"));
}
