mod common;

use common::{create_test_user, memory_storage};

use mt_store::{CURRENT_USER_SLOT, KIOSK_USER_SLOT, SessionRepository, USERS_SLOT};

use googletest::prelude::*;

#[test]
fn given_no_session_when_current_then_none() {
    let repo = SessionRepository::new(memory_storage(), memory_storage());

    assert_that!(repo.current().unwrap(), none());
}

#[test]
fn given_user_set_when_current_then_returns_snapshot() {
    // Given
    let repo = SessionRepository::new(memory_storage(), memory_storage());
    let user = create_test_user("MT-AAAAAA", "a@example.com");

    // When
    repo.set(&user).unwrap();

    // Then
    assert_that!(repo.current().unwrap(), some(eq(&user)));
}

#[test]
fn given_corrupt_session_slot_when_current_then_treated_as_signed_out() {
    // Given
    let local = memory_storage();
    local.write(CURRENT_USER_SLOT, "{\"fullName\":").unwrap();
    let repo = SessionRepository::new(local, memory_storage());

    // When
    let current = repo.current().unwrap();

    // Then
    assert_that!(current, none());
}

#[test]
fn given_active_session_when_cleared_then_current_user_and_kiosk_user_removed() {
    // Given
    let local = memory_storage();
    let session = memory_storage();
    session.write(KIOSK_USER_SLOT, "{\"kiosk\":1}").unwrap();
    let repo = SessionRepository::new(local.clone(), session.clone());
    repo.set(&create_test_user("MT-AAAAAA", "a@example.com"))
        .unwrap();

    // When
    repo.clear().unwrap();

    // Then
    assert_that!(repo.current().unwrap(), none());
    assert_that!(local.read(CURRENT_USER_SLOT).unwrap(), none());
    assert_that!(session.read(KIOSK_USER_SLOT).unwrap(), none());
}

#[test]
fn given_users_slot_when_session_cleared_then_users_untouched() {
    // Given: Session and users share the same local storage
    let local = memory_storage();
    local.write(USERS_SLOT, "[]").unwrap();
    let repo = SessionRepository::new(local.clone(), memory_storage());
    repo.set(&create_test_user("MT-AAAAAA", "a@example.com"))
        .unwrap();

    // When
    repo.clear().unwrap();

    // Then
    assert_that!(local.read(USERS_SLOT).unwrap(), some(eq("[]")));
}

#[test]
fn given_no_session_when_cleared_then_ok() {
    let repo = SessionRepository::new(memory_storage(), memory_storage());

    assert_that!(repo.clear(), ok(anything()));
}
