use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

const BELOW_MIN_ATTEMPTS: u32 = crate::MIN_MAX_TRAIL_ID_ATTEMPTS - 1;
const ABOVE_MAX_ATTEMPTS: u32 = crate::MAX_MAX_TRAIL_ID_ATTEMPTS + 1;
const BELOW_MIN_NAME_LENGTH: usize = crate::MIN_MIN_NAME_LENGTH - 1;
const ABOVE_MAX_NAME_LENGTH: usize = crate::MAX_MIN_NAME_LENGTH + 1;

// =========================================================================
// Validation Tests - Identity
// =========================================================================

#[test]
#[serial]
fn given_zero_trail_id_attempts_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _attempts = EnvGuard::set("MT_IDENTITY_MAX_ATTEMPTS", &BELOW_MIN_ATTEMPTS.to_string());

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_too_many_trail_id_attempts_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _attempts = EnvGuard::set("MT_IDENTITY_MAX_ATTEMPTS", &ABOVE_MAX_ATTEMPTS.to_string());

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

// =========================================================================
// Validation Tests - Registration
// =========================================================================

#[test]
#[serial]
fn given_min_name_length_out_of_range_when_validate_then_error() {
    for length in [BELOW_MIN_NAME_LENGTH, ABOVE_MAX_NAME_LENGTH] {
        // Given
        let _temp = setup_config_dir();
        let _length = EnvGuard::set("MT_REGISTRATION_MIN_NAME_LENGTH", &length.to_string());

        // When
        let config = Config::load().unwrap();
        let result = config.validate();

        // Then
        assert_that!(result, err(anything()));
    }
}

// =========================================================================
// Validation Tests - Storage & Logging
// =========================================================================

#[test]
#[serial]
fn given_storage_dir_escaping_config_dir_when_validate_then_error() {
    for dir in ["../outside", "/var/lib/trail", ""] {
        // Given
        let _temp = setup_config_dir();
        let _dir = EnvGuard::set("MT_STORAGE_DIR", dir);

        // When
        let config = Config::load().unwrap();
        let result = config.validate();

        // Then
        assert_that!(result, err(anything()));
    }
}

#[test]
#[serial]
fn given_log_file_with_path_separator_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("MT_LOG_FILE", "../trail.log");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_plain_log_file_name_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("MT_LOG_FILE", "trail.log");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}
