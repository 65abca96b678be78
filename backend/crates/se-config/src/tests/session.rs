use crate::Config;
use crate::tests::{EnvGuard, set_required_env, setup_config_dir};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use serial_test::serial;

// =========================================================================
// Validation Tests - Session & Rate Limit
// =========================================================================

#[test]
#[serial]
fn given_remount_delay_above_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _required = set_required_env();
    let _delay = EnvGuard::set("SE_SESSION_REMOUNT_DELAY_MS", "60000");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err = result.unwrap_err();
    assert_eq!(err.section(), Some("session"));
    assert_that!(err.to_string(), contains_substring("remount_delay_ms"));
}

#[test]
#[serial]
fn given_remount_delay_when_converted_then_duration_in_millis() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _delay = EnvGuard::set("SE_SESSION_REMOUNT_DELAY_MS", "250");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.session.remount_delay(),
        eq(Duration::from_millis(250))
    );
}

#[test]
#[serial]
fn given_rate_limit_window_zero_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _required = set_required_env();
    let _window = EnvGuard::set("SE_RATE_LIMIT_WINDOW_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
