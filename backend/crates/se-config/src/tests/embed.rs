use crate::Config;
use crate::tests::{EnvGuard, set_required_env, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use serial_test::serial;

// =========================================================================
// Validation Tests - Embed
// =========================================================================

#[test]
#[serial]
fn given_no_resource_ref_when_validate_then_error_mentions_resource_ref() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _required = set_required_env();
    let _resource = EnvGuard::set("SE_EMBED_RESOURCE_REF", "");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("resource_ref"));
}

#[test]
#[serial]
fn given_no_dashboard_id_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _required = set_required_env();
    let _dashboard = EnvGuard::set("SE_EMBED_DASHBOARD_ID", "");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("dashboard_id"));
}

#[test]
#[serial]
fn given_non_http_engine_url_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _required = set_required_env();
    let _engine = EnvGuard::set("SE_EMBED_ENGINE_URL", "ftp://engine");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_engine_url_with_trailing_slash_when_dashboard_url_then_single_slash() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _required = set_required_env();
    let _engine = EnvGuard::set("SE_EMBED_ENGINE_URL", "http://localhost:8088/");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.embed.dashboard_url().as_str(),
        eq("http://localhost:8088/dashboard/12/embedded")
    );
}
