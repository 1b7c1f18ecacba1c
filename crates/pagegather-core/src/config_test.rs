use super::*;

#[test]
fn default_config_is_valid() {
    assert!(CollectorConfig::default().validate().is_ok());
}

#[test]
fn zero_timeout_is_rejected() {
    let config = CollectorConfig {
        request_timeout_secs: 0,
        ..CollectorConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(
        matches!(err, ConfigError::InvalidConfig(ref reason) if reason.contains("request_timeout_secs")),
        "expected InvalidConfig about request_timeout_secs, got: {err:?}"
    );
}

#[test]
fn empty_user_agent_is_rejected() {
    let config = CollectorConfig {
        user_agent: "   ".to_owned(),
        ..CollectorConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(
        matches!(err, ConfigError::InvalidConfig(ref reason) if reason.contains("user_agent")),
        "expected InvalidConfig about user_agent, got: {err:?}"
    );
}

#[test]
fn retries_may_be_disabled() {
    let config = CollectorConfig {
        max_retries: 0,
        retry_backoff_base_secs: 0,
        inter_request_delay_ms: 0,
        ..CollectorConfig::default()
    };
    assert!(config.validate().is_ok());
}
