use super::*;

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn defaults_when_unset() {
    let config = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_port_and_bind_addr() {
    let config = Config::from_lookup(lookup(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn whitespace_trimmed() {
    let config = Config::from_lookup(lookup(&[("PORT", "  4000  ")])).unwrap();
    assert_eq!(config.port, 4000);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = Config::from_lookup(lookup(&[("PORT", ""), ("BIND_ADDR", "   ")])).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn invalid_port_is_rejected() {
    let err = Config::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = Config::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".into()));
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = Config::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindAddr("localhost".into()));
    assert_eq!(err.to_string(), "invalid BIND_ADDR: \"localhost\"");
}

// =============================================================================
// from_env: reads the real process env, so only checks it returns.
// =============================================================================

#[test]
fn from_env_returns_result() {
    let _ = Config::from_env();
}
