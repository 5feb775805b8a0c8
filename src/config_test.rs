use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_upstream_url, None);
    assert_eq!(
        cfg.timeouts,
        UpstreamTimeouts {
            request_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
            connect_secs: DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS
        }
    );
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("API_UPSTREAM_URL", "https://erp.example.in/"),
        ("UPSTREAM_TIMEOUT_SECS", "42"),
        ("UPSTREAM_CONNECT_TIMEOUT_SECS", " 7 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_upstream_url.as_deref(), Some("https://erp.example.in"));
    assert_eq!(cfg.timeouts, UpstreamTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn blank_upstream_url_disables_forwarding() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("API_UPSTREAM_URL", "   ")])).unwrap();
    assert_eq!(cfg.api_upstream_url, None);
}

#[test]
fn invalid_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
}

#[test]
fn invalid_timeout_is_rejected() {
    let err = HostConfig::from_lookup(lookup_from(&[("UPSTREAM_TIMEOUT_SECS", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "UPSTREAM_TIMEOUT_SECS", .. }));
}
