use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = MuseumConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, MuseumConfig::default());
    assert_eq!(cfg.base_url, DEFAULT_MUSEUM_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        Timeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
    assert_eq!(cfg.max_attempts, DEFAULT_MAX_ATTEMPTS);
}

#[test]
fn overrides_are_parsed() {
    let cfg = MuseumConfig::from_lookup(lookup_from(&[
        ("MUSEUM_API_BASE_URL", "http://localhost:8080/v1/"),
        ("MUSEUM_REQUEST_TIMEOUT_SECS", "42"),
        ("MUSEUM_CONNECT_TIMEOUT_SECS", " 7 "),
        ("MUSEUM_MAX_ATTEMPTS", "3"),
    ]))
    .unwrap();
    assert_eq!(cfg.base_url, "http://localhost:8080/v1");
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 42, connect_secs: 7 });
    assert_eq!(cfg.max_attempts, 3);
}

#[test]
fn unparseable_numbers_fall_back_to_defaults() {
    let cfg = MuseumConfig::from_lookup(lookup_from(&[
        ("MUSEUM_REQUEST_TIMEOUT_SECS", "soon"),
        ("MUSEUM_MAX_ATTEMPTS", "-1"),
    ]))
    .unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.max_attempts, DEFAULT_MAX_ATTEMPTS);
}

#[test]
fn zero_attempts_is_raised_to_one() {
    let cfg = MuseumConfig::from_lookup(lookup_from(&[("MUSEUM_MAX_ATTEMPTS", "0")])).unwrap();
    assert_eq!(cfg.max_attempts, 1);
}

#[test]
fn non_http_base_url_errors() {
    let err = MuseumConfig::from_lookup(lookup_from(&[("MUSEUM_API_BASE_URL", "ftp://nope")]))
        .unwrap_err()
        .to_string();
    assert!(err.contains("MUSEUM_API_BASE_URL"));
}
