use super::*;

#[test]
fn default_matches_constants() {
    let cfg = SiteConfig::default();
    assert!((cfg.menu_breakpoint_px - 640.0).abs() < f64::EPSILON);
    assert_eq!(cfg.resize_debounce_ms, 250);
    assert_eq!(cfg.entrance_delay_ms, 100);
    assert_eq!(cfg.entrance_cleanup_ms, 700);
    assert_eq!(cfg.banner_lifetime_ms, 5000);
    assert_eq!(cfg.submit, SubmitMode::Simulated { latency_ms: 2000 });
    assert_eq!(cfg.level_filter(), log::LevelFilter::Info);
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
}

#[test]
fn from_json_overrides_selected_fields() {
    let cfg = SiteConfig::from_json(r#"{"banner_lifetime_ms": 50, "log_level": "debug"}"#).unwrap();
    assert_eq!(cfg.banner_lifetime_ms, 50);
    assert_eq!(cfg.resize_debounce_ms, 250);
    assert_eq!(cfg.level_filter(), log::LevelFilter::Debug);
}

#[test]
fn from_json_parses_endpoint_mode() {
    let cfg = SiteConfig::from_json(r#"{"submit": {"mode": "endpoint", "url": "/api/submissions"}}"#).unwrap();
    assert_eq!(cfg.submit, SubmitMode::Endpoint { url: "/api/submissions".into() });
}

#[test]
fn from_json_simulated_mode_defaults_latency() {
    let cfg = SiteConfig::from_json(r#"{"submit": {"mode": "simulated"}}"#).unwrap();
    assert_eq!(cfg.submit, SubmitMode::Simulated { latency_ms: 2000 });
}

#[test]
fn from_json_rejects_malformed_json() {
    assert!(matches!(SiteConfig::from_json("{"), Err(SiteError::ConfigParse(_))));
}

#[test]
fn from_json_rejects_non_positive_breakpoint() {
    let err = SiteConfig::from_json(r#"{"menu_breakpoint_px": 0}"#).unwrap_err();
    assert!(matches!(err, SiteError::InvalidConfig(_)));
}

#[test]
fn from_json_rejects_blank_endpoint() {
    let err = SiteConfig::from_json(r#"{"submit": {"mode": "endpoint", "url": " "}}"#).unwrap_err();
    assert!(err.to_string().contains("endpoint"));
}

#[test]
fn from_json_rejects_unknown_log_level() {
    let err = SiteConfig::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
    assert!(err.to_string().contains("loud"));
}
