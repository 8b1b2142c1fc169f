use std::time::Duration;

use folio::config::{Breakpoint, SiteConfig, SliderConfig, ToastConfig};
use folio::error::ConfigError;

#[test]
fn test_defaults() {
    let config = SiteConfig::default();
    assert_eq!(config.slider.track_id, "app-slider");
    assert_eq!(config.slider.card_pitch(), 324.0);
    assert_eq!(config.slider.interval(), Duration::from_millis(5000));
    assert!(config.slider.autoplay);
    assert_eq!(config.toast.enter_delay(), Duration::from_millis(100));
    assert_eq!(config.toast.display(), Duration::from_secs(5));
    assert_eq!(config.toast.exit(), Duration::from_millis(300));
    assert_eq!(config.reveal.threshold, 0.1);
    assert_eq!(config.reveal.bottom_margin_px, -50.0);
    assert_eq!(config.reveal.groups.len(), 5);
}

#[test]
fn test_slides_per_view_thresholds() {
    let config = SliderConfig::default();
    assert_eq!(config.slides_per_view(0.0), 1);
    assert_eq!(config.slides_per_view(480.0), 1);
    assert_eq!(config.slides_per_view(480.5), 2);
    assert_eq!(config.slides_per_view(768.0), 2);
    assert_eq!(config.slides_per_view(1024.0), 3);
    assert_eq!(config.slides_per_view(1920.0), 4);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config = SiteConfig::from_json_str(
        r#"{ "slider": { "autoplay_interval_ms": 3000, "track_id": "work" } }"#,
    )
    .unwrap();
    assert_eq!(config.slider.track_id, "work");
    assert_eq!(config.slider.interval(), Duration::from_secs(3));
    assert_eq!(config.slider.prev_id, "prevBtn");
    assert_eq!(config.toast, ToastConfig::default());
}

#[test]
fn test_custom_breakpoints() {
    let config = SiteConfig::from_json_str(
        r#"{ "slider": {
            "breakpoints": [ { "max_width": 600, "per_view": 1 }, { "max_width": 1200, "per_view": 2 } ],
            "wide_per_view": 3
        } }"#,
    )
    .unwrap();
    assert_eq!(
        config.slider.breakpoints,
        vec![Breakpoint::new(600, 1), Breakpoint::new(1200, 2)]
    );
    assert_eq!(config.slider.slides_per_view(1500.0), 3);
}

#[test]
fn test_descending_breakpoints_rejected() {
    let err = SiteConfig::from_json_str(
        r#"{ "slider": { "breakpoints": [ { "max_width": 800, "per_view": 2 }, { "max_width": 400, "per_view": 1 } ] } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBreakpoints(_)));
}

#[test]
fn test_zero_per_view_rejected() {
    let config = SliderConfig::default().breakpoints(vec![Breakpoint::new(480, 0)], 4);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidBreakpoints(_))
    ));
}

#[test]
fn test_zero_interval_rejected_only_with_autoplay() {
    let config = SliderConfig::default().autoplay_interval(Duration::ZERO);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue {
            field: "autoplay_interval_ms",
            ..
        })
    ));
    assert!(config.autoplay(false).validate().is_ok());
}

#[test]
fn test_malformed_json() {
    let err = SiteConfig::from_json_str("{ slider: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse config"));
}

#[test]
fn test_missing_file() {
    let err = SiteConfig::from_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = SliderConfig::new()
        .elements("track", "prev", "next", "dots")
        .slide_class("card")
        .card(200.0, 10.0)
        .autoplay(false);
    assert_eq!(config.dots_id, "dots");
    assert_eq!(config.slide_class, "card");
    assert_eq!(config.card_pitch(), 210.0);
    assert!(!config.autoplay);
}

#[test]
fn test_huge_interval_saturates() {
    let config = SliderConfig::default().autoplay_interval(Duration::MAX);
    assert_eq!(config.autoplay_interval_ms, u64::MAX);
}
