use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = VisualizerConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.pixels_per_unit, 50.0);
    assert_eq!(cfg.canvas_padding, 200);
    assert_eq!(cfg.steps.degrees, 1.0);
    assert_eq!(cfg.tolerances.hit, 0.2);
    assert_eq!(cfg.tolerances.snap, 0.1);
    assert_eq!(cfg.palette.axis0, Rgba8::rgb(239, 68, 68));
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = VisualizerConfig::from_json_str(
        r#"{ "pixels_per_unit": 20.0, "steps": { "degrees": 3.0 } }"#,
    )
    .unwrap();
    assert_eq!(cfg.pixels_per_unit, 20.0);
    assert_eq!(cfg.steps.degrees, 3.0);
    assert_eq!(cfg.steps.scale, StepSizes::default().scale);
    assert_eq!(cfg.palette, Palette::default());
}

#[test]
fn invalid_values_are_rejected() {
    let err = VisualizerConfig::from_json_str(r#"{ "pixels_per_unit": 0.0 }"#).unwrap_err();
    assert!(err.to_string().contains("validation error:"));

    let err = VisualizerConfig::from_json_str(r#"{ "style": { "arrow": -1.0 } }"#).unwrap_err();
    assert!(err.to_string().contains("style.arrow"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = VisualizerConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, LintransError::Serde(_)));
}

#[test]
fn round_trips_through_json() {
    let cfg = VisualizerConfig::default();
    let s = serde_json::to_string(&cfg).unwrap();
    assert_eq!(VisualizerConfig::from_json_str(&s).unwrap(), cfg);
}
