use super::*;
use crate::foundation::core::TargetSize;
use serde_json::json;

#[test]
fn minimal_settings_use_defaults() {
    let s: Settings = serde_json::from_value(json!({ "outputFolder": "out" })).unwrap();
    let cfg = s.to_conversion_config().unwrap();
    assert_eq!(cfg.output_root, PathBuf::from("out"));
    assert_eq!(
        cfg.target_sizes,
        vec![TargetSize {
            width: 128,
            height: 32
        }]
    );
    assert_eq!(cfg.background, [0, 0, 0, 255]);
    assert_eq!(cfg.animation_colors, 256);
    assert_eq!(cfg.animation_scale_mode, ScaleMode::Fit);
    assert_eq!(s.logging, LoggingConfig::default());
}

#[test]
fn full_settings_resolve() {
    let s: Settings = serde_json::from_value(json!({
        "outputFolder": "/tmp/dmd",
        "outputSizes": "128x32, junk, 256x64",
        "backgroundColor": "#102030",
        "gifColors": 32,
        "gifScaleMode": "fill",
        "logging": { "level": "debug", "json": true }
    }))
    .unwrap();
    let cfg = s.to_conversion_config().unwrap();
    assert_eq!(cfg.target_sizes.len(), 2);
    assert_eq!(cfg.background, [0x10, 0x20, 0x30, 255]);
    assert_eq!(cfg.animation_colors, 32);
    assert_eq!(cfg.animation_scale_mode, ScaleMode::Fill);
    assert!(s.logging.json);
    assert_eq!(s.logging.level, "debug");
}

#[test]
fn sizes_accept_array_form() {
    let s: Settings = serde_json::from_value(json!({
        "outputFolder": "out",
        "outputSizes": ["128x32", "64x16,oops"]
    }))
    .unwrap();
    let cfg = s.to_conversion_config().unwrap();
    assert_eq!(cfg.target_sizes.len(), 2);
}

#[test]
fn palette_is_clamped_and_zero_rejected() {
    let mut s: Settings = serde_json::from_value(json!({ "outputFolder": "out" })).unwrap();

    s.gif_colors = 1000;
    assert_eq!(s.to_conversion_config().unwrap().animation_colors, 256);

    s.gif_colors = 1;
    assert_eq!(s.to_conversion_config().unwrap().animation_colors, 1);

    s.gif_colors = 0;
    assert!(matches!(
        s.to_conversion_config(),
        Err(DmdError::Config(_))
    ));
}

#[test]
fn bad_scale_mode_or_color_fails_to_parse() {
    assert!(
        serde_json::from_value::<Settings>(json!({
            "outputFolder": "out",
            "gifScaleMode": "stretch"
        }))
        .is_err()
    );
    assert!(
        serde_json::from_value::<Settings>(json!({
            "outputFolder": "out",
            "backgroundColor": "#zz0000"
        }))
        .is_err()
    );
}

#[test]
fn from_path_reports_missing_file() {
    let err = Settings::from_path(Path::new("definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, DmdError::Io { .. }));
}

#[test]
fn translucent_background_is_made_opaque() {
    for (color, expected) in [
        (json!("transparent"), [0, 0, 0, 255]),
        (json!("none"), [0, 0, 0, 255]),
        (json!("#11223380"), [0x11, 0x22, 0x33, 255]),
        (json!([9, 8, 7, 0]), [9, 8, 7, 255]),
    ] {
        let s: Settings = serde_json::from_value(json!({
            "outputFolder": "out",
            "backgroundColor": color
        }))
        .unwrap();
        assert_eq!(s.to_conversion_config().unwrap().background, expected);
    }
}
