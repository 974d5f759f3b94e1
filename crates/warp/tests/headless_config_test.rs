//! # Headless Config Integration Test
//!
//! Loads configs from disk the way `warp_headless` does and plays them.

use std::path::PathBuf;

use warp::{EffectConfig, HeadlessConfig, HeadlessRunner, Phase, WarpError};

fn write_config(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("warp_{}_{name}.toml", std::process::id()));
    std::fs::write(&path, text).unwrap();
    path
}

/// Test: a config file drives density and seed of a full run.
#[test]
fn test_config_file_round_trip() {
    let path = write_config(
        "dense",
        r#"
        density = 2.0
        seed = 1234
        full_field_random_stars = 300

        [palette]
        background = [0, 0, 0, 255]
        "#,
    );

    let config = EffectConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.stroke_width(), 4.0);
    assert_eq!(config.full_field_random_stars, 300);

    let headless = HeadlessConfig {
        cruise_ms: 400,
        ..HeadlessConfig::default()
    };
    let first = HeadlessRunner::new(config.clone(), headless.clone())
        .unwrap()
        .run();
    let second = HeadlessRunner::new(config, headless).unwrap().run();

    assert!(first.finished);
    assert_eq!(first.phases, second.phases);
    assert_eq!(first.spawned, second.spawned);
    assert_eq!(first.phases.last().map(|r| r.phase), Some(Phase::Finishing));
}

/// Test: a bad config file is reported, not played.
#[test]
fn test_invalid_config_file() {
    let path = write_config("bad", "density = -2.0");
    let err = EffectConfig::from_file(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(err, WarpError::InvalidConfig(_)));
    assert!(err.to_string().contains("density"));
}
