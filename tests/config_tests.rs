//! Configuration file tests

use exercise_rep_tracker::config::{Config, EXAMPLE_CONFIG};
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_config_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");

    let mut config = Config::default();
    config.squat.phases.standing = 165.0;
    config.pushup.form.min_back_angle = 155.0;
    config.session.poll_interval_ms = 50;
    config.to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded, config);
    loaded.validate().unwrap();
    assert_eq!(loaded.session.poll_interval(), Duration::from_millis(50));
}

#[test]
fn test_example_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("example.yaml");
    std::fs::write(&path, EXAMPLE_CONFIG).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.visibility.threshold, 0.15);
    assert_eq!(config.squat.phases.bottom, 75.0);
    assert_eq!(config.pushup.form.max_elbow_angle, 130.0);
    assert_eq!(config.session.canvas_width, 1280);
}

#[test]
fn test_empty_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.yaml");
    std::fs::write(&path, "{}\n").unwrap();

    assert_eq!(Config::from_file(&path).unwrap(), Config::default());
}

#[test]
fn test_partial_pushup_section() {
    let config = Config::from_yaml("pushup:\n  form:\n    min_back_angle: 160.0\n").unwrap();
    assert_eq!(config.pushup.form.min_back_angle, 160.0);
    assert_eq!(config.pushup.form.min_elbow_angle, 75.0);
    assert_eq!(config.pushup.phases.top, 160.0);
    assert_eq!(config.squat, Config::default().squat);
}
