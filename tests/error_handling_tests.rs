//! Error handling tests for parsing, configuration and recordings

use exercise_rep_tracker::{
    analyzer::ExerciseAnalyzer,
    config::Config,
    exercises::Exercise,
    landmarks::{Landmark, LandmarkFrame, LandmarkIndex},
    recording::{Pacing, ReplaySource},
    session::LandmarkSource,
    Error,
};
use std::io::Cursor;
use std::time::Duration;

#[test]
fn test_unknown_exercise() {
    let err = "lunge".parse::<Exercise>().unwrap_err();
    assert!(matches!(err, Error::UnknownExercise(ref name) if name == "lunge"));
    assert_eq!(err.to_string(), "Unknown exercise: lunge");
}

#[test]
fn test_unknown_landmark_name() {
    assert_eq!("leftKnee".parse::<LandmarkIndex>().unwrap(), LandmarkIndex::LeftKnee);
    assert!(matches!("leftTail".parse::<LandmarkIndex>(), Err(Error::InvalidInput(_))));
}

#[test]
fn test_wrong_landmark_count() {
    let short = vec![Landmark::default(); 32];
    assert!(matches!(LandmarkFrame::from_slice(&short), Err(Error::InvalidInput(_))));

    let long = vec![Landmark::default(); 34];
    assert!(LandmarkFrame::from_slice(&long).is_err());
}

#[test]
fn test_malformed_config() {
    assert!(matches!(
        Config::from_yaml("squat: [1, 2, 3]"),
        Err(Error::ConfigError(_))
    ));
}

#[test]
fn test_missing_config_file() {
    assert!(matches!(
        Config::from_file("/nonexistent/rep-tracker.yaml"),
        Err(Error::Io(_))
    ));
}

#[test]
fn test_invalid_config_rejected_by_analyzer() {
    let mut config = Config::default();
    config.pushup.form.min_elbow_angle = 140.0;
    let err = ExerciseAnalyzer::from_config(Exercise::Pushup, &config).err().unwrap();
    assert!(err.to_string().contains("elbow band"));

    let mut config = Config::default();
    config.session.canvas_width = 0;
    assert!(ExerciseAnalyzer::from_config(Exercise::Squat, &config).is_err());

    let mut config = Config::default();
    config.squat.form.max_knee_angle = 200.0;
    assert!(ExerciseAnalyzer::from_config(Exercise::Squat, &config).is_err());
}

#[test]
fn test_missing_recording_file() {
    assert!(matches!(
        ReplaySource::open("/nonexistent/session.jsonl", Pacing::EveryFrame),
        Err(Error::Io(_))
    ));
}

#[test]
fn test_recording_error_message() {
    let mut replay = ReplaySource::new(Box::new(Cursor::new("{\"landmarks\": null}\n")), Pacing::EveryFrame);
    let err = replay.poll(Duration::ZERO).unwrap_err();
    assert!(matches!(err, Error::RecordingError { line: 1, .. }));
    assert!(err.to_string().starts_with("Recording error at line 1"));
}
