//! Exercise rep tracker: replay pose landmarks and report reps and form.

use anyhow::{Context, Result};
use clap::Parser;
use exercise_rep_tracker::{
    analyzer::{ExerciseAnalyzer, FrameAnalysis},
    config::{Config, EXAMPLE_CONFIG},
    exercises::Exercise,
    recording::{Pacing, ReplaySource},
    session::Session,
};
use log::{debug, info, warn};
use serde::Serialize;
use std::io::{self, BufReader};
use std::ops::ControlFlow;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Exercise to track (squat, pushup)
    #[arg(short, long, default_value = "squat")]
    exercise: Exercise,

    /// JSON-lines landmark recording (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Pace frames by their timestamps and drop stale ones
    #[arg(long)]
    realtime: bool,

    /// Polling interval in milliseconds for realtime replay
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Overlay canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Overlay canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Emit one JSON object per analyzed frame on stdout
    #[arg(long)]
    json: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,
}

/// Frame report with overlay positions resolved to canvas pixels
#[derive(Serialize)]
struct FrameReport<'a> {
    #[serde(flatten)]
    analysis: &'a FrameAnalysis,
    banner_px: (i32, i32),
    annotation_px: Option<(i32, i32)>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Exercise Rep Tracker ({})", args.exercise);

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if let Some(interval) = args.interval_ms {
        config.session.poll_interval_ms = interval;
    }
    if let Some(width) = args.width {
        config.session.canvas_width = width;
    }
    if let Some(height) = args.height {
        config.session.canvas_height = height;
    }

    let analyzer = ExerciseAnalyzer::from_config(args.exercise, &config).context("Invalid configuration")?;

    let (pacing, interval) = if args.realtime {
        (Pacing::Realtime, config.session.poll_interval())
    } else {
        (Pacing::EveryFrame, Duration::ZERO)
    };

    let source = match &args.input {
        Some(path) => ReplaySource::open(path, pacing).with_context(|| format!("Failed to open {path}"))?,
        None => {
            info!("Reading landmarks from stdin");
            ReplaySource::new(Box::new(BufReader::new(io::stdin())), pacing)
        }
    };

    let canvas = (config.session.canvas_width, config.session.canvas_height);
    let mut output_error = None;
    let mut session = Session::new(source, analyzer, interval);

    let summary = session.run(|analysis| {
        if args.json {
            let report = FrameReport {
                analysis,
                banner_px: analysis.overlay.banner.pixel_position(canvas.0),
                annotation_px: analysis
                    .overlay
                    .annotation
                    .map(|a| a.pixel_position(canvas.0, canvas.1)),
            };
            match serde_json::to_string(&report) {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    output_error = Some(e);
                    return ControlFlow::Break(());
                }
            }
        } else {
            let result = &analysis.result;
            if result.rep_completed {
                info!("Rep {} | {}", result.rep_count, result.phase_label);
            }
            debug!(
                "{} | {} | {}",
                result.phase_label,
                result.form.reason,
                analysis.overlay.banner.message
            );
        }
        ControlFlow::Continue(())
    })?;

    if let Some(e) = output_error {
        return Err(e).context("Failed to write frame report");
    }

    let dropped = session.source().dropped_frames();
    if dropped > 0 {
        info!("Dropped {} stale frames", dropped);
    }

    println!(
        "{}: {} reps ({} frames analyzed, {} not visible, {:.1}s)",
        args.exercise,
        summary.rep_count,
        summary.frames_analyzed,
        summary.frames_not_visible,
        summary.elapsed.as_secs_f64()
    );

    Ok(())
}
