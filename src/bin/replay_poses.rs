use anyhow::{Context, Result};
use clap::Parser;
use hand_gestures::calibration::CalibrationStore;
use hand_gestures::presets;
use hand_gestures::recording::RecordedHandProvider;
use hand_gestures::tracker::{HandTracker, TrackingChange, UpdateType};
use hand_gestures::Handedness;
use log::*;
use simplelog::{Config, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Replay recorded hand frames and report detected gestures",
    long_about = None
)]
struct Args {
    /// Recording with one JSON frame per line
    recording: PathBuf,

    /// Calibration JSON keyed by finger name
    #[arg(short, long)]
    calibration: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(level, Config::default(), TerminalMode::Mixed)
        .context("Failed to initialize logger")?;

    let provider = RecordedHandProvider::open(&args.recording)
        .with_context(|| format!("Failed to read recording {}", args.recording.display()))?;
    info!("Replaying {} frames", provider.remaining());

    let mut tracker = match &args.calibration {
        Some(path) => {
            let calibration = CalibrationStore::load_json(path)
                .with_context(|| format!("Failed to read calibration {}", path.display()))?;
            HandTracker::with_calibration(provider, calibration)
        }
        None => HandTracker::new(provider),
    };

    let shapes = presets::all_shapes();
    let poses = presets::all_poses();
    let mut frame = 0;
    while !tracker.provider().is_exhausted() {
        let outcome = tracker.try_update_hands(UpdateType::Dynamic);
        frame += 1;
        for change in &outcome.tracking_changes {
            match change {
                TrackingChange::Acquired(handedness) => {
                    debug!("frame {}: {} hand acquired", frame, handedness.as_str())
                }
                TrackingChange::Lost(handedness) => {
                    debug!("frame {}: {} hand lost", frame, handedness.as_str())
                }
            }
        }

        let environment = tracker.provider().environment();
        for handedness in &[Handedness::Left, Handedness::Right] {
            if !tracker.hand(*handedness).is_tracked() {
                continue;
            }
            for shape in &shapes {
                if tracker.check_hand_shape(shape, *handedness) {
                    info!("frame {}: {} hand {}", frame, handedness.as_str(), shape.name());
                }
            }
            for (name, pose) in &poses {
                if tracker.check_hand_pose(pose, *handedness, &environment) {
                    info!("frame {}: {} hand {}", frame, handedness.as_str(), name);
                }
            }
            if let Some(pinch) = tracker.common_gestures(*handedness).try_get_pinch_value() {
                trace!("frame {}: {} pinch value {:.2}", frame, handedness.as_str(), pinch);
            }
        }
    }
    info!("Replay finished after {} frames", frame);
    Ok(())
}
