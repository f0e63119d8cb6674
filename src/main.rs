//! Hand gesture control application: reads landmark frames and drives the
//! volume, the backlight and the X11 pointer.

use anyhow::{Context, Result};
use clap::Parser;
use hand_gesture_control::{
    app::{Effectors, GestureApp, StopReason},
    audio::PulseAudioVolume,
    backlight::SysfsBacklight,
    capabilities::{BrightnessSink, FrameSource, KeySource, LogSink, NoKeys, PointerSink, VolumeSink},
    config::Config,
    cursor_control::{X11Keyboard, X11Pointer},
    stream::LandmarkStream,
};
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Landmark stream to read, `-` for standard input
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Pointer smoothing factor (greater than 1)
    #[arg(short, long)]
    smoothing: Option<f64>,

    /// Pinch distance in pixels below which a click fires
    #[arg(long)]
    click_threshold: Option<f64>,

    /// Camera border in pixels excluded from pointer mapping
    #[arg(long)]
    frame_reduction: Option<u32>,

    /// Stop after this many frames
    #[arg(long)]
    max_frames: Option<u64>,

    /// Log effector calls instead of performing them
    #[arg(long)]
    dry_run: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    /// Apply command line overrides on top of the loaded configuration
    fn apply_to(&self, config: &mut Config) {
        if let Some(factor) = self.smoothing {
            config.cursor.filter = format!("damped:{factor}");
        }
        if let Some(threshold) = self.click_threshold {
            config.cursor.click_threshold = threshold;
        }
        if let Some(reduction) = self.frame_reduction {
            config.camera.frame_reduction = reduction;
        }
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Hand Gesture Control");

    // Load configuration if provided
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path);
            Config::from_file(path).with_context(|| format!("Failed to load config file {path}"))?
        }
        None => Config::default(),
    };
    args.apply_to(&mut config);

    // Pointer first: the X11 screen size replaces the configured one
    let pointer: Box<dyn PointerSink> = if args.dry_run {
        Box::new(LogSink)
    } else {
        match X11Pointer::new() {
            Ok(pointer) => {
                let (width, height) = pointer.get_screen_size();
                config.screen.width = u32::from(width);
                config.screen.height = u32::from(height);
                Box::new(pointer)
            }
            Err(e) => {
                warn!("Pointer control unavailable ({}), logging pointer actions instead", e);
                Box::new(LogSink)
            }
        }
    };

    let volume: Box<dyn VolumeSink> = if args.dry_run {
        Box::new(LogSink)
    } else {
        Box::new(PulseAudioVolume::new(&config.effectors.pulse_sink))
    };

    let brightness: Box<dyn BrightnessSink> = if args.dry_run {
        Box::new(LogSink)
    } else {
        match SysfsBacklight::from_system(config.effectors.backlight_device.as_deref()) {
            Ok(backlight) => Box::new(backlight),
            Err(e) => {
                warn!("Brightness control unavailable ({}), logging brightness actions instead", e);
                Box::new(LogSink)
            }
        }
    };

    let keys: Box<dyn KeySource> =
        match X11Keyboard::new(&config.controls.toggle_key, &config.controls.quit_key) {
            Ok(keyboard) => Box::new(keyboard),
            Err(e) => {
                warn!("Keyboard polling unavailable ({}), toggle and quit keys disabled", e);
                Box::new(NoKeys)
            }
        };

    let frames: Box<dyn FrameSource> = if args.input == "-" {
        info!("Reading landmarks from standard input");
        Box::new(LandmarkStream::stdin())
    } else {
        info!("Reading landmarks from: {}", args.input);
        Box::new(
            LandmarkStream::from_path(&args.input)
                .with_context(|| format!("Failed to open landmark stream {}", args.input))?,
        )
    };

    let effectors = Effectors {
        volume,
        brightness,
        pointer,
    };

    // Create and run application
    let mut app = GestureApp::new(&config, frames, keys, effectors)?.with_max_frames(args.max_frames);
    let stats = app.run()?;

    if stats.stop_reason == StopReason::AcquisitionFailure {
        anyhow::bail!("Landmark stream failed after {} frames", stats.frames);
    }

    Ok(())
}
