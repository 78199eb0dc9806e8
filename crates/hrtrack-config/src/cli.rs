//! Command-line argument parsing for HR-Track.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// HR-Track command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(
    name = "hrtrack",
    about = "Animate a star's evolution across the Hertzsprung-Russell diagram"
)]
pub struct CliArgs {
    /// Star mass in solar masses, in range [0.1, 300].
    #[arg(short = 'm', long)]
    pub star_mass: Option<f64>,

    /// Star metallicity relative to the Sun in dex, in range [-4, 0.5].
    #[arg(short = 'f', long, allow_negative_numbers = true)]
    pub star_metallicity: Option<f64>,

    /// Solar System scale (larger shows more of the system).
    #[arg(short = 's', long)]
    pub ss_scale: Option<f64>,

    /// Directory holding the grid, color and catalog data files.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Stop after this many frames.
    #[arg(long)]
    pub frames: Option<u64>,

    /// Interval between frames in milliseconds.
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Loop the animation instead of stopping at the end of the track.
    #[arg(long)]
    pub repeat: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(mass) = args.star_mass {
            self.star.mass = mass;
        }
        if let Some(feh) = args.star_metallicity {
            self.star.metallicity = feh;
        }
        if let Some(scale) = args.ss_scale {
            self.display.ss_scale = scale;
        }
        if let Some(ref dir) = args.data_dir {
            self.data.data_dir = dir.clone();
        }
        if let Some(frames) = args.frames {
            self.animation.frame_limit = frames;
        }
        if let Some(ms) = args.interval_ms {
            self.animation.interval_ms = ms;
        }
        if args.repeat {
            self.animation.repeat = true;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
