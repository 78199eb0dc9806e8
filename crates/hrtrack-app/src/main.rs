//! HR-Track: animate a star's evolution across the Hertzsprung-Russell
//! diagram.
//!
//! Headless front end. Each frame's readouts go to the log; commands are
//! typed one per line on stdin (`,` and `.` rescale the solar system, Enter
//! or space pauses, `q` quits).
//!
//! Run with: `cargo run -p hrtrack-app -- -m 1.0 -f 0.0 -s 1.0`

mod error;
mod input;
mod platform;
mod session;
mod sink;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use hrtrack_config::{CliArgs, Config};
use tracing::{debug, error, info};

use crate::error::AppError;
use crate::platform::PlatformDirs;
use crate::session::{DataSources, Session};
use crate::sink::LogSink;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let dirs = match PlatformDirs::resolve(args.config.as_deref()) {
        Ok(dirs) => dirs,
        Err(e) => {
            eprintln!("Failed to resolve platform directories: {e}");
            return ExitCode::FAILURE;
        }
    };

    let (mut config, origin) = dirs.load_config();
    config.apply_cli_overrides(&args);

    hrtrack_log::init_logging(
        Some(&dirs.log_dir),
        config.debug.file_logging || cfg!(debug_assertions),
        Some(&config),
    );
    origin.report();

    match run(config) {
        Ok(frames) => {
            info!(frames, "Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> Result<usize, AppError> {
    let session = Session::new(config)?;
    info!(
        "HR-Track: mass={} metallicity={} ss_scale={}",
        session.config.star.mass, session.config.star.metallicity, session.config.display.ss_scale
    );

    let data = DataSources::load(&session.data_dir, &session.config.data.color_calibration)?;

    let (tx, rx) = crossbeam_channel::unbounded();
    // Not joined: the reader blocks on stdin until the process exits.
    let _reader = input::spawn_stdin_reader(
        session.bindings.clone(),
        tx,
        Arc::clone(&session.stop),
    )?;

    let mut sink = LogSink::default();
    let frames = session::play(&session.config, &data, &mut sink, rx, &session.stop)?;
    debug!(logged = sink.frames(), "Output sink closed");
    Ok(frames)
}
