//! Line-based keyboard input for the headless animation.
//!
//! A helper thread reads stdin one line at a time, maps the line through
//! [`KeyBindings`] and forwards the command to the driver. It never touches
//! animation state. `q` or `quit` raises the stop flag; end of input only
//! closes the channel, so piped or detached runs play to the end.

use std::io::BufRead;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

use crossbeam_channel::Sender;
use hrtrack_anim::{InputCommand, KeyBindings};
use tracing::{debug, warn};

use crate::error::AppError;

/// What a line of input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    Command(InputCommand),
    Quit,
    Unbound,
}

/// Interpret one line of input.
pub fn parse_line(bindings: &KeyBindings, line: &str) -> LineAction {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    if matches!(trimmed.trim(), "q" | "quit") {
        return LineAction::Quit;
    }
    // An empty line is a bare Enter, treated like a click.
    let key = if trimmed.is_empty() { "click" } else { trimmed };
    match bindings.resolve(key) {
        Some(command) => LineAction::Command(command),
        None => LineAction::Unbound,
    }
}

/// Forward commands from `reader` until quit, end of input, or the driver
/// hangs up. Only an explicit quit raises `stop`.
pub fn forward_lines<R: BufRead>(
    reader: R,
    bindings: &KeyBindings,
    commands: &Sender<InputCommand>,
    stop: &AtomicBool,
) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to read input: {e}");
                return;
            }
        };
        match parse_line(bindings, &line) {
            LineAction::Command(command) => {
                if commands.send(command).is_err() {
                    // Driver finished; nothing left to control.
                    return;
                }
            }
            LineAction::Quit => {
                stop.store(true, Ordering::Relaxed);
                return;
            }
            LineAction::Unbound => debug!(input = %line.trim(), "No binding for input"),
        }
    }
    debug!("End of input; playback continues without keyboard control");
}

/// Spawn the stdin reader thread.
pub fn spawn_stdin_reader(
    bindings: KeyBindings,
    commands: Sender<InputCommand>,
    stop: Arc<AtomicBool>,
) -> Result<JoinHandle<()>, AppError> {
    std::thread::Builder::new()
        .name("stdin-input".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            forward_lines(stdin.lock(), &bindings, &commands, &stop);
        })
        .map_err(AppError::InputThread)
}
