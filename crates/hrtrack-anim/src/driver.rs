//! Drives an [`AnimationState`] from a [`Ticker`] and a command channel,
//! forwarding every frame to an [`OutputSink`].
//!
//! All state mutation happens on the thread calling [`Driver::run`] (or
//! [`Driver::step`]); other threads only send [`InputCommand`]s.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};
use tracing::{debug, info};

use crate::command::InputCommand;
use crate::draw::OutputSink;
use crate::state::AnimationState;
use crate::ticker::{DEFAULT_INTERVAL, Ticker};

/// Playback options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverOptions {
    /// Time between frames.
    pub interval: Duration,
    /// Stop after this many rendered frames; 0 means no limit.
    pub frame_limit: usize,
    /// Loop back to the first sample after the last one instead of stopping.
    pub repeat: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            frame_limit: 0,
            repeat: false,
        }
    }
}

/// Result of one [`Driver::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No frame was due, or the animation is paused.
    Idle,
    /// The frame with this track index was sent to the sink.
    Rendered(usize),
    /// Playback is over; further steps do nothing.
    Finished,
}

pub struct Driver<'a, S: OutputSink> {
    state: AnimationState<'a>,
    sink: S,
    commands: Receiver<InputCommand>,
    ticker: Ticker,
    options: DriverOptions,
    frames_rendered: usize,
    started: bool,
}

impl<'a, S: OutputSink> Driver<'a, S> {
    pub fn new(
        state: AnimationState<'a>,
        sink: S,
        commands: Receiver<InputCommand>,
        options: DriverOptions,
    ) -> Self {
        Self {
            state,
            sink,
            commands,
            ticker: Ticker::new(options.interval),
            options,
            frames_rendered: 0,
            started: false,
        }
    }

    pub fn state(&self) -> &AnimationState<'a> {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Frames sent to the sink so far, including the initial one.
    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }

    /// Declare the scene to the sink and render frame 0. Does nothing if
    /// already started.
    pub fn start(&mut self, background: &[(f64, f64)], main_sequence: &[(f64, f64)]) {
        if self.started {
            return;
        }
        self.started = true;
        let elements = self.state.scene_elements(background, main_sequence);
        info!(
            elements = elements.len(),
            frames = self.state.frame_count(),
            "Starting animation"
        );
        self.sink.setup(&elements);
        self.sink.apply(&self.state.frame_batch());
        self.frames_rendered = 1;
    }

    /// Whether playback has reached its end.
    pub fn is_finished(&self) -> bool {
        if !self.started {
            return false;
        }
        if self.options.frame_limit > 0 && self.frames_rendered >= self.options.frame_limit {
            return true;
        }
        !self.options.repeat && self.frames_rendered >= self.state.frame_count()
    }

    /// Apply pending commands, then advance by `elapsed` and render a frame
    /// if one is due.
    pub fn step(&mut self, elapsed: Duration) -> StepOutcome {
        self.drain_commands();
        let due = self.ticker.advance(elapsed);
        self.render_if_due(due)
    }

    /// Play until finished or `stop` is set. Returns the number of frames
    /// rendered.
    pub fn run(
        &mut self,
        background: &[(f64, f64)],
        main_sequence: &[(f64, f64)],
        stop: &AtomicBool,
    ) -> usize {
        self.start(background, main_sequence);
        // Measure from the initial frame rather than from construction.
        self.ticker = Ticker::new(self.options.interval);

        while !stop.load(Ordering::Relaxed) && !self.is_finished() {
            // Sleep until the next tick, waking early for input.
            match self.commands.recv_timeout(self.ticker.time_until_next()) {
                Ok(command) => self.apply_command(command),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    std::thread::sleep(self.ticker.time_until_next());
                }
            }
            self.drain_commands();
            let due = self.ticker.poll();
            self.render_if_due(due);
        }

        info!(frames = self.frames_rendered, "Animation stopped");
        self.frames_rendered
    }

    fn drain_commands(&mut self) {
        while let Ok(command) = self.commands.try_recv() {
            self.apply_command(command);
        }
    }

    fn apply_command(&mut self, command: InputCommand) {
        debug!(%command, "Input command");
        self.state.apply(command);
    }

    fn render_if_due(&mut self, due: bool) -> StepOutcome {
        if self.is_finished() {
            return StepOutcome::Finished;
        }
        if !self.started || !due {
            return StepOutcome::Idle;
        }
        match self.state.on_tick() {
            Some(batch) => {
                self.sink.apply(&batch);
                self.frames_rendered += 1;
                StepOutcome::Rendered(batch.frame)
            }
            None => StepOutcome::Idle,
        }
    }
}
