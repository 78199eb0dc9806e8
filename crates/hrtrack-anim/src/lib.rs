//! Frame-by-frame animation of a star moving along its evolutionary track.
//!
//! [`AnimationState`] is the state machine: it owns the resolved track and its
//! habitable-zone cache, advances on ticks while running, and turns each frame
//! into an immutable [`FrameBatch`] of draw updates. Rendering is somebody
//! else's job; anything implementing [`OutputSink`] can consume the batches.

pub mod command;
pub mod draw;
pub mod driver;
mod error;
pub mod scene;
pub mod state;
pub mod text;
pub mod ticker;

pub use glam::DVec2;

pub use command::{BindingError, InputCommand, KeyBindings, ScaleDirection};
pub use draw::{
    Align, DrawUpdate, DrawableId, FrameBatch, OutputSink, RecordingSink, SceneElement, Shape,
    Style,
};
pub use driver::{Driver, DriverOptions, StepOutcome};
pub use error::AnimError;
pub use scene::{LARGE_REFERENCE_AU, OrbitRing, SOLAR_SYSTEM_ORBITS, SceneLayout};
pub use state::{
    AnimationState, FrameTexts, FrameValues, LARGE_REFERENCE_THRESHOLD, Phase, SCALE_STEP,
    au_size, drawable_size,
};
pub use ticker::{DEFAULT_INTERVAL, Ticker};
