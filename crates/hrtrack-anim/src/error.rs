//! Animation error types.

/// Errors raised while setting up an animation session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnimError {
    /// The habitable-zone cache was built for a different track.
    #[error("habitable zone series has {hz} samples but the track has {track}")]
    HzLengthMismatch { track: usize, hz: usize },

    /// The solar-system scale must be a positive finite number.
    #[error("solar system scale must be positive and finite, got {0}")]
    InvalidScale(f64),
}
