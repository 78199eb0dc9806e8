//! Headless output: every frame is reported through the log.

use hrtrack_anim::{DrawableId, FrameBatch, OutputSink, SceneElement};
use tracing::{debug, info};

/// Readouts written for each frame, in display order.
const READOUTS: [DrawableId; 4] = [
    DrawableId::AgeText,
    DrawableId::MassText,
    DrawableId::RadiusText,
    DrawableId::InstellationText,
];

/// [`OutputSink`] that logs the text readouts and star state of each frame.
#[derive(Debug, Default)]
pub struct LogSink {
    frames: usize,
}

impl LogSink {
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// The readout line logged for `batch`.
    pub fn summary(batch: &FrameBatch) -> String {
        READOUTS
            .iter()
            .filter_map(|&id| batch.get(id).and_then(|u| u.text.as_deref()))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl OutputSink for LogSink {
    fn setup(&mut self, elements: &[SceneElement]) {
        debug!(elements = elements.len(), "Scene declared");
    }

    fn apply(&mut self, batch: &FrameBatch) {
        self.frames += 1;
        if let Some(star) = batch.get(DrawableId::Star) {
            debug!(
                frame = batch.frame,
                log_teff = star.position.x,
                log_lum = star.position.y,
                size = ?star.size,
                color = ?star.color.map(|c| c.to_hex()),
                "Star"
            );
        }
        info!(frame = batch.frame, "{}", Self::summary(batch));
    }
}
