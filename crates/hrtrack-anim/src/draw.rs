//! Immutable draw records handed from the animation to a rendering adapter.
//!
//! The scene is declared once as a list of [`SceneElement`]s; afterwards each
//! frame is a [`FrameBatch`] of [`DrawUpdate`]s that must be applied together
//! before the next frame is requested.

use glam::DVec2;
use hrtrack_physics::Rgb;

/// Stable identity of a drawable in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawableId {
    // Per-frame elements.
    Star,
    StarMarker,
    StarTrail,
    Orbit(usize),
    LargeReference(usize),
    ConservativeInnerMask,
    ConservativeInner,
    ConservativeOuter,
    OptimisticInnerMask,
    OptimisticOuter,
    TimeMarker,
    AgeText,
    MassText,
    RadiusText,
    InstellationText,

    // Static elements.
    Background,
    MainSequence,
    SunTemperatureLine,
    SunLuminosityLine,
    TimeAxis,
    MinAgeLabel,
    MaxAgeLabel,
    LuminosityGridLine(usize),
    LuminosityLabel(usize),
    TemperatureLabel(usize),
}

/// Kind of primitive a [`SceneElement`] is drawn as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled circle whose area follows the element size.
    Disc,
    /// Unfilled circle whose area follows the element size.
    Ring,
    /// Small `+` marker.
    Cross,
    /// Small diamond marker.
    Diamond,
    /// Scatter of single points.
    Points,
    /// Connected line through the element points.
    Polyline,
    /// Text label.
    Text { font_size: f64, align: Align },
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Static drawing style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Rgb,
    pub alpha: f64,
    pub line_width: f64,
    pub z_order: i32,
}

impl Style {
    pub const fn new(color: Rgb, alpha: f64, line_width: f64, z_order: i32) -> Self {
        Self {
            color,
            alpha,
            line_width,
            z_order,
        }
    }
}

/// A drawable declared when the scene is set up.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneElement {
    pub id: DrawableId,
    pub shape: Shape,
    pub style: Style,
    /// Anchor in diagram coordinates (log Teff, log L).
    pub position: DVec2,
    /// Area-proportional size for discs, rings and markers.
    pub size: Option<f64>,
    pub text: Option<String>,
    /// Vertices for polylines and point scatters.
    pub points: Vec<DVec2>,
}

impl SceneElement {
    pub fn new(id: DrawableId, shape: Shape, style: Style, position: DVec2) -> Self {
        Self {
            id,
            shape,
            style,
            position,
            size: None,
            text: None,
            points: Vec::new(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_points(mut self, points: Vec<DVec2>) -> Self {
        self.points = points;
        self
    }
}

/// Change to one drawable for the current frame. `None` fields are left as
/// they were.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawUpdate {
    pub id: DrawableId,
    pub position: DVec2,
    pub size: Option<f64>,
    pub color: Option<Rgb>,
    pub text: Option<String>,
    /// Replacement vertex list for polylines.
    pub points: Option<Vec<DVec2>>,
}

impl DrawUpdate {
    /// Move a drawable without touching anything else.
    pub fn moved(id: DrawableId, position: DVec2) -> Self {
        Self {
            id,
            position,
            size: None,
            color: None,
            text: None,
            points: None,
        }
    }

    /// Move and resize.
    pub fn sized(id: DrawableId, position: DVec2, size: f64) -> Self {
        Self {
            size: Some(size),
            ..Self::moved(id, position)
        }
    }

    /// Replace the text of a label at `position`.
    pub fn text(id: DrawableId, position: DVec2, text: String) -> Self {
        Self {
            text: Some(text),
            ..Self::moved(id, position)
        }
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_points(mut self, points: Vec<DVec2>) -> Self {
        self.points = Some(points);
        self
    }
}

/// All updates for one frame, in application order.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBatch {
    /// Track sample index this frame shows.
    pub frame: usize,
    pub updates: Vec<DrawUpdate>,
}

impl FrameBatch {
    /// First update for `id`, if present.
    pub fn get(&self, id: DrawableId) -> Option<&DrawUpdate> {
        self.updates.iter().find(|u| u.id == id)
    }

    pub fn contains(&self, id: DrawableId) -> bool {
        self.get(id).is_some()
    }
}

/// Consumer of scene declarations and frame batches.
pub trait OutputSink {
    /// Called once with every drawable before the first frame.
    fn setup(&mut self, elements: &[SceneElement]);

    /// Apply a frame's updates atomically.
    fn apply(&mut self, batch: &FrameBatch);
}

/// Sink that keeps everything it receives. Useful in tests and for dumping a
/// session.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub elements: Vec<SceneElement>,
    pub batches: Vec<FrameBatch>,
}

impl OutputSink for RecordingSink {
    fn setup(&mut self, elements: &[SceneElement]) {
        self.elements = elements.to_vec();
    }

    fn apply(&mut self, batch: &FrameBatch) {
        self.batches.push(batch.clone());
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn setup(&mut self, elements: &[SceneElement]) {
        (**self).setup(elements);
    }

    fn apply(&mut self, batch: &FrameBatch) {
        (**self).apply(batch);
    }
}
