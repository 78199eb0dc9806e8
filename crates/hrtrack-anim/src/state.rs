//! The animation state machine.
//!
//! `Running` consumes ticks and scale input; `Paused` ignores both until the
//! next toggle. Every frame is derived from the current track sample only, so
//! frame `i` always renders the same way for the same scale.

use glam::DVec2;
use hrtrack_grid::{EvolutionaryTrack, HabitableZoneSeries, ResolvedTrack, TrackSample};
use hrtrack_physics::{
    AU_IN_SOLAR_RADII, CONSERVATIVE_FALLBACK_AU, ColorTable, HzKind, Rgb, instellation,
};
use tracing::{debug, trace};

use crate::command::{InputCommand, ScaleDirection};
use crate::draw::{Align, DrawUpdate, DrawableId, FrameBatch, SceneElement, Shape, Style};
use crate::error::AnimError;
use crate::scene::{
    LARGE_REFERENCE_AU, SOLAR_SYSTEM_ORBITS, SceneLayout, TEXT_FONT_SIZE, colors,
};
use crate::text;

/// Factor applied to the solar-system scale per scale input.
pub const SCALE_STEP: f64 = 1.2;

/// Large reference rings are only updated while the scale is below this.
pub const LARGE_REFERENCE_THRESHOLD: f64 = 0.55;

/// Area-proportional drawable size for a radius in solar radii.
pub fn drawable_size(scale: f64, radius_solar: f64) -> f64 {
    (scale * radius_solar).powi(2)
}

/// Area-proportional drawable size for a radius in AU.
pub fn au_size(scale: f64, radius_au: f64) -> f64 {
    drawable_size(scale, radius_au * AU_IN_SOLAR_RADII)
}

/// Whether the animation is consuming ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    Paused,
}

/// Readout text for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTexts {
    pub age: String,
    pub mass: String,
    pub radius: String,
    pub instellation: String,
}

/// Physical and display quantities derived for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameValues {
    pub index: usize,
    pub sample: TrackSample,
    pub position: DVec2,
    pub color: Rgb,
    pub star_size: f64,
    /// Conservative `[inner, outer]` habitable zone in AU.
    pub hz_conservative: [f64; 2],
    /// Optimistic `[inner, outer]` habitable zone in AU.
    pub hz_optimistic: [f64; 2],
    pub instellation: f64,
    /// Elapsed fraction of the track's age span.
    pub time_fraction: f64,
    pub texts: FrameTexts,
}

/// Owns the resolved track for the session and everything needed to render
/// any of its frames.
#[derive(Debug, Clone)]
pub struct AnimationState<'a> {
    track: EvolutionaryTrack,
    hz: HabitableZoneSeries,
    colors: &'a ColorTable,
    layout: SceneLayout,
    mass: f64,
    frame: usize,
    scale: f64,
    phase: Phase,
}

impl<'a> AnimationState<'a> {
    /// Start a session on frame 0, running, at `solar_system_scale`.
    pub fn new(
        resolved: ResolvedTrack,
        hz: HabitableZoneSeries,
        colors: &'a ColorTable,
        solar_system_scale: f64,
    ) -> Result<Self, AnimError> {
        if hz.len() != resolved.track.len() {
            return Err(AnimError::HzLengthMismatch {
                track: resolved.track.len(),
                hz: hz.len(),
            });
        }
        if !(solar_system_scale.is_finite() && solar_system_scale > 0.0) {
            return Err(AnimError::InvalidScale(solar_system_scale));
        }

        debug!(
            mass = resolved.mass,
            metallicity = resolved.metallicity,
            frames = resolved.track.len(),
            scale = solar_system_scale,
            "Animation session created"
        );

        Ok(Self {
            layout: SceneLayout::for_mass(resolved.mass),
            mass: resolved.mass,
            track: resolved.track,
            hz,
            colors,
            frame: 0,
            scale: solar_system_scale,
            phase: Phase::Running,
        })
    }

    /// Like [`new`](Self::new), computing the habitable-zone cache with the
    /// standard fallback radius.
    pub fn from_resolved(
        resolved: ResolvedTrack,
        colors: &'a ColorTable,
        solar_system_scale: f64,
    ) -> Result<Self, AnimError> {
        let hz = HabitableZoneSeries::build(&resolved.track, CONSERVATIVE_FALLBACK_AU);
        Self::new(resolved, hz, colors, solar_system_scale)
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn frame_count(&self) -> usize {
        self.track.len()
    }

    pub fn solar_system_scale(&self) -> f64 {
        self.scale
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn track(&self) -> &EvolutionaryTrack {
        &self.track
    }

    pub fn habitable_zones(&self) -> &HabitableZoneSeries {
        &self.hz
    }

    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }

    /// Grid mass of the star being animated.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Advance one frame and return its updates. Paused sessions ignore the
    /// tick and return `None`.
    pub fn on_tick(&mut self) -> Option<FrameBatch> {
        if self.is_paused() {
            return None;
        }
        self.frame = (self.frame + 1) % self.track.len();
        Some(self.frame_batch())
    }

    /// Grow or shrink the solar-system scale. Ignored while paused, since the
    /// change could not be seen until resuming.
    pub fn on_scale_input(&mut self, direction: ScaleDirection) {
        if self.is_paused() {
            trace!("Ignoring scale input while paused");
            return;
        }
        self.scale = match direction {
            ScaleDirection::Increase => self.scale * SCALE_STEP,
            ScaleDirection::Decrease => self.scale / SCALE_STEP,
        };
        debug!(scale = self.scale, "Solar system scale changed");
    }

    /// Switch between running and paused.
    pub fn on_toggle_input(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
        };
        debug!(phase = ?self.phase, frame = self.frame, "Animation toggled");
    }

    /// Dispatch an input command.
    pub fn apply(&mut self, command: InputCommand) {
        match command {
            InputCommand::Toggle => self.on_toggle_input(),
            InputCommand::AdjustScale(direction) => self.on_scale_input(direction),
        }
    }

    /// Derived quantities for the current frame.
    pub fn frame_values(&self) -> FrameValues {
        let index = self.frame;
        let sample = self.track.samples()[index];
        let hz_conservative = self.hz.at(HzKind::Conservative, index);
        let hz_optimistic = self.hz.at(HzKind::Optimistic, index);
        let instellation = instellation(sample.radius, sample.log_teff);

        FrameValues {
            index,
            sample,
            position: DVec2::new(sample.log_teff, sample.log_lum),
            color: self.colors.star_color(sample.log_teff),
            star_size: drawable_size(self.scale, sample.radius),
            hz_conservative,
            hz_optimistic,
            instellation,
            time_fraction: self.track.age_fraction(sample.age),
            texts: FrameTexts {
                age: text::age_text(sample.age),
                mass: text::mass_text(sample.mass),
                radius: text::radius_text(sample.radius),
                instellation: text::instellation_text(instellation, hz_conservative),
            },
        }
    }

    /// Updates for the current frame, without advancing.
    pub fn frame_batch(&self) -> FrameBatch {
        let v = self.frame_values();
        let pos = v.position;
        let scale = self.scale;
        let mut updates = Vec::with_capacity(32);

        updates.push(DrawUpdate::sized(DrawableId::Star, pos, v.star_size).with_color(v.color));
        updates.push(DrawUpdate::moved(DrawableId::StarMarker, pos));

        for (i, orbit) in SOLAR_SYSTEM_ORBITS.iter().enumerate() {
            updates.push(DrawUpdate::sized(
                DrawableId::Orbit(i),
                pos,
                au_size(scale, orbit.radius_au),
            ));
        }
        if scale < LARGE_REFERENCE_THRESHOLD {
            for (i, &radius_au) in LARGE_REFERENCE_AU.iter().enumerate() {
                updates.push(DrawUpdate::sized(
                    DrawableId::LargeReference(i),
                    pos,
                    au_size(scale, radius_au),
                ));
            }
        }

        let [c_inner, c_outer] = v.hz_conservative.map(|r| au_size(scale, r));
        let [o_inner, o_outer] = v.hz_optimistic.map(|r| au_size(scale, r));
        updates.push(DrawUpdate::sized(DrawableId::ConservativeInnerMask, pos, c_inner));
        updates.push(DrawUpdate::sized(DrawableId::ConservativeInner, pos, c_inner));
        updates.push(DrawUpdate::sized(DrawableId::ConservativeOuter, pos, c_outer));
        updates.push(DrawUpdate::sized(DrawableId::OptimisticInnerMask, pos, o_inner));
        updates.push(DrawUpdate::sized(DrawableId::OptimisticOuter, pos, o_outer));

        let anchor = |id| self.layout.text_anchor(id);
        updates.push(DrawUpdate::text(
            DrawableId::AgeText,
            anchor(DrawableId::AgeText),
            v.texts.age,
        ));
        updates.push(DrawUpdate::moved(
            DrawableId::TimeMarker,
            self.layout.time_marker_position(v.time_fraction),
        ));
        updates.push(DrawUpdate::text(
            DrawableId::MassText,
            anchor(DrawableId::MassText),
            v.texts.mass,
        ));
        updates.push(DrawUpdate::text(
            DrawableId::RadiusText,
            anchor(DrawableId::RadiusText),
            v.texts.radius,
        ));
        updates.push(DrawUpdate::text(
            DrawableId::InstellationText,
            anchor(DrawableId::InstellationText),
            v.texts.instellation,
        ));

        // The trail stops short of the current sample.
        let trail = self.track.samples()[..v.index]
            .iter()
            .map(|s| DVec2::new(s.log_teff, s.log_lum))
            .collect();
        updates.push(DrawUpdate::moved(DrawableId::StarTrail, pos).with_points(trail));

        FrameBatch {
            frame: v.index,
            updates,
        }
    }

    /// Every drawable of the scene, positioned for the current frame.
    ///
    /// `background` is the reference star catalog and `main_sequence` the
    /// middle-age main-sequence curve, both as `(log_teff, log_lum)`.
    pub fn scene_elements(
        &self,
        background: &[(f64, f64)],
        main_sequence: &[(f64, f64)],
    ) -> Vec<SceneElement> {
        let mut elements = self
            .layout
            .static_elements(&self.track, background, main_sequence);
        let v = self.frame_values();
        let pos = v.position;
        let scale = self.scale;

        for (i, orbit) in SOLAR_SYSTEM_ORBITS.iter().enumerate() {
            elements.push(
                SceneElement::new(
                    DrawableId::Orbit(i),
                    Shape::Ring,
                    Style::new(orbit.color, orbit.alpha, orbit.line_width, 300),
                    pos,
                )
                .with_size(au_size(scale, orbit.radius_au)),
            );
        }
        for (i, &radius_au) in LARGE_REFERENCE_AU.iter().enumerate() {
            elements.push(
                SceneElement::new(
                    DrawableId::LargeReference(i),
                    Shape::Ring,
                    Style::new(colors::CYAN, 0.5, 1.0, 300),
                    pos,
                )
                .with_size(au_size(scale, radius_au)),
            );
        }

        let hz_discs = [
            (DrawableId::ConservativeInnerMask, v.hz_conservative[0], Rgb::BLACK, 1.0, 11),
            (DrawableId::ConservativeInner, v.hz_conservative[0], colors::LIGHT_GREEN, 0.2, 12),
            (DrawableId::ConservativeOuter, v.hz_conservative[1], colors::YELLOW, 0.1, 10),
            (DrawableId::OptimisticInnerMask, v.hz_optimistic[0], Rgb::BLACK, 1.0, 13),
            (DrawableId::OptimisticOuter, v.hz_optimistic[1], colors::LIGHT_GREEN, 0.2, 9),
        ];
        for (id, radius_au, color, alpha, z_order) in hz_discs {
            elements.push(
                SceneElement::new(id, Shape::Disc, Style::new(color, alpha, 2.0, z_order), pos)
                    .with_size(au_size(scale, radius_au)),
            );
        }

        elements.push(
            SceneElement::new(
                DrawableId::StarTrail,
                Shape::Polyline,
                Style::new(Rgb::WHITE, 1.0, 0.5, 300),
                pos,
            )
            .with_points(vec![pos]),
        );
        elements.push(
            SceneElement::new(
                DrawableId::Star,
                Shape::Disc,
                Style::new(v.color, 1.0, 0.5, 200),
                pos,
            )
            .with_size(v.star_size),
        );
        elements.push(SceneElement::new(
            DrawableId::StarMarker,
            Shape::Cross,
            Style::new(Rgb::BLACK, 0.2, 1.0, 400),
            pos,
        ));

        let readout = Shape::Text {
            font_size: TEXT_FONT_SIZE,
            align: Align::Left,
        };
        let white = Style::new(Rgb::WHITE, 1.0, 0.0, 300);
        for (id, content) in [
            (DrawableId::AgeText, v.texts.age),
            (DrawableId::MassText, v.texts.mass),
            (DrawableId::RadiusText, v.texts.radius),
            (DrawableId::InstellationText, v.texts.instellation),
        ] {
            elements.push(
                SceneElement::new(id, readout, white, self.layout.text_anchor(id))
                    .with_text(content),
            );
        }

        elements.push(
            SceneElement::new(
                DrawableId::TimeMarker,
                Shape::Diamond,
                Style::new(colors::YELLOW, 1.0, 1.0, 300),
                self.layout.time_marker_position(v.time_fraction),
            )
            .with_size(5.0),
        );

        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrtrack_grid::{InMemoryGrid, TrackRecord, TrackResolver};
    use hrtrack_physics::ColorRow;

    fn colors() -> ColorTable {
        let rows = [(2500.0, [1.0, 0.3, 0.0]), (6000.0, [1.0, 0.95, 0.9]), (30000.0, [0.6, 0.7, 1.0])]
            .map(|(temperature, [r, g, b])| ColorRow {
                temperature,
                calibration: "2deg".to_string(),
                r,
                g,
                b,
            });
        ColorTable::from_rows(&rows, "2deg").unwrap()
    }

    fn resolved(samples: usize) -> ResolvedTrack {
        let record = TrackRecord {
            metallicity: 0.0,
            mass: 1.0,
            samples: (0..samples)
                .map(|i| {
                    let f = i as f64;
                    TrackSample {
                        age: 1.0e6 + f * 1.0e9,
                        log_teff: 3.76 - 0.01 * f,
                        log_lum: 0.1 * f,
                        radius: 1.0 + f,
                        mass: 1.0 - 0.01 * f,
                    }
                })
                .collect(),
        };
        let grid = InMemoryGrid::from_records(vec![record]).unwrap();
        TrackResolver::new(&grid).resolve(1.0, 0.0).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let colors = colors();
        let state = AnimationState::from_resolved(resolved(4), &colors, 3.0).unwrap();
        assert_eq!(state.frame(), 0);
        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(state.solar_system_scale(), 3.0);
        assert_eq!(state.frame_count(), 4);
    }

    #[test]
    fn test_rejects_bad_scale_and_mismatched_cache() {
        let colors = colors();
        assert_eq!(
            AnimationState::from_resolved(resolved(3), &colors, 0.0).unwrap_err(),
            AnimError::InvalidScale(0.0)
        );

        let other = resolved(5);
        let hz = HabitableZoneSeries::build(&other.track, CONSERVATIVE_FALLBACK_AU);
        assert_eq!(
            AnimationState::new(resolved(3), hz, &colors, 1.0).unwrap_err(),
            AnimError::HzLengthMismatch { track: 3, hz: 5 }
        );
    }

    #[test]
    fn test_tick_advances_and_wraps() {
        let colors = colors();
        let mut state = AnimationState::from_resolved(resolved(3), &colors, 1.0).unwrap();
        assert_eq!(state.on_tick().unwrap().frame, 1);
        assert_eq!(state.on_tick().unwrap().frame, 2);
        assert_eq!(state.on_tick().unwrap().frame, 0);
    }

    #[test]
    fn test_paused_tick_changes_nothing() {
        let colors = colors();
        let mut state = AnimationState::from_resolved(resolved(4), &colors, 1.0).unwrap();
        state.on_tick();
        state.on_toggle_input();
        let before = state.frame_values();
        let scale = state.solar_system_scale();

        assert!(state.on_tick().is_none());
        state.on_scale_input(ScaleDirection::Increase);

        assert_eq!(state.frame(), 1);
        assert_eq!(state.solar_system_scale(), scale);
        assert_eq!(state.frame_values(), before);
    }

    #[test]
    fn test_toggle_resumes() {
        let colors = colors();
        let mut state = AnimationState::from_resolved(resolved(4), &colors, 1.0).unwrap();
        state.apply(InputCommand::Toggle);
        assert!(state.is_paused());
        state.apply(InputCommand::Toggle);
        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(state.on_tick().unwrap().frame, 1);
    }

    #[test]
    fn test_scale_input_steps_by_factor() {
        let colors = colors();
        let mut state = AnimationState::from_resolved(resolved(2), &colors, 1.0).unwrap();
        state.apply(InputCommand::AdjustScale(ScaleDirection::Increase));
        assert!((state.solar_system_scale() - 1.2).abs() < 1e-12);
        state.apply(InputCommand::AdjustScale(ScaleDirection::Decrease));
        state.apply(InputCommand::AdjustScale(ScaleDirection::Decrease));
        assert!((state.solar_system_scale() - 1.0 / 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_scale_is_unbounded() {
        let colors = colors();
        let mut state = AnimationState::from_resolved(resolved(2), &colors, 1.0).unwrap();
        for _ in 0..200 {
            state.on_scale_input(ScaleDirection::Decrease);
        }
        assert!(state.solar_system_scale() > 0.0);
        assert!(state.solar_system_scale() < 1e-15);
    }

    #[test]
    fn test_large_reference_rings_below_threshold_only() {
        let colors = colors();
        let mut state = AnimationState::from_resolved(resolved(3), &colors, 0.6).unwrap();
        let batch = state.on_tick().unwrap();
        assert!(!batch.contains(DrawableId::LargeReference(0)));

        state.on_scale_input(ScaleDirection::Decrease);
        assert!(state.solar_system_scale() < LARGE_REFERENCE_THRESHOLD);
        let batch = state.on_tick().unwrap();
        for i in 0..LARGE_REFERENCE_AU.len() {
            let update = batch.get(DrawableId::LargeReference(i)).unwrap();
            assert_eq!(
                update.size,
                Some(au_size(state.solar_system_scale(), LARGE_REFERENCE_AU[i]))
            );
        }
    }

    #[test]
    fn test_size_mapping() {
        assert_eq!(drawable_size(2.0, 3.0), 36.0);
        let one_au = au_size(1.0, 1.0);
        assert!((one_au - AU_IN_SOLAR_RADII * AU_IN_SOLAR_RADII).abs() < 1e-6);
        let mut previous = 0.0;
        for scale in [0.01, 0.1, 0.5, 1.0, 3.0, 100.0] {
            let size = au_size(scale, 1.52371);
            assert!(size > previous);
            previous = size;
        }
    }

    #[test]
    fn test_time_marker_moves_with_age() {
        let colors = colors();
        let mut state = AnimationState::from_resolved(resolved(3), &colors, 1.0).unwrap();
        let start = state.frame_batch();
        assert_eq!(start.get(DrawableId::TimeMarker).unwrap().position.x, 6.0);
        state.on_tick();
        let end = state.on_tick().unwrap();
        assert!((end.get(DrawableId::TimeMarker).unwrap().position.x - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_trail_excludes_current_sample() {
        let colors = colors();
        let mut state = AnimationState::from_resolved(resolved(4), &colors, 1.0).unwrap();
        let first = state.frame_batch();
        assert_eq!(first.get(DrawableId::StarTrail).unwrap().points.as_ref().unwrap().len(), 0);
        state.on_tick();
        let third = state.on_tick().unwrap();
        let trail = third.get(DrawableId::StarTrail).unwrap().points.clone().unwrap();
        assert_eq!(trail.len(), 2);
        let second = state.track().samples()[1];
        assert_eq!(trail[1], DVec2::new(second.log_teff, second.log_lum));
    }

    #[test]
    fn test_scene_elements_cover_frame_updates() {
        let colors = colors();
        let state = AnimationState::from_resolved(resolved(3), &colors, 0.4).unwrap();
        let elements = state.scene_elements(&[], &[]);
        let batch = state.frame_batch();
        for update in &batch.updates {
            assert!(
                elements.iter().any(|e| e.id == update.id),
                "no scene element for {:?}",
                update.id
            );
        }
    }
}
