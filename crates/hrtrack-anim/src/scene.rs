//! Static geometry of the HR diagram: axis limits, reference rings, legend and
//! label placement.

use glam::DVec2;
use hrtrack_grid::EvolutionaryTrack;
use hrtrack_physics::{Rgb, SOLAR_TEFF};

use crate::draw::{Align, DrawableId, SceneElement, Shape, Style};
use crate::text::{LUMINOSITY_LEGEND, temperature_label, temperature_ticks, years_label};

/// log Teff limits, hottest on the left.
pub const X_LIMITS: (f64, f64) = (6.0, 3.0);

/// Lower log L limit.
pub const MIN_LOG_LUM: f64 = -3.4;

/// Height of the time axis above the bottom of the plot.
pub const TIME_AXIS_OFFSET: f64 = 0.3;

/// Large reference rings, in AU.
pub const LARGE_REFERENCE_AU: [f64; 8] = [100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0];

pub(crate) const TEXT_FONT_SIZE: f64 = 18.0;
const LABEL_FONT_SIZE: f64 = 10.0;

pub mod colors {
    //! Named colors used by the scene.
    use hrtrack_physics::Rgb;

    pub const SILVER: Rgb = Rgb::new(0.753, 0.753, 0.753);
    pub const LIGHT_BLUE: Rgb = Rgb::new(0.678, 0.847, 0.902);
    pub const ORANGE: Rgb = Rgb::new(1.0, 0.647, 0.0);
    pub const IVORY: Rgb = Rgb::new(1.0, 1.0, 0.941);
    pub const GOLDENROD: Rgb = Rgb::new(0.855, 0.647, 0.125);
    pub const CYAN: Rgb = Rgb::new(0.0, 1.0, 1.0);
    pub const TURQUOISE: Rgb = Rgb::new(0.251, 0.878, 0.816);
    pub const LIGHT_GREEN: Rgb = Rgb::new(0.565, 0.933, 0.565);
    pub const YELLOW: Rgb = Rgb::new(1.0, 1.0, 0.0);
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const DARK_GREY: Rgb = Rgb::new(0.2, 0.2, 0.2);
    pub const GREY: Rgb = Rgb::new(0.3, 0.3, 0.3);
}

/// A schematic planetary orbit drawn around the star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRing {
    pub name: &'static str,
    /// Semi-major axis in AU.
    pub radius_au: f64,
    pub color: Rgb,
    pub line_width: f64,
    pub alpha: f64,
}

const fn orbit(name: &'static str, radius_au: f64, color: Rgb, line_width: f64, alpha: f64) -> OrbitRing {
    OrbitRing {
        name,
        radius_au,
        color,
        line_width,
        alpha,
    }
}

/// The Solar System planets, Mercury to Neptune.
pub const SOLAR_SYSTEM_ORBITS: [OrbitRing; 8] = [
    orbit("Mercury", 0.3870993, colors::SILVER, 1.0, 0.2),
    orbit("Venus", 0.72336, Rgb::WHITE, 1.3, 0.3),
    orbit("Earth", 1.0, colors::LIGHT_BLUE, 2.5, 0.5),
    orbit("Mars", 1.52371, colors::ORANGE, 1.3, 0.3),
    orbit("Jupiter", 5.2029, colors::IVORY, 1.5, 0.3),
    orbit("Saturn", 9.537, colors::GOLDENROD, 1.5, 0.3),
    orbit("Uranus", 19.189, colors::CYAN, 1.0, 0.2),
    orbit("Neptune", 30.0699, colors::TURQUOISE, 1.0, 0.2),
];

/// Plot geometry for one star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    /// (left, right) log Teff.
    pub x_limits: (f64, f64),
    /// (bottom, top) log L.
    pub y_limits: (f64, f64),
    /// log L of the time axis.
    pub time_axis_y: f64,
}

impl SceneLayout {
    /// Layout for a star of the given grid mass.
    pub fn for_mass(mass: f64) -> Self {
        let y_limits = (MIN_LOG_LUM, Self::max_log_lum(mass));
        Self {
            x_limits: X_LIMITS,
            y_limits,
            time_axis_y: y_limits.0 + TIME_AXIS_OFFSET,
        }
    }

    /// Upper log L limit: massive stars get more headroom.
    pub fn max_log_lum(mass: f64) -> f64 {
        if mass > 20.0 {
            7.6
        } else if mass > 10.0 {
            6.6
        } else {
            5.6
        }
    }

    /// Position of the time marker after `fraction` of the track's age span.
    pub fn time_marker_position(&self, fraction: f64) -> DVec2 {
        let (x0, x1) = self.x_limits;
        DVec2::new(x0 + fraction * (x1 - x0), self.time_axis_y)
    }

    /// Anchor of the readout text `id`; other ids are anchored at the origin.
    pub fn text_anchor(&self, id: DrawableId) -> DVec2 {
        let rise = match id {
            DrawableId::AgeText => 1.3,
            DrawableId::MassText => 1.0,
            DrawableId::RadiusText => 0.7,
            DrawableId::InstellationText => 0.4,
            _ => return DVec2::ZERO,
        };
        DVec2::new(self.x_limits.0 - 0.02, self.y_limits.0 + rise)
    }

    /// Elements that never change during the animation.
    pub fn static_elements(
        &self,
        track: &EvolutionaryTrack,
        background: &[(f64, f64)],
        main_sequence: &[(f64, f64)],
    ) -> Vec<SceneElement> {
        let (x0, x1) = self.x_limits;
        let (y0, y1) = self.y_limits;
        let to_points = |pts: &[(f64, f64)]| -> Vec<DVec2> {
            pts.iter().map(|&(x, y)| DVec2::new(x, y)).collect()
        };
        let label = |align: Align| Shape::Text {
            font_size: LABEL_FONT_SIZE,
            align,
        };
        let white_text = Style::new(Rgb::WHITE, 1.0, 0.0, 300);
        let grid_line = Style::new(Rgb::WHITE, 0.5, 0.3, 300);

        let mut elements = vec![
            SceneElement::new(
                DrawableId::Background,
                Shape::Points,
                Style::new(colors::DARK_GREY, 1.0, 0.0, 100),
                DVec2::ZERO,
            )
            .with_size(0.5)
            .with_points(to_points(background)),
            SceneElement::new(
                DrawableId::MainSequence,
                Shape::Polyline,
                Style::new(colors::GREY, 1.0, 1.0, 101),
                DVec2::ZERO,
            )
            .with_points(to_points(main_sequence)),
        ];

        let sun_x = SOLAR_TEFF.log10();
        let sun_line = Style::new(colors::RED, 1.0, 0.3, 300);
        elements.push(
            SceneElement::new(DrawableId::SunTemperatureLine, Shape::Polyline, sun_line, DVec2::ZERO)
                .with_points(vec![DVec2::new(sun_x, y0), DVec2::new(sun_x, y1)]),
        );
        elements.push(
            SceneElement::new(DrawableId::SunLuminosityLine, Shape::Polyline, sun_line, DVec2::ZERO)
                .with_points(vec![DVec2::new(x0, 0.0), DVec2::new(x1, 0.0)]),
        );

        let ty = self.time_axis_y;
        elements.push(
            SceneElement::new(
                DrawableId::TimeAxis,
                Shape::Polyline,
                Style::new(Rgb::WHITE, 0.5, 2.0, 300),
                DVec2::ZERO,
            )
            .with_points(vec![DVec2::new(x0, ty), DVec2::new(x1, ty)]),
        );
        elements.push(
            SceneElement::new(
                DrawableId::MinAgeLabel,
                label(Align::Left),
                white_text,
                DVec2::new(x0 - 0.02, ty - 0.2),
            )
            .with_text(years_label(track.min_age())),
        );
        elements.push(
            SceneElement::new(
                DrawableId::MaxAgeLabel,
                label(Align::Right),
                white_text,
                DVec2::new(x1 + 0.02, ty - 0.2),
            )
            .with_text(years_label(track.max_age())),
        );

        for (i, &(log_lum, text)) in LUMINOSITY_LEGEND.iter().enumerate() {
            elements.push(
                SceneElement::new(
                    DrawableId::LuminosityLabel(i),
                    label(Align::Left),
                    white_text,
                    DVec2::new(x0 - 0.01, log_lum - 0.05),
                )
                .with_text(text),
            );
            elements.push(
                SceneElement::new(
                    DrawableId::LuminosityGridLine(i),
                    Shape::Polyline,
                    grid_line,
                    DVec2::ZERO,
                )
                .with_points(vec![DVec2::new(x0, log_lum), DVec2::new(x1, log_lum)]),
            );
        }

        for (i, teff) in temperature_ticks().into_iter().enumerate() {
            elements.push(
                SceneElement::new(
                    DrawableId::TemperatureLabel(i),
                    label(Align::Center),
                    white_text,
                    DVec2::new(teff.log10(), y1 - 0.2),
                )
                .with_text(temperature_label(teff)),
            );
        }

        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrtrack_grid::TrackSample;

    fn track() -> EvolutionaryTrack {
        EvolutionaryTrack::new(vec![
            TrackSample {
                age: 1.0e6,
                log_teff: 3.76,
                log_lum: 0.0,
                radius: 1.0,
                mass: 1.0,
            },
            TrackSample {
                age: 1.2e10,
                log_teff: 3.5,
                log_lum: 3.0,
                radius: 150.0,
                mass: 0.6,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_max_luminosity_bands() {
        assert_eq!(SceneLayout::max_log_lum(1.0), 5.6);
        assert_eq!(SceneLayout::max_log_lum(10.0), 5.6);
        assert_eq!(SceneLayout::max_log_lum(10.5), 6.6);
        assert_eq!(SceneLayout::max_log_lum(20.0), 6.6);
        assert_eq!(SceneLayout::max_log_lum(40.0), 7.6);
    }

    #[test]
    fn test_time_marker_spans_axis() {
        let layout = SceneLayout::for_mass(1.0);
        let start = layout.time_marker_position(0.0);
        assert_eq!(start.x, 6.0);
        assert!((start.y - (-3.1)).abs() < 1e-12);
        assert_eq!(layout.time_marker_position(1.0).x, 3.0);
        assert!((layout.time_marker_position(0.5).x - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_text_anchors_stack_upwards() {
        let layout = SceneLayout::for_mass(1.0);
        let age = layout.text_anchor(DrawableId::AgeText);
        let flux = layout.text_anchor(DrawableId::InstellationText);
        assert!((age.x - 5.98).abs() < 1e-12);
        assert!(age.y > layout.text_anchor(DrawableId::MassText).y);
        assert!((flux.y - (-3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_static_elements() {
        let layout = SceneLayout::for_mass(1.0);
        let elements = layout.static_elements(&track(), &[(3.7, 0.1)], &[(3.8, 0.5), (3.6, -1.0)]);

        let find = |id| elements.iter().find(|e| e.id == id).unwrap();
        assert_eq!(find(DrawableId::Background).points.len(), 1);
        assert_eq!(find(DrawableId::MainSequence).points.len(), 2);
        assert_eq!(
            find(DrawableId::MinAgeLabel).text.as_deref(),
            Some("1,000,000 Years")
        );
        assert_eq!(
            find(DrawableId::MaxAgeLabel).text.as_deref(),
            Some("12,000,000,000 Years")
        );
        assert_eq!(
            find(DrawableId::TemperatureLabel(0)).text.as_deref(),
            Some("3,000K")
        );
        let labels = elements
            .iter()
            .filter(|e| matches!(e.id, DrawableId::LuminosityLabel(_)))
            .count();
        assert_eq!(labels, LUMINOSITY_LEGEND.len());
    }

    #[test]
    fn test_orbits_ordered_outwards() {
        assert!(
            SOLAR_SYSTEM_ORBITS
                .windows(2)
                .all(|w| w[0].radius_au < w[1].radius_au)
        );
        assert_eq!(SOLAR_SYSTEM_ORBITS[2].radius_au, 1.0);
    }
}
