//! Text shown next to the diagram: age, mass, radius and instellation
//! readouts, plus the static axis labels.

use hrtrack_physics::EARTH_TO_SUN_RADIUS;

/// Radii below this (in solar radii) also show an Earth-radius equivalent.
pub const EARTH_RADIUS_DISPLAY_LIMIT: f64 = 0.08;

/// Legend text for log L = -1 … 7.
pub const LUMINOSITY_LEGEND: [(f64, &str); 9] = [
    (-1.0, "1/10 as bright"),
    (0.0, "Solar brightness"),
    (1.0, "10 x brighter"),
    (2.0, "100 x brighter"),
    (3.0, "1,000 x brighter"),
    (4.0, "10,000 x brighter"),
    (5.0, "100,000 x brighter"),
    (6.0, "1,000,000 x brighter"),
    (7.0, "10,000,000 x brighter"),
];

/// Temperatures labelled along the top of the diagram, in Kelvin.
pub fn temperature_ticks() -> Vec<f64> {
    let mut ticks = Vec::new();
    for decade in [1_000.0, 10_000.0, 100_000.0] {
        for multiple in [3.0, 5.0, 10.0] {
            let t = decade * multiple;
            // Off the right edge of the plot.
            if t == 1.0e6 {
                continue;
            }
            ticks.push(t);
        }
    }
    ticks
}

/// `Age: 4,600,000,000 Years`
pub fn age_text(age: f64) -> String {
    format!("Age: {}", years_label(age))
}

/// `4,600,000,000 Years`, the age truncated to whole years.
pub fn years_label(age: f64) -> String {
    format!("{} Years", format_with_commas(age.trunc() as i64))
}

/// `Mass: 1.000 Solar Masses`
pub fn mass_text(mass: f64) -> String {
    format!("Mass: {mass:.3} Solar Masses")
}

/// `Radius: 1.000 Solar Radii`, with an Earth-radius equivalent appended for
/// very small stars.
pub fn radius_text(radius: f64) -> String {
    let mut text = format!("Radius: {radius:.3} Solar Radii");
    if radius < EARTH_RADIUS_DISPLAY_LIMIT {
        text.push_str(&format!(
            " = {:.3} Earth Radii",
            radius / EARTH_TO_SUN_RADIUS
        ));
    }
    text
}

/// `Earth flux: 1.00 hz: [0.95,1.68] AU` for the instellation and the
/// conservative `[inner, outer]` habitable zone.
pub fn instellation_text(instellation: f64, hz: [f64; 2]) -> String {
    format!(
        "Earth flux: {instellation:.2} hz: [{:.2},{:.2}] AU",
        hz[0], hz[1]
    )
}

/// `3,000K`
pub fn temperature_label(teff: f64) -> String {
    format!("{}K", format_with_commas(teff.trunc() as i64))
}

/// Format an integer with comma thousands separators.
pub fn format_with_commas(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_commas() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1000), "1,000");
        assert_eq!(format_with_commas(1_234_567), "1,234,567");
        assert_eq!(format_with_commas(-45_000), "-45,000");
    }

    #[test]
    fn test_age_text() {
        assert_eq!(age_text(4_600_000_000.0), "Age: 4,600,000,000 Years");
        assert_eq!(age_text(12_345.9), "Age: 12,345 Years");
        assert!(!age_text(4_600_000_000.0).contains('.'));
    }

    #[test]
    fn test_mass_text() {
        assert_eq!(mass_text(1.0), "Mass: 1.000 Solar Masses");
        assert_eq!(mass_text(0.12345), "Mass: 0.123 Solar Masses");
    }

    #[test]
    fn test_radius_text_small_star_has_earth_radii() {
        let text = radius_text(0.05);
        assert!(text.starts_with("Radius: 0.050 Solar Radii = "));
        assert!(text.ends_with(" Earth Radii"));
        assert!(text.contains(&format!("{:.3}", 0.05 / EARTH_TO_SUN_RADIUS)));
    }

    #[test]
    fn test_radius_text_sunlike_star() {
        assert_eq!(radius_text(1.0), "Radius: 1.000 Solar Radii");
        assert!(!radius_text(0.08).contains("Earth"));
    }

    #[test]
    fn test_instellation_text() {
        assert_eq!(
            instellation_text(1.0, [0.9506, 1.6763]),
            "Earth flux: 1.00 hz: [0.95,1.68] AU"
        );
    }

    #[test]
    fn test_temperature_ticks_skip_million() {
        let ticks = temperature_ticks();
        assert_eq!(ticks.len(), 8);
        assert_eq!(ticks.first(), Some(&3_000.0));
        assert_eq!(ticks.last(), Some(&500_000.0));
        assert!(!ticks.contains(&1.0e6));
        assert_eq!(temperature_label(30_000.0), "30,000K");
    }

    #[test]
    fn test_luminosity_legend_covers_range() {
        assert_eq!(LUMINOSITY_LEGEND[0].0, -1.0);
        assert_eq!(LUMINOSITY_LEGEND[8], (7.0, "10,000,000 x brighter"));
    }
}
