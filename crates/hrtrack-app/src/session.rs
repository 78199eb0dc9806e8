//! Loads the data sources named by the config and plays one animation.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use crossbeam_channel::Receiver;
use hrtrack_anim::{
    AnimationState, Driver, DriverOptions, InputCommand, KeyBindings, OutputSink,
};
use hrtrack_config::Config;
use hrtrack_grid::{
    InMemoryGrid, ReferenceCatalog, ResolvedTrack, TrackResolver, load_color_table,
};
use hrtrack_physics::ColorTable;
use tracing::{info, warn};

use crate::error::AppError;

pub const GRID_FILE: &str = "grid.ron";
pub const COLORS_FILE: &str = "colors.ron";
pub const CATALOG_FILE: &str = "catalog.ron";

/// Read-only tables shared by the whole session.
#[derive(Debug)]
pub struct DataSources {
    pub grid: InMemoryGrid,
    pub colors: ColorTable,
    pub catalog: ReferenceCatalog,
}

impl DataSources {
    /// Load everything from `data_dir`. A missing catalog only removes the
    /// background stars.
    pub fn load(data_dir: &Path, calibration: &str) -> Result<Self, AppError> {
        let grid = InMemoryGrid::load(&data_dir.join(GRID_FILE))?;
        let colors = load_color_table(&data_dir.join(COLORS_FILE), calibration)?;
        let catalog_path = data_dir.join(CATALOG_FILE);
        let catalog = match ReferenceCatalog::load(&catalog_path) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("No background stars: {e}");
                ReferenceCatalog::default()
            }
        };
        Ok(Self {
            grid,
            colors,
            catalog,
        })
    }
}

/// Playback options from the config.
pub fn driver_options(config: &Config) -> DriverOptions {
    DriverOptions {
        interval: Duration::from_millis(config.animation.interval_ms),
        frame_limit: usize::try_from(config.animation.frame_limit).unwrap_or(usize::MAX),
        repeat: config.animation.repeat,
    }
}

/// Resolve the configured star against the grid.
pub fn resolve_star(config: &Config, grid: &InMemoryGrid) -> Result<ResolvedTrack, AppError> {
    let resolved = TrackResolver::new(grid).resolve(config.star.mass, config.star.metallicity)?;
    info!(
        mass = resolved.mass,
        metallicity = resolved.metallicity,
        samples = resolved.track.len(),
        "Animating star"
    );
    Ok(resolved)
}

/// Play the configured star into `sink` until it finishes or `stop` is set.
/// Returns the number of frames rendered.
pub fn play<S: OutputSink>(
    config: &Config,
    data: &DataSources,
    sink: S,
    commands: Receiver<InputCommand>,
    stop: &AtomicBool,
) -> Result<usize, AppError> {
    let resolved = resolve_star(config, &data.grid)?;
    let main_sequence = TrackResolver::new(&data.grid).main_sequence_reference_curve();
    let state = AnimationState::from_resolved(
        resolved,
        &data.colors,
        config.display.solar_system_scale(),
    )?;

    let mut driver = Driver::new(state, sink, commands, driver_options(config));
    Ok(driver.run(&data.catalog.points(), &main_sequence, stop))
}

/// Everything `main` needs once the config is settled.
pub struct Session {
    pub config: Config,
    pub data_dir: PathBuf,
    pub bindings: KeyBindings,
    pub stop: Arc<AtomicBool>,
}

impl Session {
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let bindings = KeyBindings::from_overrides(&config.input.keybindings)?;
        Ok(Self {
            data_dir: config.data.data_dir.clone(),
            config,
            bindings,
            stop: Arc::new(AtomicBool::new(false)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use hrtrack_anim::RecordingSink;
    use hrtrack_grid::{GridError, GridFile, TrackRecord, TrackSample};
    use hrtrack_physics::ColorRow;

    fn write_data(dir: &Path) {
        let tracks = [0.5, 1.0, 2.0]
            .into_iter()
            .map(|mass| TrackRecord {
                metallicity: 0.0,
                mass,
                samples: (0..4)
                    .map(|i| TrackSample {
                        age: 1.0e8 * (i as f64 + 1.0),
                        log_teff: 3.76,
                        log_lum: 0.1 * i as f64,
                        radius: mass,
                        mass,
                    })
                    .collect(),
            })
            .collect();
        let grid = GridFile { tracks };
        let colors = vec![
            ColorRow {
                temperature: 3000.0,
                calibration: "2deg".to_string(),
                r: 1.0,
                g: 0.5,
                b: 0.2,
            },
            ColorRow {
                temperature: 9000.0,
                calibration: "2deg".to_string(),
                r: 0.8,
                g: 0.8,
                b: 1.0,
            },
        ];
        let pretty = ron::ser::PrettyConfig::default();
        std::fs::write(
            dir.join(GRID_FILE),
            ron::ser::to_string_pretty(&grid, pretty.clone()).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir.join(COLORS_FILE),
            ron::ser::to_string_pretty(&colors, pretty).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn test_plays_configured_star() {
        let tmp = tempfile::tempdir().unwrap();
        write_data(tmp.path());
        let data = DataSources::load(tmp.path(), "2deg").unwrap();
        assert!(data.catalog.stars.is_empty());

        let mut config = Config::default();
        config.animation.interval_ms = 1;
        config.star.mass = 0.7;
        let (_tx, rx) = unbounded();
        let mut sink = RecordingSink::default();
        let stop = AtomicBool::new(false);
        let frames = play(&config, &data, &mut sink, rx, &stop).unwrap();

        assert_eq!(frames, 4);
        assert_eq!(sink.batches.len(), 4);
        assert!(!sink.elements.is_empty());
    }

    #[test]
    fn test_closed_input_plays_every_frame() {
        let tmp = tempfile::tempdir().unwrap();
        write_data(tmp.path());
        let data = DataSources::load(tmp.path(), "2deg").unwrap();

        let mut config = Config::default();
        config.animation.interval_ms = 1;
        config.animation.frame_limit = 4;
        let (tx, rx) = unbounded();
        let stop = AtomicBool::new(false);
        let bindings = KeyBindings::default();
        crate::input::forward_lines(std::io::Cursor::new(""), &bindings, &tx, &stop);
        drop(tx);

        let mut sink = RecordingSink::default();
        let frames = play(&config, &data, &mut sink, rx, &stop).unwrap();
        assert_eq!(frames, 4);
        assert_eq!(sink.batches.len(), 4);
    }

    #[test]
    fn test_out_of_range_mass_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        write_data(tmp.path());
        let data = DataSources::load(tmp.path(), "2deg").unwrap();
        let mut config = Config::default();
        config.star.mass = 5.0;

        let err = resolve_star(&config, &data.grid).unwrap_err();
        assert!(matches!(err, AppError::Grid(GridError::OutOfRange { .. })));
        assert!(err.to_string().contains("[0.5, 2]"));
    }

    #[test]
    fn test_missing_grid_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(DataSources::load(tmp.path(), "2deg").is_err());
    }

    #[test]
    fn test_session_rejects_bad_binding() {
        let mut config = Config::default();
        config
            .input
            .keybindings
            .insert("z".to_string(), "warp".to_string());
        assert!(matches!(Session::new(config), Err(AppError::Binding(_))));
    }

    #[test]
    fn test_driver_options_from_config() {
        let mut config = Config::default();
        config.animation.frame_limit = 12;
        config.animation.repeat = true;
        let options = driver_options(&config);
        assert_eq!(options.interval, Duration::from_millis(100));
        assert_eq!(options.frame_limit, 12);
        assert!(options.repeat);
    }
}
