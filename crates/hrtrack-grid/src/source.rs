//! Loading the read-only data sources from RON files.
//!
//! The layouts here are the application's own interchange format; converting
//! upstream model grids or catalogs into it happens outside this crate.

use std::path::Path;

use hrtrack_physics::{ColorRow, ColorTable};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::GridError;
use crate::provider::{InMemoryGrid, TrackRecord};

/// On-disk layout of `grid.ron`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridFile {
    pub tracks: Vec<TrackRecord>,
}

/// A background star in the HR diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogStar {
    pub log_teff: f64,
    pub log_lum: f64,
}

/// Background stars drawn for visual context only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    pub stars: Vec<CatalogStar>,
}

impl ReferenceCatalog {
    /// Load a catalog from a RON file.
    pub fn load(path: &Path) -> Result<Self, GridError> {
        let catalog: Self = read_ron(path)?;
        info!(
            "Loaded {} reference stars from {}",
            catalog.stars.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// `(log_teff, log_lum)` pairs.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.stars.iter().map(|s| (s.log_teff, s.log_lum)).collect()
    }
}

impl InMemoryGrid {
    /// Load and validate a grid from a RON file.
    pub fn load(path: &Path) -> Result<Self, GridError> {
        let file: GridFile = read_ron(path)?;
        let grid = Self::from_records(file.tracks)?;
        info!(
            "Loaded {} evolutionary tracks from {}",
            grid.track_count(),
            path.display()
        );
        Ok(grid)
    }
}

/// Load the color calibration rows from a RON file and keep `calibration`.
pub fn load_color_table(path: &Path, calibration: &str) -> Result<ColorTable, GridError> {
    let rows: Vec<ColorRow> = read_ron(path)?;
    let table = ColorTable::from_rows(&rows, calibration)?;
    info!(
        "Loaded {} `{calibration}` color rows from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

fn read_ron<T: DeserializeOwned>(path: &Path) -> Result<T, GridError> {
    let contents = std::fs::read_to_string(path).map_err(|source| GridError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| GridError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
