//! Stellar evolution grid access: evolutionary tracks, grid snapping and the
//! per-track habitable-zone cache.
//!
//! The grid itself sits behind the [`TrackGrid`] trait, an exact-key lookup
//! with explicit out-of-range and not-found results. [`InMemoryGrid`] is the
//! provider used by the application, loaded from RON by [`source`].

mod error;
pub mod hz_cache;
pub mod provider;
pub mod resolver;
pub mod source;
pub mod track;

pub use error::{Axis, GridError, TrackError};
pub use hz_cache::HabitableZoneSeries;
pub use provider::{GridKey, InMemoryGrid, TrackGrid, TrackRecord};
pub use resolver::{
    ResolvedTrack, SnapNotice, TrackResolver, main_sequence_reference_curve, snap_to_axis,
};
pub use source::{CatalogStar, GridFile, ReferenceCatalog, load_color_table};
pub use track::{EvolutionaryTrack, TrackSample};
