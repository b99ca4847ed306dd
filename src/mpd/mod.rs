//! MPD-side input: configuration discovery and database parsing

mod config;
mod database;
mod model;

pub use config::{db_file_from_config, find_db_file};
pub use database::{group_by_artist, parse_database};

use crate::model::Track;
use anyhow::Result;
use std::path::Path;

/// Load every track from the MPD database at `path`, grouped by artist with
/// the bucket order shuffled.
pub fn load_tracks(path: &Path) -> Result<Vec<Track>> {
    let tracks = parse_database(path)?;
    Ok(group_by_artist(tracks))
}
