//! Bundled asset locations and runtime path configuration.
//!
//! # Responsibility
//! - Name the fixed bundled paths for the catalog and thumbnails.
//! - Resolve the asset root and notes database path from the environment.
//!
//! # Invariants
//! - Blank environment values fall back to defaults instead of empty paths.

use crate::model::record::Record;
use std::path::PathBuf;

/// Catalog document, relative to the asset root.
pub const CATALOG_ASSET_PATH: &str = "pokemon.json-master/pokedex.json";
/// Thumbnail directory, relative to the asset root.
pub const THUMBNAIL_ASSET_DIR: &str = "pokemon.json-master/thumbnails";

pub const ASSET_ROOT_ENV: &str = "POKEDEX_ASSET_ROOT";
pub const DB_PATH_ENV: &str = "POKEDEX_DB_PATH";

const DEFAULT_ASSET_ROOT: &str = "assets";
const DEFAULT_DB_FILE_NAME: &str = "pokedex_notes.sqlite3";

/// Filesystem locations used by one application session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub asset_root: PathBuf,
    pub notes_db_path: PathBuf,
}

impl AppPaths {
    pub fn new(asset_root: impl Into<PathBuf>, notes_db_path: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: asset_root.into(),
            notes_db_path: notes_db_path.into(),
        }
    }

    /// Reads `POKEDEX_ASSET_ROOT` and `POKEDEX_DB_PATH`, falling back to
    /// `assets/` and a file in the system temp directory.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let asset_root = non_blank(lookup(ASSET_ROOT_ENV))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_ROOT));
        let notes_db_path = non_blank(lookup(DB_PATH_ENV))
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        Self {
            asset_root,
            notes_db_path,
        }
    }

    /// Absolute location of the catalog document.
    pub fn catalog_path(&self) -> PathBuf {
        self.asset_root.join(CATALOG_ASSET_PATH)
    }

    /// Absolute location of a record's thumbnail image.
    pub fn thumbnail_path(&self, record: &Record) -> PathBuf {
        self.asset_root.join(thumbnail_asset_path(record))
    }
}

/// Thumbnail location relative to the asset root, e.g.
/// `pokemon.json-master/thumbnails/001.png`.
pub fn thumbnail_asset_path(record: &Record) -> String {
    format!("{THUMBNAIL_ASSET_DIR}/{}", record.thumbnail_file_name())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
