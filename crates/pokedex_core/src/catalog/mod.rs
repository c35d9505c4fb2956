//! Bundled catalog loading and record lookup.
//!
//! # Responsibility
//! - Parse the bundled JSON asset into an ordered, immutable `Catalog`.
//! - Resolve records by id for detail views and note keying.
//! - Run the blocking read off the caller's thread when asked to.
//!
//! # Invariants
//! - Loading is all-or-nothing: one bad record fails the whole catalog.
//! - Record ids are unique; duplicates reject the load.
//! - Catalog order is document order.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

mod background;
mod index;
mod loader;

pub use background::{spawn_load, LoadState, PendingCatalog};
pub use index::Catalog;
pub use loader::{load_catalog, load_catalog_from_reader, load_catalog_from_str};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Coarse error category, stable across message wording changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErrorKind {
    AssetMissing,
    MalformedCatalog,
    LoaderUnavailable,
}

impl CatalogErrorKind {
    /// Stable snake_case code used in log events and FFI responses.
    pub fn code(self) -> &'static str {
        match self {
            Self::AssetMissing => "asset_missing",
            Self::MalformedCatalog => "malformed_catalog",
            Self::LoaderUnavailable => "loader_unavailable",
        }
    }
}

/// Fatal catalog construction failure.
#[derive(Debug)]
pub enum CatalogError {
    /// The asset could not be opened or read.
    AssetMissing { origin: String, error: io::Error },
    /// The asset was read but is not a valid catalog document.
    MalformedCatalog { origin: String, detail: String },
    /// The background loader could not start or exited without a result.
    LoaderUnavailable { origin: String, detail: String },
}

impl CatalogError {
    pub fn kind(&self) -> CatalogErrorKind {
        match self {
            Self::AssetMissing { .. } => CatalogErrorKind::AssetMissing,
            Self::MalformedCatalog { .. } => CatalogErrorKind::MalformedCatalog,
            Self::LoaderUnavailable { .. } => CatalogErrorKind::LoaderUnavailable,
        }
    }

    pub(crate) fn malformed(origin: &str, detail: impl Into<String>) -> Self {
        Self::MalformedCatalog {
            origin: origin.to_string(),
            detail: detail.into(),
        }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AssetMissing { origin, error } => {
                write!(f, "catalog asset `{origin}` is missing: {error}")
            }
            Self::MalformedCatalog { origin, detail } => {
                write!(f, "catalog asset `{origin}` is malformed: {detail}")
            }
            Self::LoaderUnavailable { origin, detail } => {
                write!(f, "catalog loader for `{origin}` is unavailable: {detail}")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AssetMissing { error, .. } => Some(error),
            Self::MalformedCatalog { .. } | Self::LoaderUnavailable { .. } => None,
        }
    }
}
