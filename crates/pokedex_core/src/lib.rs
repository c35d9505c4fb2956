//! Core domain logic for the local Pokédex.
//! This crate is the single source of truth for catalog and note invariants.

pub mod catalog;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use catalog::{
    load_catalog, load_catalog_from_reader, load_catalog_from_str, spawn_load, Catalog,
    CatalogError, CatalogErrorKind, CatalogResult, LoadState, PendingCatalog,
};
pub use config::AppPaths;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{BaseStats, Record, RecordId, RecordName, StatKind};
pub use repo::note_store::{
    MemoryNoteStore, NoteStore, RepoError, RepoResult, SqliteNoteStore, NOTE_STORE_NAME,
};
pub use service::pokedex_service::{Pokedex, PokedexError};
pub use view::{DetailView, ListItem, Route, StatBar};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
