//! Pokédex use-case service.
//!
//! # Responsibility
//! - Expose list/detail/note use-cases over a session's `Catalog`.
//! - Resolve navigation routes through the record index.
//!
//! # Invariants
//! - The catalog is borrowed read-only; the session that loaded it owns it.
//! - Notes are only written for ids present in the catalog.
//! - Unknown detail ids resolve to `None`.

use crate::catalog::Catalog;
use crate::model::record::{Record, RecordId};
use crate::repo::note_store::{NoteStore, RepoError, RepoResult};
use crate::view::{DetailView, ListItem, Route};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note-writing use-cases.
#[derive(Debug)]
pub enum PokedexError {
    /// Target record is not part of the loaded catalog.
    RecordNotFound(RecordId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for PokedexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RecordNotFound(id) => write!(f, "record not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PokedexError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::RecordNotFound(_) => None,
        }
    }
}

impl From<RepoError> for PokedexError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case facade over a loaded catalog and a note store.
pub struct Pokedex<'cat, S: NoteStore> {
    catalog: &'cat Catalog,
    notes: S,
}

impl<'cat, S: NoteStore> Pokedex<'cat, S> {
    pub fn new(catalog: &'cat Catalog, notes: S) -> Self {
        Self { catalog, notes }
    }

    pub fn catalog(&self) -> &'cat Catalog {
        self.catalog
    }

    /// List rows in catalog order.
    pub fn list_items(&self) -> Vec<ListItem> {
        self.catalog.iter().map(ListItem::from_record).collect()
    }

    pub fn record(&self, id: RecordId) -> Option<&'cat Record> {
        self.catalog.find(id)
    }

    /// Detail projection for `id`, including its saved note.
    ///
    /// Returns `Ok(None)` for ids outside the catalog.
    pub fn detail(&self, id: RecordId) -> RepoResult<Option<DetailView>> {
        let Some(record) = self.catalog.find(id) else {
            return Ok(None);
        };
        let note = self.notes.get(id)?;
        Ok(Some(DetailView::from_record(record, note)))
    }

    /// Resolves a route string to its detail view.
    ///
    /// List routes, unknown routes and unknown ids all yield `Ok(None)`.
    pub fn detail_for_route(&self, route: &str) -> RepoResult<Option<DetailView>> {
        match Route::parse(route) {
            Some(Route::Detail(id)) => self.detail(id),
            Some(Route::List) | None => Ok(None),
        }
    }

    /// Saved note for `id`, empty when none exists.
    pub fn note(&self, id: RecordId) -> RepoResult<String> {
        self.notes.get(id)
    }

    /// Overwrites the note for a catalog record.
    pub fn save_note(&self, id: RecordId, text: &str) -> Result<(), PokedexError> {
        if !self.catalog.contains(id) {
            return Err(PokedexError::RecordNotFound(id));
        }
        self.notes.set(id, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Pokedex, PokedexError};
    use crate::catalog::{load_catalog_from_str, Catalog};
    use crate::repo::note_store::MemoryNoteStore;

    const TWO_RECORDS: &str = r#"[
        {"id":1,"name":{"english":"Bulbasaur"},"type":["Grass","Poison"],
         "base":{"HP":45,"Attack":49,"Defense":49,"Sp. Attack":65,"Sp. Defense":65,"Speed":45}},
        {"id":4,"name":{"english":"Charmander"},"type":["Fire"],
         "base":{"HP":39,"Attack":52,"Defense":43,"Sp. Attack":60,"Sp. Defense":50,"Speed":65}}
    ]"#;

    fn catalog() -> Catalog {
        load_catalog_from_str("inline", TWO_RECORDS).unwrap()
    }

    #[test]
    fn list_items_keep_catalog_order() {
        let catalog = catalog();
        let names: Vec<String> = Pokedex::new(&catalog, MemoryNoteStore::new())
            .list_items()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["Bulbasaur".to_string(), "Charmander".to_string()]);
    }

    #[test]
    fn detail_reads_back_saved_note() {
        let catalog = catalog();
        let pokedex = Pokedex::new(&catalog, MemoryNoteStore::new());
        pokedex.save_note(4, "starter").unwrap();

        let view = pokedex.detail(4).unwrap().expect("id 4 is in the catalog");
        assert_eq!(view.note, "starter");
        assert!(pokedex.detail(7).unwrap().is_none());
    }

    #[test]
    fn route_resolution_ignores_list_and_unknown_routes() {
        let catalog = catalog();
        let pokedex = Pokedex::new(&catalog, MemoryNoteStore::new());
        assert!(pokedex.detail_for_route("pokemonList").unwrap().is_none());
        assert!(pokedex.detail_for_route("pokemonDetail/abc").unwrap().is_none());
        let view = pokedex
            .detail_for_route("pokemonDetail/1")
            .unwrap()
            .expect("id 1 is in the catalog");
        assert_eq!(view.name, "Bulbasaur");
    }

    #[test]
    fn save_note_rejects_unknown_record() {
        let catalog = catalog();
        let err = Pokedex::new(&catalog, MemoryNoteStore::new())
            .save_note(7, "ghost")
            .unwrap_err();
        assert!(matches!(err, PokedexError::RecordNotFound(7)));
    }
}
