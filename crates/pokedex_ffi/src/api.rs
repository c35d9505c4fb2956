//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the loaded catalog inside an opaque session handed to the UI.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Catalog loading is never a `sync` call; FRB runs it off the UI thread.
//! - Note reads/writes open a fresh connection per call.

use log::warn;
use pokedex_core::db::open_db;
use pokedex_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, load_catalog,
    ping as ping_inner, AppPaths, Catalog, DetailView, ListItem, MemoryNoteStore, Pokedex,
    SqliteNoteStore, StatBar,
};
use std::path::PathBuf;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// List card data for one creature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonListItem {
    pub id: i64,
    /// `#001` style label.
    pub number_label: String,
    pub name: String,
    pub types: Vec<String>,
    /// Thumbnail path relative to the asset root.
    pub thumbnail: String,
}

/// One stat bar row.
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonStatBar {
    pub label: String,
    pub value: u32,
    pub max: u32,
    pub ratio: f32,
}

/// Detail screen data for one creature.
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonDetail {
    pub id: i64,
    pub title: String,
    pub name: String,
    pub types: Vec<String>,
    pub thumbnail: String,
    pub stat_bars: Vec<PokemonStatBar>,
    pub note: String,
    pub note_label: String,
}

/// Result envelope for note writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSaveResponse {
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Loaded catalog plus the notes database location for one UI session.
#[flutter_rust_bridge::frb(opaque)]
pub struct PokedexSession {
    catalog: Catalog,
    db_path: PathBuf,
}

/// Loads the bundled catalog and prepares the notes database.
///
/// Blank arguments fall back to `POKEDEX_ASSET_ROOT` / `POKEDEX_DB_PATH` and
/// then to built-in defaults.
///
/// # FFI contract
/// - Async call (runs on the FRB worker pool), blocking file IO inside.
/// - Error string starts with a stable code: `asset_missing`,
///   `malformed_catalog` or `notes_db_failed`.
pub fn open_session(asset_root: String, db_path: String) -> Result<PokedexSession, String> {
    let paths = resolve_paths(&asset_root, &db_path);

    let catalog = load_catalog(paths.catalog_path())
        .map_err(|err| format!("{}: {err}", err.kind().code()))?;
    // Fail early so the UI learns about storage problems before the first edit.
    open_db(&paths.notes_db_path).map_err(|err| format!("notes_db_failed: {err}"))?;

    Ok(PokedexSession {
        catalog,
        db_path: paths.notes_db_path,
    })
}

impl PokedexSession {
    /// Number of loaded records.
    #[flutter_rust_bridge::frb(sync)]
    pub fn record_count(&self) -> u32 {
        u32::try_from(self.catalog.len()).unwrap_or(u32::MAX)
    }

    /// List rows in catalog order.
    ///
    /// # FFI contract
    /// - Sync call, in-memory only.
    #[flutter_rust_bridge::frb(sync)]
    pub fn list_items(&self) -> Vec<PokemonListItem> {
        self.catalog
            .iter()
            .map(ListItem::from_record)
            .map(to_list_item)
            .collect()
    }

    /// Detail view for `id`, or `None` when the id is unknown.
    ///
    /// # FFI contract
    /// - Sync call, reads one note row.
    /// - Note storage failures degrade to an empty note and are logged.
    #[flutter_rust_bridge::frb(sync)]
    pub fn detail(&self, id: i64) -> Option<PokemonDetail> {
        self.with_pokedex(|pokedex| pokedex.detail(id).map_err(|err| err.to_string()))
            .unwrap_or_else(|err| {
                warn!(
                    "event=detail_load module=ffi status=degraded record_id={} error={}",
                    id, err
                );
                self.without_notes().detail(id).ok().flatten()
            })
            .map(to_detail)
    }

    /// Detail view for a `pokemonDetail/{id}` route.
    ///
    /// # FFI contract
    /// - Same degradation as `detail` when note storage fails.
    #[flutter_rust_bridge::frb(sync)]
    pub fn detail_for_route(&self, route: String) -> Option<PokemonDetail> {
        self.with_pokedex(|pokedex| {
            pokedex
                .detail_for_route(&route)
                .map_err(|err| err.to_string())
        })
        .unwrap_or_else(|err| {
            warn!(
                "event=detail_load module=ffi status=degraded route={} error={}",
                route, err
            );
            self.without_notes().detail_for_route(&route).ok().flatten()
        })
        .map(to_detail)
    }

    /// Saved note for `id`; empty string when none exists or storage fails.
    #[flutter_rust_bridge::frb(sync)]
    pub fn note_get(&self, id: i64) -> String {
        self.with_pokedex(|pokedex| pokedex.note(id).map_err(|err| err.to_string()))
            .unwrap_or_else(|err| {
                warn!(
                    "event=note_load module=ffi status=degraded record_id={} error={}",
                    id, err
                );
                String::new()
            })
    }

    /// Overwrites the note for `id`.
    ///
    /// # FFI contract
    /// - Sync call, one upsert; callers may debounce keystroke-level edits.
    /// - Never panics; returns `ok=false` with a message on failure.
    #[flutter_rust_bridge::frb(sync)]
    pub fn note_set(&self, id: i64, text: String) -> NoteSaveResponse {
        match self.with_pokedex(|pokedex| {
            pokedex
                .save_note(id, text.as_str())
                .map_err(|err| err.to_string())
        }) {
            Ok(()) => NoteSaveResponse {
                ok: true,
                message: "Note saved.".to_string(),
            },
            Err(err) => NoteSaveResponse {
                ok: false,
                message: format!("note_set failed: {err}"),
            },
        }
    }

    fn with_pokedex<T>(
        &self,
        f: impl FnOnce(&Pokedex<'_, SqliteNoteStore<'_>>) -> Result<T, String>,
    ) -> Result<T, String> {
        let conn = open_db(&self.db_path).map_err(|err| format!("notes DB open failed: {err}"))?;
        let store = SqliteNoteStore::try_new(&conn)
            .map_err(|err| format!("note store init failed: {err}"))?;
        let pokedex = Pokedex::new(&self.catalog, store);
        f(&pokedex)
    }

    /// Catalog-only facade; every note reads as empty.
    fn without_notes(&self) -> Pokedex<'_, MemoryNoteStore> {
        Pokedex::new(&self.catalog, MemoryNoteStore::new())
    }
}

fn resolve_paths(asset_root: &str, db_path: &str) -> AppPaths {
    let defaults = AppPaths::from_env();
    let asset_root = asset_root.trim();
    let db_path = db_path.trim();
    AppPaths::new(
        if asset_root.is_empty() {
            defaults.asset_root
        } else {
            PathBuf::from(asset_root)
        },
        if db_path.is_empty() {
            defaults.notes_db_path
        } else {
            PathBuf::from(db_path)
        },
    )
}

fn to_list_item(item: ListItem) -> PokemonListItem {
    PokemonListItem {
        id: item.id,
        number_label: item.number_label,
        name: item.name,
        types: item.types,
        thumbnail: item.thumbnail,
    }
}

fn to_stat_bar(bar: StatBar) -> PokemonStatBar {
    PokemonStatBar {
        label: bar.label,
        value: bar.value,
        max: bar.max,
        ratio: bar.ratio,
    }
}

fn to_detail(view: DetailView) -> PokemonDetail {
    PokemonDetail {
        id: view.id,
        title: view.title,
        name: view.name,
        types: view.types,
        thumbnail: view.thumbnail,
        stat_bars: view.stat_bars.into_iter().map(to_stat_bar).collect(),
        note: view.note,
        note_label: view.note_label,
    }
}

#[cfg(test)]
mod tests {
    use super::{core_version, init_logging, open_session, ping, PokedexSession};
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    fn asset_root_with(document: serde_json::Value) -> TempDir {
        let root = tempfile::tempdir().expect("create asset root");
        let dir = root.path().join("pokemon.json-master");
        fs::create_dir_all(&dir).expect("create asset dir");
        fs::write(
            dir.join("pokedex.json"),
            serde_json::to_vec(&document).expect("serialize asset"),
        )
        .expect("write asset");
        root
    }

    fn open(root: &TempDir) -> PokedexSession {
        let db_path = root.path().join("notes.sqlite3");
        open_session(
            root.path().to_str().expect("utf-8 path").to_string(),
            db_path.to_str().expect("utf-8 path").to_string(),
        )
        .expect("session should open")
    }

    fn squirtle() -> serde_json::Value {
        json!({
            "id": 7,
            "name": { "english": "Squirtle" },
            "type": ["Water"],
            "base": {
                "HP": 44, "Attack": 48, "Defense": 65,
                "Sp. Attack": 50, "Sp. Defense": 64, "Speed": 43
            }
        })
    }

    #[test]
    fn session_lists_and_resolves_details() {
        let root = asset_root_with(json!([squirtle()]));
        let session = open(&root);

        assert_eq!(session.record_count(), 1);
        let items = session.list_items();
        assert_eq!(items[0].number_label, "#007");
        assert_eq!(items[0].thumbnail, "pokemon.json-master/thumbnails/007.png");

        let detail = session
            .detail_for_route("pokemonDetail/7".to_string())
            .expect("id 7 should resolve");
        assert_eq!(detail.title, "#007 Squirtle");
        assert_eq!(detail.stat_bars.len(), 6);
        assert!(session.detail(8).is_none());
    }

    #[test]
    fn notes_round_trip_across_sessions() {
        let root = asset_root_with(json!([squirtle()]));
        let first = open(&root);
        assert_eq!(first.note_get(7), "");

        let saved = first.note_set(7, "hello".to_string());
        assert!(saved.ok, "{}", saved.message);
        drop(first);

        let second = open(&root);
        assert_eq!(second.note_get(7), "hello");
        assert_eq!(second.detail(7).expect("id 7").note, "hello");

        let rejected = second.note_set(99, "nobody".to_string());
        assert!(!rejected.ok);
        assert!(rejected.message.contains("record not found"));
    }

    #[test]
    fn details_degrade_to_empty_note_when_storage_breaks() {
        let root = asset_root_with(json!([squirtle()]));
        let session = open(&root);
        assert!(session.note_set(7, "shell".to_string()).ok);

        fs::write(root.path().join("notes.sqlite3"), vec![b'x'; 4096])
            .expect("corrupt notes db");

        let by_route = session
            .detail_for_route("pokemonDetail/7".to_string())
            .expect("catalog record still resolves");
        assert_eq!(by_route.title, "#007 Squirtle");
        assert_eq!(by_route.note, "");
        assert_eq!(session.detail(7).expect("id 7").note, "");
        assert!(session
            .detail_for_route("pokemonDetail/8".to_string())
            .is_none());
        assert!(session.detail_for_route("pokemonList".to_string()).is_none());
        assert!(!session.note_set(7, "again".to_string()).ok);
    }

    #[test]
    fn open_session_reports_error_codes() {
        let empty_root = tempfile::tempdir().expect("create empty root");
        let missing = open_session(
            empty_root.path().to_str().expect("utf-8 path").to_string(),
            empty_root
                .path()
                .join("notes.sqlite3")
                .to_str()
                .expect("utf-8 path")
                .to_string(),
        )
        .err()
        .expect("missing asset must fail");
        assert!(missing.starts_with("asset_missing"));

        let malformed_root = asset_root_with(json!({ "not": "an array" }));
        let malformed = open_session(
            malformed_root.path().to_str().expect("utf-8 path").to_string(),
            String::new(),
        )
        .err()
        .expect("malformed asset must fail");
        assert!(malformed.starts_with("malformed_catalog"));
    }
}
