//! Per-record note persistence contracts and implementations.
//!
//! # Responsibility
//! - Store one free-text note per record id under the `pokemon_notes` store.
//! - Keep storage details away from views and FFI callers.
//!
//! # Invariants
//! - `get` on an id that was never written returns an empty string.
//! - `set` overwrites unconditionally; the last write wins.
//! - Writes are durable once `set` returns (SQLite implementation).

use crate::db::DbError;
use crate::model::record::RecordId;
use log::{debug, error};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, PoisonError};

/// Fixed store name; also the SQLite table holding notes.
pub const NOTE_STORE_NAME: &str = "pokemon_notes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Note store error for persistence and schema checks.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "note store is not migrated: missing table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "note store is not migrated: missing column `{table}.{column}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable free-text value per record id.
pub trait NoteStore {
    /// Returns the saved note, or an empty string when none exists.
    fn get(&self, id: RecordId) -> RepoResult<String>;
    /// Replaces the note for `id`.
    fn set(&self, id: RecordId, text: &str) -> RepoResult<()>;
}

impl<S: NoteStore + ?Sized> NoteStore for &S {
    fn get(&self, id: RecordId) -> RepoResult<String> {
        (**self).get(id)
    }

    fn set(&self, id: RecordId, text: &str) -> RepoResult<()> {
        (**self).set(id, text)
    }
}

/// SQLite-backed note store.
pub struct SqliteNoteStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteStore<'conn> {
    /// Constructs a store from a migrated connection.
    ///
    /// Fails when the notes table or its columns are absent, so a connection
    /// that skipped `open_db` never reaches the query paths.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_note_table_ready(conn)?;
        Ok(Self { conn })
    }
}

impl NoteStore for SqliteNoteStore<'_> {
    fn get(&self, id: RecordId) -> RepoResult<String> {
        let content = self
            .conn
            .query_row(
                "SELECT content FROM pokemon_notes WHERE record_id = ?1;",
                [id],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(content.unwrap_or_default())
    }

    fn set(&self, id: RecordId, text: &str) -> RepoResult<()> {
        let written = self.conn.execute(
            "INSERT INTO pokemon_notes (record_id, content, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(record_id) DO UPDATE SET
                content = excluded.content,
                updated_at = excluded.updated_at;",
            params![id, text],
        );

        match written {
            Ok(_) => {
                debug!(
                    "event=note_save module=repo status=ok record_id={} content_len={}",
                    id,
                    text.chars().count()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=note_save module=repo status=error record_id={} error={}",
                    id, err
                );
                Err(err.into())
            }
        }
    }
}

/// Process-local note store, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    notes: Mutex<HashMap<RecordId, String>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteStore for MemoryNoteStore {
    fn get(&self, id: RecordId) -> RepoResult<String> {
        let notes = self.notes.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(notes.get(&id).cloned().unwrap_or_default())
    }

    fn set(&self, id: RecordId, text: &str) -> RepoResult<()> {
        let mut notes = self.notes.lock().unwrap_or_else(PoisonError::into_inner);
        notes.insert(id, text.to_string());
        Ok(())
    }
}

fn ensure_note_table_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, NOTE_STORE_NAME)? {
        return Err(RepoError::MissingRequiredTable(NOTE_STORE_NAME));
    }

    for column in ["record_id", "content", "updated_at"] {
        if !table_has_column(conn, NOTE_STORE_NAME, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: NOTE_STORE_NAME,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::{MemoryNoteStore, NoteStore, RepoError, SqliteNoteStore};
    use crate::db::open_db_in_memory;
    use rusqlite::Connection;

    #[test]
    fn memory_store_round_trips_and_defaults_to_empty() {
        let store = MemoryNoteStore::new();
        assert_eq!(store.get(1).unwrap(), "");

        store.set(1, "hello").unwrap();
        store.set(1, "hello again").unwrap();
        assert_eq!(store.get(1).unwrap(), "hello again");
        assert_eq!(store.get(2).unwrap(), "");
    }

    #[test]
    fn sqlite_store_rejects_unmigrated_connection() {
        let conn = Connection::open_in_memory().unwrap();
        let err = SqliteNoteStore::try_new(&conn)
            .err()
            .expect("unmigrated connection must be rejected");
        assert!(matches!(err, RepoError::MissingRequiredTable("pokemon_notes")));
    }

    #[test]
    fn sqlite_store_rejects_table_missing_a_column() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE pokemon_notes (record_id INTEGER PRIMARY KEY, content TEXT NOT NULL);",
        )
        .unwrap();

        let err = SqliteNoteStore::try_new(&conn)
            .err()
            .expect("table without updated_at must be rejected");
        assert!(matches!(
            err,
            RepoError::MissingRequiredColumn {
                table: "pokemon_notes",
                column: "updated_at",
            }
        ));
    }

    #[test]
    fn sqlite_store_overwrites_with_last_write() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteNoteStore::try_new(&conn).unwrap();

        store.set(25, "first").unwrap();
        store.set(25, "second").unwrap();
        assert_eq!(store.get(25).unwrap(), "second");

        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM pokemon_notes;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }
}
