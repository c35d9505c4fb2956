//! Persistence contracts and implementations.
//!
//! # Responsibility
//! - Define the note store contract consumed by services and FFI.
//! - Isolate SQLite query details from presentation code.

pub mod note_store;
