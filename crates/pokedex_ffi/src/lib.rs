//! Flutter-facing bindings for the Pokédex core.

pub mod api;
