//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog lookups and note persistence into use-case APIs.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod pokedex_service;
