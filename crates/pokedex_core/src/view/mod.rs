//! Presentation-agnostic projections consumed by the UI layer.
//!
//! # Responsibility
//! - Shape records into list cards, detail views and stat bars.
//! - Parse and format navigation routes.
//!
//! # Invariants
//! - Projections never mutate records.
//! - Unknown detail ids resolve to an absent view, not an error.

pub mod projection;
pub mod route;

pub use projection::{DetailView, ListItem, StatBar};
pub use route::Route;
