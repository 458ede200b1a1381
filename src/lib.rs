//! Step-by-step Dijkstra search on an editable grid, with a terminal visualizer.
//!
//! The [`GridWorld`] engine owns the walls, the endpoints and the search state, and advances the
//! search one settled cell per [`GridWorld::step`] call. The [`App`] drives it from the keyboard
//! and renders every intermediate state with Ratatui.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod config;
mod error;
mod events;
mod grid;
mod logging;
mod types;
mod ui;
mod world;

pub use app::App;
pub use config::Config;
pub use error::WorldError;
pub use grid::Point;
pub use logging::init_logging;
pub use world::{GridWorld, SearchStatus};
