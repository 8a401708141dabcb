//! Placement scoring engine for RF GRID.
//!
//! Scores boards of placed RF components, evaluates level objectives, and
//! runs the single-player game controller that produces
//! `GameStateSnapshot`s for the frontend.

pub mod board;
pub mod engine;
pub mod level;
pub mod objectives;
pub mod scheduler;
pub mod scoring;
pub mod systems;

pub use engine::{PlacementEngine, SimConfig};
pub use objectives::evaluate;
pub use rfgrid_core as core;
pub use scoring::{is_success, score};
