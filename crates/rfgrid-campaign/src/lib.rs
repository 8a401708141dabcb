//! Placement economy for RF GRID.
//!
//! Tracks research-point spend against a level budget.

pub mod economy;

pub use rfgrid_core as core;
