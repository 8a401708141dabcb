//! Core types and definitions for the RF GRID placement puzzle.
//!
//! This crate defines the vocabulary shared across all other crates:
//! placed components, metrics, objectives, level configuration, commands,
//! state snapshots, events, and constants.
//! It has no dependency on any runtime or UI framework.

pub mod catalog;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
