//! Remedial tutor for RF GRID.
//!
//! Implements the question-and-answer dialogue shown after a failed run:
//! static dialogue scripts plus a pure state machine over them.

pub mod fsm;
pub mod scripts;

pub use rfgrid_core as core;

#[cfg(test)]
mod tests;
