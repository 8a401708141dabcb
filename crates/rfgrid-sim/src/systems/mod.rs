//! Systems that read the board world.
//!
//! Systems are pure functions that take `&World`. They do not own state.

pub mod snapshot;
