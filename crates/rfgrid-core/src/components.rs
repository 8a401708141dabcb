//! ECS components for hecs entities on the board.
//!
//! A placed piece is an entity carrying `ComponentId`, `ComponentKind`,
//! and the components below. Components are plain data with no methods.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Grid cell a piece occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell(pub IVec2);

/// Rotation in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rotation(pub i32);

/// Monotonic placement sequence, used to list pieces in the order placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlacementOrder(pub u64);
