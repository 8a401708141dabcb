//! Errors returned when the controller rejects a player action.

use thiserror::Error;

use crate::enums::{ComponentKind, SimulationState};
use crate::types::ComponentId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("board is locked while the simulation is {0:?}")]
    BoardLocked(SimulationState),
    #[error("cannot {action} while the simulation is {phase:?}")]
    InvalidPhase {
        action: &'static str,
        phase: SimulationState,
    },
    #[error("{0:?} is not available in this level")]
    UnavailableKind(ComponentKind),
    #[error("cell ({x}, {y}) is outside the {grid_size}x{grid_size} grid")]
    OutOfBounds { x: i32, y: i32, grid_size: i32 },
    #[error("{kind:?} costs {cost} RP but only {remaining} RP remain")]
    OverBudget {
        kind: ComponentKind,
        cost: u32,
        remaining: u32,
    },
    #[error("no component with id {0}")]
    UnknownComponent(ComponentId),
    #[error("tutor dialogue is not open")]
    NoDialogue,
    #[error("current question is already answered")]
    AnswerLocked,
    #[error("option {index} does not exist on this step ({available} options)")]
    InvalidOption { index: usize, available: usize },
}
