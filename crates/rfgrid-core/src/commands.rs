//! Player commands sent from the frontend to the controller.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::ComponentKind;
use crate::types::ComponentId;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Board editing ---
    /// Drop a component of `kind` onto grid cell (x, y).
    PlaceComponent { kind: ComponentKind, x: i32, y: i32 },
    /// Remove a placed component.
    RemoveComponent { id: ComponentId },

    // --- Scoring ---
    /// Start a scoring run for the current board.
    RunSimulation,
    /// Return to editing after a completed run.
    Reset,

    // --- Tutor ---
    /// Answer the current tutor question.
    SelectDialogueOption { index: usize },
    /// Close the tutor dialogue.
    CloseFeedback,
    /// Open the concept card (closes the tutor dialogue).
    OpenConceptCard,
    /// Close the concept card.
    CloseConceptCard,
}
