//! Events emitted by the controller for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::ComponentId;

/// One-shot events drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    ComponentPlaced { id: ComponentId, kind: ComponentKind },
    ComponentRemoved { id: ComponentId },
    SimulationStarted { component_count: usize },
    SimulationComplete { success: bool, coverage_percent: f64 },
    /// Tutor opened after a failed run.
    FeedbackOpened,
    /// Tutor answer recorded.
    AnswerChecked { step: usize, correct: bool },
    DialogueAdvanced { step: usize },
    DialogueFinished,
    BoardReset,
}

/// Alert for the UI alert queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub tick: u64,
}
