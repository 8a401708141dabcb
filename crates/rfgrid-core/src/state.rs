//! Game state snapshot: the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{Alert, GameEvent};
use crate::types::{Objective, PlacedComponent, SimTime, SimulationMetrics};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: SimulationState,
    pub level: LevelView,
    /// Board contents in placement order.
    pub components: Vec<PlacedComponent>,
    pub budget: BudgetView,
    pub metrics: SimulationMetrics,
    /// Level objectives evaluated against `metrics`.
    pub objectives: Vec<Objective>,
    /// Open tutor dialogue, if any.
    pub feedback: Option<DialogueView>,
    pub concept_card_open: bool,
    pub alerts: Vec<Alert>,
    pub events: Vec<GameEvent>,
}

/// Level header for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub context: LevelContext,
    pub grid_size: i32,
    pub available_components: Vec<ComponentKind>,
}

/// Budget bar state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetView {
    pub total: u32,
    pub spent: u32,
    /// `total - spent`, floored at zero.
    pub remaining: u32,
    pub over_budget: bool,
    /// Spent share of the budget, clamped to 0.0..=1.0.
    pub fill_ratio: f64,
    /// Kinds the player can still afford one more of.
    pub affordable: Vec<ComponentKind>,
}

/// Current tutor step for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogueView {
    pub step: usize,
    pub step_count: usize,
    pub text: String,
    pub options: Vec<String>,
    pub selected: Option<usize>,
    /// Tutor response to the selected option.
    pub response: Option<String>,
    pub answered_correctly: bool,
    pub finished: bool,
}
