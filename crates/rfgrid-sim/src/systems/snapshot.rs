//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use rfgrid_campaign::economy::BudgetLedger;
use rfgrid_core::enums::SimulationState;
use rfgrid_core::events::{Alert, GameEvent};
use rfgrid_core::state::*;
use rfgrid_core::types::{LevelConfig, SimTime, SimulationMetrics};
use rfgrid_tutor::fsm::{self, DialogueState};

use crate::board;
use crate::objectives;

/// Everything outside the world that a snapshot shows.
pub struct SnapshotInputs<'a> {
    pub time: SimTime,
    pub phase: SimulationState,
    pub level: &'a LevelConfig,
    pub metrics: SimulationMetrics,
    pub dialogue: Option<&'a DialogueState>,
    pub concept_card_open: bool,
    pub alerts: Vec<Alert>,
    pub events: Vec<GameEvent>,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(world: &World, inputs: SnapshotInputs<'_>) -> GameStateSnapshot {
    GameStateSnapshot {
        time: inputs.time,
        phase: inputs.phase,
        level: build_level(inputs.level),
        components: board::collect_components(world),
        budget: build_budget(world, inputs.level),
        metrics: inputs.metrics,
        objectives: objectives::evaluate(&inputs.level.objectives, &inputs.metrics),
        feedback: inputs.dialogue.map(fsm::view),
        concept_card_open: inputs.concept_card_open,
        alerts: inputs.alerts,
        events: inputs.events,
    }
}

fn build_level(level: &LevelConfig) -> LevelView {
    LevelView {
        id: level.id.clone(),
        name: level.name.clone(),
        description: level.description.clone(),
        context: level.context,
        grid_size: level.grid_size,
        available_components: level.available_components.clone(),
    }
}

/// Build the budget bar from the pieces on the board.
pub fn build_budget(world: &World, level: &LevelConfig) -> BudgetView {
    let ledger = BudgetLedger::for_board(level.budget, board::placed_kinds(world));
    BudgetView {
        total: ledger.budget,
        spent: ledger.spent,
        remaining: ledger.remaining(),
        over_budget: ledger.over_budget(),
        fill_ratio: ledger.fill_ratio(),
        affordable: level
            .available_components
            .iter()
            .copied()
            .filter(|kind| ledger.can_afford(*kind))
            .collect(),
    }
}
