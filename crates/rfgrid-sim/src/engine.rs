//! Placement engine: the game controller.
//!
//! `PlacementEngine` owns the board (a hecs world), the run phase, the last
//! metrics, the tutor dialogue and the clock. All state changes go through
//! its transition methods; queued `PlayerCommand`s are routed to the same
//! methods at the next tick. Completely headless, enabling deterministic
//! testing.

use std::collections::VecDeque;

use glam::IVec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rfgrid_campaign::economy::BudgetLedger;
use rfgrid_core::catalog;
use rfgrid_core::commands::PlayerCommand;
use rfgrid_core::constants::*;
use rfgrid_core::enums::{AlertLevel, ComponentKind, LevelId, SimulationState};
use rfgrid_core::error::CommandError;
use rfgrid_core::events::{Alert, GameEvent};
use rfgrid_core::state::GameStateSnapshot;
use rfgrid_core::types::{
    ComponentId, LevelConfig, Objective, PlacedComponent, SimTime, SimulationMetrics,
};
use rfgrid_tutor::fsm::{self, DialogueState};
use rfgrid_tutor::scripts::DialogueScript;

use crate::board;
use crate::level;
use crate::objectives;
use crate::scheduler::{Scheduler, TickScheduler, TimedAction};
use crate::scoring;
use crate::systems::snapshot::{self, SnapshotInputs};

/// Configuration for a new game session.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for component ids. Same seed = same ids.
    pub seed: u64,
    pub level: LevelId,
    /// Ticks between starting a run and its result.
    pub scoring_delay_ticks: u64,
    /// Ticks between a failed result and the tutor opening.
    pub feedback_delay_ticks: u64,
    /// Ticks between a correct tutor answer and the next question.
    pub dialogue_advance_delay_ticks: u64,
    /// Reject placements the remaining budget cannot cover.
    pub enforce_budget: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            level: LevelId::default(),
            scoring_delay_ticks: secs_to_ticks(SCORING_DELAY_SECS),
            feedback_delay_ticks: secs_to_ticks(FEEDBACK_DELAY_SECS),
            dialogue_advance_delay_ticks: secs_to_ticks(DIALOGUE_ADVANCE_DELAY_SECS),
            enforce_budget: true,
        }
    }
}

/// The game controller. Owns the board world and all session state.
pub struct PlacementEngine {
    config: SimConfig,
    level: LevelConfig,
    world: World,
    time: SimTime,
    phase: SimulationState,
    rng: ChaCha8Rng,
    next_order: u64,
    command_queue: VecDeque<PlayerCommand>,
    scheduler: Box<dyn Scheduler>,
    metrics: SimulationMetrics,
    dialogue: Option<DialogueState>,
    concept_card_open: bool,
    alerts: Vec<Alert>,
    events: Vec<GameEvent>,
}

impl PlacementEngine {
    /// Create an engine paced by the tick clock.
    pub fn new(config: SimConfig) -> Self {
        Self::with_scheduler(config, TickScheduler::new())
    }

    /// Create an engine with a custom scheduler.
    pub fn with_scheduler(config: SimConfig, scheduler: impl Scheduler + 'static) -> Self {
        let level = level::build_level(config.level);
        log::debug!(
            "new session on level {} ({}), seed {}",
            level.id,
            level.name,
            config.seed
        );
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            level,
            world: World::new(),
            time: SimTime::default(),
            phase: SimulationState::default(),
            next_order: 0,
            command_queue: VecDeque::new(),
            scheduler: Box::new(scheduler),
            metrics: SimulationMetrics::initial(),
            dialogue: None,
            concept_card_open: false,
            alerts: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the clock by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();
        self.time.advance();
        self.settle_timers();
        self.take_snapshot()
    }

    /// Build a snapshot without advancing time. Drains pending events and alerts.
    pub fn take_snapshot(&mut self) -> GameStateSnapshot {
        let alerts = std::mem::take(&mut self.alerts);
        let events = std::mem::take(&mut self.events);
        snapshot::build_snapshot(
            &self.world,
            SnapshotInputs {
                time: self.time,
                phase: self.phase,
                level: &self.level,
                metrics: self.metrics,
                dialogue: self.dialogue.as_ref(),
                concept_card_open: self.concept_card_open,
                alerts,
                events,
            },
        )
    }

    // --- Accessors ---

    pub fn phase(&self) -> SimulationState {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn level(&self) -> &LevelConfig {
        &self.level
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Metrics of the last completed run, or the initial display values.
    pub fn metrics(&self) -> SimulationMetrics {
        self.metrics
    }

    /// Level objectives evaluated against the current metrics.
    pub fn objectives(&self) -> Vec<Objective> {
        objectives::evaluate(&self.level.objectives, &self.metrics)
    }

    /// Board contents in placement order.
    pub fn components(&self) -> Vec<PlacedComponent> {
        board::collect_components(&self.world)
    }

    pub fn ledger(&self) -> BudgetLedger {
        BudgetLedger::for_board(self.level.budget, board::placed_kinds(&self.world))
    }

    pub fn dialogue(&self) -> Option<&DialogueState> {
        self.dialogue.as_ref()
    }

    pub fn concept_card_open(&self) -> bool {
        self.concept_card_open
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Number of deferred actions still waiting.
    pub fn pending_actions(&self) -> usize {
        self.scheduler.pending()
    }

    // --- Transitions ---

    /// Route one player command to its transition.
    pub fn apply(&mut self, command: PlayerCommand) -> Result<(), CommandError> {
        match command {
            PlayerCommand::PlaceComponent { kind, x, y } => {
                self.place_component(kind, IVec2::new(x, y)).map(|_| ())
            }
            PlayerCommand::RemoveComponent { id } => self.remove_component(&id),
            PlayerCommand::RunSimulation => self.run_simulation(),
            PlayerCommand::Reset => self.reset(),
            PlayerCommand::SelectDialogueOption { index } => self.select_dialogue_option(index),
            PlayerCommand::CloseFeedback => self.close_feedback(),
            PlayerCommand::OpenConceptCard => self.open_concept_card(),
            PlayerCommand::CloseConceptCard => {
                self.close_concept_card();
                Ok(())
            }
        }
    }

    /// Place a new piece on `cell`. Only while idle.
    pub fn place_component(
        &mut self,
        kind: ComponentKind,
        cell: IVec2,
    ) -> Result<ComponentId, CommandError> {
        self.ensure_editable()?;
        if !self.level.allows(kind) {
            return Err(CommandError::UnavailableKind(kind));
        }
        if !self.level.contains_cell(cell) {
            return Err(CommandError::OutOfBounds {
                x: cell.x,
                y: cell.y,
                grid_size: self.level.grid_size,
            });
        }
        if self.config.enforce_budget {
            let ledger = self.ledger();
            if !ledger.can_afford(kind) {
                return Err(CommandError::OverBudget {
                    kind,
                    cost: catalog::cost(kind),
                    remaining: ledger.remaining(),
                });
            }
        }

        let id = board::generate_id(&self.world, &mut self.rng);
        let piece = PlacedComponent::new(id.clone(), kind, cell);
        board::spawn_component(&mut self.world, &piece, self.next_order);
        self.next_order += 1;

        log::debug!("placed {:?} {} at ({}, {})", kind, id, cell.x, cell.y);
        self.events.push(GameEvent::ComponentPlaced {
            id: id.clone(),
            kind,
        });
        Ok(id)
    }

    /// Remove a piece. Only while idle.
    pub fn remove_component(&mut self, id: &ComponentId) -> Result<(), CommandError> {
        self.ensure_editable()?;
        let removed = board::despawn_component(&mut self.world, id)
            .ok_or_else(|| CommandError::UnknownComponent(id.clone()))?;

        log::debug!("removed {:?} {}", removed.kind, removed.id);
        self.events
            .push(GameEvent::ComponentRemoved { id: removed.id });
        Ok(())
    }

    /// Start a scoring run. The result arrives after the scoring delay.
    pub fn run_simulation(&mut self) -> Result<(), CommandError> {
        if self.phase != SimulationState::Idle {
            return Err(CommandError::InvalidPhase {
                action: "run a simulation",
                phase: self.phase,
            });
        }

        let component_count = board::component_count(&self.world);
        self.phase = SimulationState::Running;
        self.scheduler.schedule(
            self.time.tick,
            self.config.scoring_delay_ticks,
            TimedAction::CompleteRun,
        );
        log::debug!("simulation started with {component_count} components");
        self.events
            .push(GameEvent::SimulationStarted { component_count });
        self.settle_timers();
        Ok(())
    }

    /// Return to editing after a completed run. The board is kept.
    pub fn reset(&mut self) -> Result<(), CommandError> {
        if !self.phase.is_complete() {
            return Err(CommandError::InvalidPhase {
                action: "reset",
                phase: self.phase,
            });
        }

        self.scheduler.clear();
        self.phase = SimulationState::Idle;
        self.metrics = SimulationMetrics::initial();
        self.dialogue = None;
        self.concept_card_open = false;
        log::debug!("design reset");
        self.events.push(GameEvent::BoardReset);
        Ok(())
    }

    /// Answer the open tutor question.
    pub fn select_dialogue_option(&mut self, index: usize) -> Result<(), CommandError> {
        let state = self.dialogue.ok_or(CommandError::NoDialogue)?;
        let update = fsm::select(&state, index)?;

        self.dialogue = Some(update.new_state);
        self.events.push(GameEvent::AnswerChecked {
            step: state.step,
            correct: update.correct,
        });
        if update.advance_pending {
            self.scheduler.schedule(
                self.time.tick,
                self.config.dialogue_advance_delay_ticks,
                TimedAction::AdvanceDialogue,
            );
        }
        if update.finished {
            self.events.push(GameEvent::DialogueFinished);
        }
        self.settle_timers();
        Ok(())
    }

    /// Close the tutor dialogue.
    pub fn close_feedback(&mut self) -> Result<(), CommandError> {
        if self.dialogue.take().is_none() {
            return Err(CommandError::NoDialogue);
        }
        self.scheduler.cancel(TimedAction::AdvanceDialogue);
        Ok(())
    }

    /// Swap the tutor dialogue for the concept card.
    pub fn open_concept_card(&mut self) -> Result<(), CommandError> {
        self.close_feedback()?;
        self.concept_card_open = true;
        Ok(())
    }

    pub fn close_concept_card(&mut self) {
        self.concept_card_open = false;
    }

    // --- Internals ---

    fn ensure_editable(&self) -> Result<(), CommandError> {
        if self.phase != SimulationState::Idle {
            return Err(CommandError::BoardLocked(self.phase));
        }
        Ok(())
    }

    /// Process all queued commands. Rejections become warning alerts.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.apply(command) {
                log::warn!("command rejected: {err}");
                self.push_alert(AlertLevel::Warning, err.to_string());
            }
        }
    }

    /// Apply every due deferred action, including ones they schedule.
    fn settle_timers(&mut self) {
        loop {
            let due = self.scheduler.drain_due(self.time.tick);
            if due.is_empty() {
                break;
            }
            for action in due {
                self.fire(action);
            }
        }
    }

    fn fire(&mut self, action: TimedAction) {
        match action {
            TimedAction::CompleteRun => self.complete_run(),
            TimedAction::OpenFeedback => self.open_feedback(),
            TimedAction::AdvanceDialogue => self.advance_dialogue(),
        }
    }

    fn complete_run(&mut self) {
        if self.phase != SimulationState::Running {
            return;
        }

        let counts = board::count_kinds(&self.world);
        let metrics = scoring::score_counts(&counts);
        let success = scoring::is_success(&metrics);
        let objectives_met =
            objectives::all_met(&objectives::evaluate(&self.level.objectives, &metrics));
        self.metrics = metrics;
        self.phase = if success {
            SimulationState::Success
        } else {
            SimulationState::Failure
        };

        log::info!(
            "simulation complete: {} transmitters, {} RIS, {} arrays -> {:.0}% coverage ({}, objectives met: {})",
            counts.transmitters,
            counts.ris_panels,
            counts.phased_arrays,
            metrics.coverage_percent,
            if success { "success" } else { "failure" },
            objectives_met
        );
        self.events.push(GameEvent::SimulationComplete {
            success,
            coverage_percent: metrics.coverage_percent,
        });

        if success {
            let message = if objectives_met {
                "Coverage target reached, all objectives met"
            } else {
                "Coverage target reached"
            };
            self.push_alert(AlertLevel::Info, message.to_string());
        } else {
            self.scheduler.schedule(
                self.time.tick,
                self.config.feedback_delay_ticks,
                TimedAction::OpenFeedback,
            );
        }
    }

    fn open_feedback(&mut self) {
        if self.phase != SimulationState::Failure {
            return;
        }
        self.dialogue = Some(DialogueState::start(DialogueScript::MetalBlockage));
        self.concept_card_open = false;
        self.events.push(GameEvent::FeedbackOpened);
    }

    fn advance_dialogue(&mut self) {
        if let Some(state) = self.dialogue {
            let next = fsm::advance(&state);
            if next != state {
                self.dialogue = Some(next);
                self.events
                    .push(GameEvent::DialogueAdvanced { step: next.step });
            }
        }
    }

    fn push_alert(&mut self, level: AlertLevel, message: String) {
        if self.alerts.len() >= MAX_ALERTS {
            self.alerts.remove(0);
        }
        self.alerts.push(Alert {
            level,
            message,
            tick: self.time.tick,
        });
    }
}
