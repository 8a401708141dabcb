//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Placeable component kind. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
    /// 28 GHz mmWave transmitter.
    #[serde(rename = "BS_28GHZ")]
    BaseStation28Ghz,
    /// Steerable beam antenna.
    #[serde(rename = "PHASED_ARRAY")]
    PhasedArray,
    /// Reconfigurable intelligent surface (passive reflector).
    #[serde(rename = "RIS_PANEL")]
    RisPanel,
    /// Building or structure. Only placed by level design.
    #[serde(rename = "OBSTACLE")]
    Obstacle,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::BaseStation28Ghz,
        ComponentKind::PhasedArray,
        ComponentKind::RisPanel,
        ComponentKind::Obstacle,
    ];
}

/// Scoring run lifecycle, the top-level state of the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationState {
    /// Board is editable; a run may be started.
    #[default]
    Idle,
    /// Run scheduled, waiting on the scoring delay. Board is locked.
    Running,
    /// Run complete, coverage target reached.
    Success,
    /// Run complete, coverage target missed.
    Failure,
}

impl SimulationState {
    pub fn is_complete(self) -> bool {
        matches!(self, SimulationState::Success | SimulationState::Failure)
    }
}

/// Field of `SimulationMetrics` an objective reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricField {
    SignalStrength,
    Snr,
    Latency,
    PowerConsumption,
    CoveragePercent,
}

/// How an objective compares its current value to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    /// `current >= target`.
    AtLeast,
    /// `0 < current <= target`. A zero reading means "not measured yet".
    PositiveAtMost,
}

/// Setting a level takes place in. Cosmetic for now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelContext {
    #[default]
    City,
    Circuit,
    Quantum,
}

/// Identifiers for the built-in levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelId {
    /// "Fenway Park Challenge" (level 2-1).
    #[default]
    Fenway,
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}
