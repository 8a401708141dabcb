//! Fundamental game types: placed components, metrics, objectives, levels.

use std::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;

/// Unique identifier of a placed component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(pub String);

impl ComponentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One component on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedComponent {
    pub id: ComponentId,
    pub kind: ComponentKind,
    /// Grid cell (x = column, y = row).
    pub position: IVec2,
    /// Rotation in degrees. Always 0 for player placements.
    pub rotation: i32,
}

impl PlacedComponent {
    pub fn new(id: ComponentId, kind: ComponentKind, position: IVec2) -> Self {
        Self {
            id,
            kind,
            position,
            rotation: 0,
        }
    }
}

/// Result of a scoring run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Received signal strength (dBm).
    pub signal_strength: f64,
    /// Signal-to-noise ratio (dB).
    pub snr: f64,
    /// Latency (ms).
    pub latency: f64,
    /// Power draw (W).
    pub power_consumption: f64,
    /// Share of the target area reachable (0-100).
    pub coverage_percent: f64,
}

impl SimulationMetrics {
    /// Metrics shown before the first run and after a reset.
    pub fn initial() -> Self {
        Self {
            signal_strength: INITIAL_SIGNAL_DBM,
            snr: INITIAL_SNR_DB,
            latency: INITIAL_LATENCY_MS,
            power_consumption: 0.0,
            coverage_percent: 0.0,
        }
    }

    /// Read a single field.
    pub fn get(&self, field: MetricField) -> f64 {
        match field {
            MetricField::SignalStrength => self.signal_strength,
            MetricField::Snr => self.snr,
            MetricField::Latency => self.latency,
            MetricField::PowerConsumption => self.power_consumption,
            MetricField::CoveragePercent => self.coverage_percent,
        }
    }
}

impl Default for SimulationMetrics {
    fn default() -> Self {
        Self::initial()
    }
}

/// A target condition shown to the player.
///
/// `metric` and `comparison` are fixed when the level is defined;
/// `current_value` and `is_met` are filled in by evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    pub id: String,
    pub description: String,
    pub target_value: f64,
    pub current_value: f64,
    pub unit: String,
    pub is_met: bool,
    pub metric: MetricField,
    pub comparison: Comparison,
}

impl Objective {
    /// A fresh, unevaluated objective.
    pub fn new(
        id: &str,
        description: &str,
        target_value: f64,
        unit: &str,
        metric: MetricField,
        comparison: Comparison,
    ) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            target_value,
            current_value: 0.0,
            unit: unit.to_string(),
            is_met: false,
            metric,
            comparison,
        }
    }

    /// Whether `value` satisfies this objective's target.
    pub fn is_satisfied_by(&self, value: f64) -> bool {
        match self.comparison {
            Comparison::AtLeast => value >= self.target_value,
            Comparison::PositiveAtMost => value > 0.0 && value <= self.target_value,
        }
    }
}

/// Static, read-only configuration of a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub id: String,
    pub name: String,
    pub description: String,
    pub context: LevelContext,
    /// Board is `grid_size` x `grid_size` cells.
    pub grid_size: i32,
    /// Research points available for placement.
    pub budget: u32,
    pub available_components: Vec<ComponentKind>,
    pub objectives: Vec<Objective>,
}

impl LevelConfig {
    pub fn allows(&self, kind: ComponentKind) -> bool {
        self.available_components.contains(&kind)
    }

    pub fn contains_cell(&self, cell: IVec2) -> bool {
        cell.cmpge(IVec2::ZERO).all() && cell.cmplt(IVec2::splat(self.grid_size)).all()
    }
}

/// Controller time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
