//! Placement scoring: board contents in, metrics out.
//!
//! Scoring looks only at how many pieces of each kind are on the board.
//! Positions and rotations are carried by `PlacedComponent` but ignored
//! here, so the result is independent of layout and placement order.

use serde::{Deserialize, Serialize};

use rfgrid_core::constants::*;
use rfgrid_core::enums::ComponentKind;
use rfgrid_core::types::{PlacedComponent, SimulationMetrics};

/// Per-kind piece counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCounts {
    pub transmitters: u32,
    pub ris_panels: u32,
    /// Counted for display; does not affect the score.
    pub phased_arrays: u32,
    pub obstacles: u32,
}

impl KindCounts {
    pub fn from_kinds(kinds: impl IntoIterator<Item = ComponentKind>) -> Self {
        let mut counts = Self::default();
        for kind in kinds {
            match kind {
                ComponentKind::BaseStation28Ghz => counts.transmitters += 1,
                ComponentKind::RisPanel => counts.ris_panels += 1,
                ComponentKind::PhasedArray => counts.phased_arrays += 1,
                ComponentKind::Obstacle => counts.obstacles += 1,
            }
        }
        counts
    }
}

/// Which row of the coverage table a board falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageTier {
    /// No transmitter.
    Dark,
    /// One transmitter, shadowed by the bleachers.
    Single,
    /// Two or more transmitters, shadow remains.
    Multi,
    /// Two or more transmitters with a reflector covering the shadow.
    Reflected,
}

impl CoverageTier {
    /// Select the tier. Checked in precedence order.
    pub fn classify(counts: &KindCounts) -> Self {
        match (counts.transmitters, counts.ris_panels) {
            (0, _) => CoverageTier::Dark,
            (1, _) => CoverageTier::Single,
            (_, 0) => CoverageTier::Multi,
            _ => CoverageTier::Reflected,
        }
    }

    /// (coverage %, signal dBm) for this tier.
    pub fn coverage_and_signal(self) -> (f64, f64) {
        match self {
            CoverageTier::Dark => (COVERAGE_NO_TRANSMITTER, SIGNAL_NO_TRANSMITTER),
            CoverageTier::Single => (COVERAGE_SINGLE_TRANSMITTER, SIGNAL_SINGLE_TRANSMITTER),
            CoverageTier::Multi => (COVERAGE_MULTI_TRANSMITTER, SIGNAL_MULTI_TRANSMITTER),
            CoverageTier::Reflected => (
                COVERAGE_MULTI_TRANSMITTER_RIS,
                SIGNAL_MULTI_TRANSMITTER_RIS,
            ),
        }
    }
}

/// Score a board. Total over all inputs, including the empty board.
pub fn score(components: &[PlacedComponent]) -> SimulationMetrics {
    score_counts(&KindCounts::from_kinds(components.iter().map(|c| c.kind)))
}

/// Score from precomputed counts.
pub fn score_counts(counts: &KindCounts) -> SimulationMetrics {
    let (coverage, signal) = CoverageTier::classify(counts).coverage_and_signal();

    SimulationMetrics {
        signal_strength: signal,
        snr: signal + SNR_OFFSET_DB,
        latency: if counts.transmitters > 0 {
            LATENCY_CONNECTED_MS
        } else {
            LATENCY_DISCONNECTED_MS
        },
        power_consumption: counts.transmitters as f64 * POWER_PER_TRANSMITTER_W,
        coverage_percent: coverage,
    }
}

/// Win condition. Only coverage gates success; latency is display-only.
pub fn is_success(metrics: &SimulationMetrics) -> bool {
    metrics.coverage_percent >= SUCCESS_COVERAGE_PERCENT
}
