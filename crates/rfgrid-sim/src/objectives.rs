//! Objective evaluation against a metrics record.

use rfgrid_core::types::{Objective, SimulationMetrics};

/// Fill `current_value` and `is_met` for one objective from the metric it declares.
pub fn evaluate_one(objective: &Objective, metrics: &SimulationMetrics) -> Objective {
    let current_value = metrics.get(objective.metric);
    Objective {
        current_value,
        is_met: objective.is_satisfied_by(current_value),
        ..objective.clone()
    }
}

/// Evaluate every objective. Inputs are not modified; calling again with
/// the same metrics yields the same result.
pub fn evaluate(objectives: &[Objective], metrics: &SimulationMetrics) -> Vec<Objective> {
    objectives
        .iter()
        .map(|objective| evaluate_one(objective, metrics))
        .collect()
}

pub fn all_met(objectives: &[Objective]) -> bool {
    objectives.iter().all(|o| o.is_met)
}
