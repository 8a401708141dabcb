//! Level definitions: hardcoded board configurations.
//!
//! Each level defines its budget, the kinds the player may place, and the
//! objectives shown to the player, including which metric each objective
//! reads.

use rfgrid_core::enums::{Comparison, ComponentKind, LevelContext, LevelId, MetricField};
use rfgrid_core::types::{LevelConfig, Objective};

pub const OBJ_COVERAGE: &str = "obj_coverage";
pub const OBJ_LATENCY: &str = "obj_latency";

/// Build the configuration for a given level.
pub fn build_level(level: LevelId) -> LevelConfig {
    match level {
        LevelId::Fenway => build_fenway(),
    }
}

/// Fenway: "Fenway Park Challenge" (2-1)
/// 100 RP, 20x20 grid. Two transmitters alone leave the shadow behind the
/// bleachers; a RIS panel is needed to reach 95 % coverage.
fn build_fenway() -> LevelConfig {
    LevelConfig {
        id: "2-1".to_string(),
        name: "Fenway Park Challenge".to_string(),
        description: "Deploy 6G infrastructure to ensure seamless connectivity for IMS2026 attendees at the stadium.".to_string(),
        context: LevelContext::City,
        grid_size: 20,
        budget: 100,
        available_components: vec![
            ComponentKind::BaseStation28Ghz,
            ComponentKind::PhasedArray,
            ComponentKind::RisPanel,
        ],
        objectives: vec![
            Objective::new(
                OBJ_COVERAGE,
                "Coverage Area",
                95.0,
                "%",
                MetricField::CoveragePercent,
                Comparison::AtLeast,
            ),
            // Less than 10 ms, and only once a reading exists
            Objective::new(
                OBJ_LATENCY,
                "Max Latency",
                10.0,
                "ms",
                MetricField::Latency,
                Comparison::PositiveAtMost,
            ),
        ],
    }
}
