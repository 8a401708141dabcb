//! Static definitions for each placeable component kind.

use serde::Serialize;

use crate::enums::ComponentKind;

/// Display and economy data for a component kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentDefinition {
    pub name: &'static str,
    /// Cost in research points.
    pub cost: u32,
    pub description: &'static str,
    /// Nominal reach in grid cells. Not used by scoring.
    pub range: u32,
}

/// Get the definition for a component kind.
pub fn definition(kind: ComponentKind) -> ComponentDefinition {
    match kind {
        ComponentKind::BaseStation28Ghz => ComponentDefinition {
            name: "28 GHz Base Station",
            cost: 30,
            description: "Standard mmWave transmitter. High speed, low penetration.",
            range: 5,
        },
        ComponentKind::PhasedArray => ComponentDefinition {
            name: "Phased Array",
            cost: 45,
            description: "Steerable beam antenna. Focused gain, higher cost.",
            range: 8,
        },
        ComponentKind::RisPanel => ComponentDefinition {
            name: "RIS Panel",
            cost: 15,
            description: "Reconfigurable Intelligent Surface. Reflects signals around obstacles.",
            range: 3,
        },
        ComponentKind::Obstacle => ComponentDefinition {
            name: "Obstacle",
            cost: 0,
            description: "Building or structure blocking RF signals.",
            range: 0,
        },
    }
}

/// Shorthand for `definition(kind).cost`.
pub fn cost(kind: ComponentKind) -> u32 {
    definition(kind).cost
}
