//! Board storage on the hecs world.
//!
//! Each placed piece is one entity with `ComponentId`, `ComponentKind`,
//! `GridCell`, `Rotation` and `PlacementOrder`.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use rfgrid_core::components::*;
use rfgrid_core::constants::COMPONENT_ID_LEN;
use rfgrid_core::enums::ComponentKind;
use rfgrid_core::types::{ComponentId, PlacedComponent};

use crate::scoring::KindCounts;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh base-36 id not already on the board.
pub fn generate_id(world: &World, rng: &mut ChaCha8Rng) -> ComponentId {
    loop {
        let id: String = (0..COMPONENT_ID_LEN)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        let id = ComponentId(id);
        if find_component(world, &id).is_none() {
            return id;
        }
    }
}

/// Spawn a piece.
pub fn spawn_component(world: &mut World, component: &PlacedComponent, order: u64) -> Entity {
    world.spawn((
        component.id.clone(),
        component.kind,
        GridCell(component.position),
        Rotation(component.rotation),
        PlacementOrder(order),
    ))
}

/// Find the entity holding `id`.
pub fn find_component(world: &World, id: &ComponentId) -> Option<Entity> {
    world
        .query::<&ComponentId>()
        .iter()
        .find(|(_, cid)| *cid == id)
        .map(|(entity, _)| entity)
}

/// Remove the piece with `id`, returning it.
pub fn despawn_component(world: &mut World, id: &ComponentId) -> Option<PlacedComponent> {
    let entity = find_component(world, id)?;
    let removed = read_component(world, entity)?;
    world.despawn(entity).ok()?;
    Some(removed)
}

fn read_component(world: &World, entity: Entity) -> Option<PlacedComponent> {
    let mut query = world
        .query_one::<(&ComponentId, &ComponentKind, &GridCell, &Rotation)>(entity)
        .ok()?;
    query.get().map(|(id, kind, cell, rotation)| PlacedComponent {
        id: id.clone(),
        kind: *kind,
        position: cell.0,
        rotation: rotation.0,
    })
}

/// All pieces, in placement order.
pub fn collect_components(world: &World) -> Vec<PlacedComponent> {
    let mut pieces: Vec<(PlacementOrder, PlacedComponent)> = world
        .query::<(&ComponentId, &ComponentKind, &GridCell, &Rotation, &PlacementOrder)>()
        .iter()
        .map(|(_, (id, kind, cell, rotation, order))| {
            (
                *order,
                PlacedComponent {
                    id: id.clone(),
                    kind: *kind,
                    position: cell.0,
                    rotation: rotation.0,
                },
            )
        })
        .collect();
    pieces.sort_by_key(|(order, _)| *order);
    pieces.into_iter().map(|(_, piece)| piece).collect()
}

/// Kinds of all pieces on the board.
pub fn placed_kinds(world: &World) -> Vec<ComponentKind> {
    world
        .query::<&ComponentKind>()
        .iter()
        .map(|(_, kind)| *kind)
        .collect()
}

/// Per-kind counts, straight from the world.
pub fn count_kinds(world: &World) -> KindCounts {
    KindCounts::from_kinds(placed_kinds(world))
}

pub fn component_count(world: &World) -> usize {
    world.query::<&ComponentId>().iter().count()
}
