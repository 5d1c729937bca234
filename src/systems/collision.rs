//! Collision detection system.
//!
//! Tests every pair of collider-carrying entities for overlap. A detected
//! overlap marks both colliders' sticky `hit` flag and triggers a
//! [`CollisionEvent`] for observers. The flag is only ever set here; callers
//! wanting a fresh per-frame baseline reset it themselves through
//! [`BoxCollider::clear_hit`](crate::components::boxcollider::BoxCollider::clear_hit).

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::events::collision::CollisionEvent;

/// Pairwise AABB overlap detection over all collider entities.
pub fn collision_detector(
    mut query: Query<(Entity, &MapPosition, &mut BoxCollider)>,
    mut commands: Commands,
) {
    let mut pairs: Vec<(Entity, Entity)> = Vec::new();

    let mut combos = query.iter_combinations_mut();
    while let Some(
        [
            (entity_a, position_a, mut collider_a),
            (entity_b, position_b, mut collider_b),
        ],
    ) = combos.fetch_next()
    {
        if collider_a.overlaps(position_a.pos, &collider_b, position_b.pos) {
            collider_a.hit = true;
            collider_b.hit = true;
            pairs.push((entity_a, entity_b));
        }
    }

    for (entity_a, entity_b) in pairs {
        commands.trigger(CollisionEvent {
            a: entity_a,
            b: entity_b,
        });
    }
}
