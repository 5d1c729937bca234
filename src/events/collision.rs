//! Collision event types and a simple observer.
//!
//! The collision system emits [`CollisionEvent`] whenever two entities with
//! colliders overlap. Observers can subscribe to this event to react in a
//! decoupled manner (damage, sound, despawn, etc.).

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::resources::worldclock::WorldClock;

/// Event fired when two entities with BoxCollider overlap.
///
/// The two fields are the entity IDs of the participants. No ordering
/// guarantees are provided.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}

/// Global observer that records each collision in the world clock's debug
/// buffer, where the display sink picks it up at the end of the tick.
pub fn observe_collision_log(trigger: On<CollisionEvent>, mut clock: ResMut<WorldClock>) {
    let event = trigger.event();
    clock.append(&format!("collision: {:?} <-> {:?}", event.a, event.b));
}
