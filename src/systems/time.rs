//! Time update system.
//!
//! Advances the shared [`WorldClock`](crate::resources::worldclock::WorldClock)
//! resource once per frame. Flushing the debug buffer is left to the display
//! sink at the end of the tick.

use bevy_ecs::prelude::*;

use crate::resources::worldclock::WorldClock;

/// Increment the frame counter on the `WorldClock` resource.
pub fn advance_clock(mut clock: ResMut<WorldClock>) {
    clock.tick();
}
