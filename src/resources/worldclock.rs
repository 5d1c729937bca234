//! Frame counter and debug buffer resource.

use bevy_ecs::prelude::Resource;

/// Monotonic frame counter with an attached debug line buffer.
///
/// The counter is guarded against signed overflow: a tick that would step
/// past the representable range resets it to zero first. The debug buffer
/// grows through [`WorldClock::append`] during a frame and is read-and-cleared
/// by the display sink through [`WorldClock::flush`], intended once per tick.
#[derive(Resource, Debug, Clone, Default)]
pub struct WorldClock {
    pub frame: i64,
    debug: String,
}

impl WorldClock {
    /// Advance the frame counter by one.
    pub fn tick(&mut self) {
        if self.frame == i64::MAX {
            self.frame = 0;
        }
        self.frame += 1;
    }

    /// Append one line to the debug buffer.
    pub fn append(&mut self, line: &str) {
        self.debug.push_str(line);
        self.debug.push('\n');
    }

    /// Read and clear the debug buffer.
    pub fn flush(&mut self) -> String {
        std::mem::take(&mut self.debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_increments() {
        let mut clock = WorldClock::default();
        clock.tick();
        clock.tick();
        assert_eq!(clock.frame, 2);
    }

    #[test]
    fn test_tick_resets_before_overflow() {
        let mut clock = WorldClock {
            frame: i64::MAX,
            ..Default::default()
        };
        clock.tick();
        assert_eq!(clock.frame, 1);
    }

    #[test]
    fn test_append_and_flush_clears() {
        let mut clock = WorldClock::default();
        clock.append("first");
        clock.append("second");
        assert_eq!(clock.flush(), "first\nsecond\n");
        assert_eq!(clock.flush(), "");
    }
}
