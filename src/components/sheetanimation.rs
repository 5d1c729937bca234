//! Row/column spritesheet playback and jump state.
//!
//! A [`SheetAnimation`] walks a uniform grid: the row selects the facing
//! direction, the column selects the frame. Frames wrap strictly past
//! `max_frame`, so a full cycle is `max_frame + 1` calls long. The embedded
//! [`JumpState`] is a two-state machine (grounded/jumping) driven once per
//! tick by [`jump_physics`](crate::systems::physics::jump_physics).

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Jump sub-state of an animated sheet entity.
///
/// `start` transitions grounded→jumping only when allowed; the countdown back
/// to grounded is driven externally, one decrement per tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JumpState {
    /// Whether the entity is allowed to start a jump at all.
    pub can_jump: bool,
    /// True between `start` and `stop`.
    pub is_jumping: bool,
    /// Remaining ticks of upward travel; counts down from `jump_max`.
    pub jump_count: u32,
    /// Number of ticks a full jump lasts.
    pub jump_max: u32,
    /// Pixels of downward pull per grounded tick.
    pub gravity: f32,
}

impl JumpState {
    pub fn new(jump_max: u32, gravity: f32) -> Self {
        Self {
            can_jump: true,
            is_jumping: false,
            jump_count: 0,
            jump_max,
            gravity,
        }
    }

    /// Begin a jump. Only transitions when grounded and allowed; returns
    /// whether the jump actually started.
    pub fn start(&mut self) -> bool {
        if self.can_jump && !self.is_jumping {
            self.is_jumping = true;
            self.jump_count = self.jump_max;
            true
        } else {
            false
        }
    }

    /// Return to grounded.
    pub fn stop(&mut self) {
        self.is_jumping = false;
        self.jump_count = 0;
    }
}

/// Playback state over a uniform spritesheet grid.
#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct SheetAnimation {
    /// Current row (facing direction), in `0..=dir_max`.
    pub current_dir: u32,
    /// Highest valid row index.
    pub dir_max: u32,
    /// Current column (frame), in `0..=max_frame`.
    pub current_frame: u32,
    /// Highest valid frame index.
    pub max_frame: u32,
    pub jump: JumpState,
}

impl SheetAnimation {
    pub fn new(dir_max: u32, max_frame: u32) -> Self {
        Self {
            current_dir: 0,
            dir_max,
            current_frame: 0,
            max_frame,
            jump: JumpState::new(0, 0.0),
        }
    }

    pub fn with_jump(mut self, jump_max: u32, gravity: f32) -> Self {
        self.jump = JumpState::new(jump_max, gravity);
        self
    }

    /// Step to the next frame, wrapping to 0 once the index exceeds
    /// `max_frame`. The wrap fires strictly past the end, so the cycle is
    /// `max_frame + 1` steps long.
    pub fn advance_frame(&mut self) {
        self.current_frame += 1;
        if self.current_frame > self.max_frame {
            self.current_frame = 0;
        }
    }

    /// Select the facing direction. Out-of-range values are ignored.
    pub fn change_dir(&mut self, dir: i32) {
        if dir >= 0 && dir as u32 <= self.dir_max {
            self.current_dir = dir as u32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== FRAME ADVANCE TESTS ====================

    #[test]
    fn test_advance_frame_wraps_past_max() {
        let mut anim = SheetAnimation::new(0, 4);
        for expected in [1, 2, 3, 4, 0, 1] {
            anim.advance_frame();
            assert_eq!(anim.current_frame, expected);
        }
    }

    #[test]
    fn test_cycle_length_is_max_frame_plus_one() {
        // Six advances land on the same frame as one advance.
        let mut six = SheetAnimation::new(0, 4);
        for _ in 0..6 {
            six.advance_frame();
        }
        let mut one = SheetAnimation::new(0, 4);
        one.advance_frame();
        assert_eq!(six.current_frame, one.current_frame);
    }

    #[test]
    fn test_advance_frame_single_frame_sheet() {
        let mut anim = SheetAnimation::new(0, 0);
        anim.advance_frame();
        assert_eq!(anim.current_frame, 0);
    }

    // ==================== DIRECTION TESTS ====================

    #[test]
    fn test_change_dir_in_range() {
        let mut anim = SheetAnimation::new(3, 4);
        for k in 0..=3 {
            anim.change_dir(k);
            assert_eq!(anim.current_dir, k as u32);
        }
    }

    #[test]
    fn test_change_dir_above_max_is_noop() {
        let mut anim = SheetAnimation::new(3, 4);
        anim.change_dir(2);
        anim.change_dir(4);
        assert_eq!(anim.current_dir, 2);
    }

    #[test]
    fn test_change_dir_negative_is_noop() {
        let mut anim = SheetAnimation::new(3, 4);
        anim.change_dir(1);
        anim.change_dir(-1);
        assert_eq!(anim.current_dir, 1);
    }

    // ==================== JUMP STATE TESTS ====================

    #[test]
    fn test_jump_start_seeds_count() {
        let mut jump = JumpState::new(10, 2.0);
        assert!(jump.start());
        assert!(jump.is_jumping);
        assert_eq!(jump.jump_count, 10);
    }

    #[test]
    fn test_jump_start_refused_while_jumping() {
        let mut jump = JumpState::new(10, 2.0);
        assert!(jump.start());
        jump.jump_count = 4;
        assert!(!jump.start());
        assert_eq!(jump.jump_count, 4);
    }

    #[test]
    fn test_jump_start_refused_when_not_allowed() {
        let mut jump = JumpState::new(10, 2.0);
        jump.can_jump = false;
        assert!(!jump.start());
        assert!(!jump.is_jumping);
    }

    #[test]
    fn test_jump_stop_returns_to_grounded() {
        let mut jump = JumpState::new(10, 2.0);
        jump.start();
        jump.stop();
        assert!(!jump.is_jumping);
        assert_eq!(jump.jump_count, 0);
        // A fresh jump is allowed again.
        assert!(jump.start());
    }
}
