//! Persistent keyboard/mouse input resource.
//!
//! [`InputState`] is created once at startup and lives for the process. Host
//! input events mutate it; entities read it every tick. All state is
//! last-write-wins: a key stays pressed until its release event arrives, and
//! the three mouse-button flags are independent of each other.

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use rustc_hash::FxHashMap;

use crate::resources::keymap::{self, KeyId};

/// The three tracked mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Resource holding pressed-state per key, mouse-button flags and the last
/// known cursor position.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pressed: FxHashMap<KeyId, bool>,
    pub cursor: Vec2,
    pub mouse_left: bool,
    pub mouse_middle: bool,
    pub mouse_right: bool,
    /// Key the jump state machine clears when a jump finishes.
    pub jump_binding: KeyId,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pressed: FxHashMap::default(),
            cursor: Vec2::ZERO,
            mouse_left: false,
            mouse_middle: false,
            mouse_right: false,
            jump_binding: KeyId::Space,
        }
    }
}

impl InputState {
    /// Mark the key behind a raw code as pressed. Unrecognized codes are
    /// no-ops, not errors.
    pub fn press_code(&mut self, code: u16) {
        if let Some(key) = keymap::lookup(code) {
            self.pressed.insert(key, true);
        }
    }

    /// Mark the key behind a raw code as released. Unrecognized codes are
    /// no-ops.
    pub fn release_code(&mut self, code: u16) {
        if let Some(key) = keymap::lookup(code) {
            self.pressed.insert(key, false);
        }
    }

    /// Whether a key is currently held. Keys never seen count as released.
    pub fn is_down(&self, key: KeyId) -> bool {
        self.pressed.get(&key).copied().unwrap_or(false)
    }

    /// Write a key's pressed state directly.
    pub fn set_down(&mut self, key: KeyId, down: bool) {
        self.pressed.insert(key, down);
    }

    /// Record the last known cursor position.
    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
    }

    /// Write a mouse button's pressed flag.
    pub fn set_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.mouse_left = pressed,
            MouseButton::Middle => self.mouse_middle = pressed,
            MouseButton::Right => self.mouse_right = pressed,
        }
    }

    /// A click latches the button flag; it stays set until the next release.
    pub fn click(&mut self, button: MouseButton) {
        self.set_mouse_button(button, true);
    }

    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.mouse_left,
            MouseButton::Middle => self.mouse_middle,
            MouseButton::Right => self.mouse_right,
        }
    }
}
