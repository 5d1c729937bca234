//! Host input events.
//!
//! The host translates its windowing events into [`HostInput`] messages once
//! per tick; [`apply_host_input`](crate::systems::input::apply_host_input)
//! drains them into the persistent
//! [`InputState`](crate::resources::input::InputState) resource.

use bevy_ecs::message::Message;

use crate::resources::input::MouseButton;

/// One host input event. Key codes are raw; unrecognized codes are dropped
/// at application time.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum HostInput {
    KeyDown { code: u16 },
    KeyUp { code: u16 },
    MouseMove { x: f32, y: f32 },
    MouseDown { button: MouseButton },
    MouseUp { button: MouseButton },
    Click { button: MouseButton },
}
