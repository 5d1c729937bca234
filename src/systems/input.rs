//! Input systems.
//!
//! [`apply_host_input`] drains the [`HostInput`] messages the host wrote this
//! tick and folds them into the persistent
//! [`InputState`](crate::resources::input::InputState) resource. Run
//! [`update_host_input_messages`] first so same-frame writes become readable.

use bevy_ecs::prelude::*;

use crate::events::input::HostInput;
use crate::resources::input::InputState;

/// Advance the ECS message queue for [`HostInput`] so messages written this
/// frame become visible to readers.
pub fn update_host_input_messages(mut msgs: ResMut<Messages<HostInput>>) {
    msgs.update();
}

/// Fold pending host input events into the input state, last write wins.
pub fn apply_host_input(mut input: ResMut<InputState>, mut reader: MessageReader<HostInput>) {
    for event in reader.read() {
        match *event {
            HostInput::KeyDown { code } => input.press_code(code),
            HostInput::KeyUp { code } => input.release_code(code),
            HostInput::MouseMove { x, y } => input.set_cursor(x, y),
            HostInput::MouseDown { button } => input.set_mouse_button(button, true),
            HostInput::MouseUp { button } => input.set_mouse_button(button, false),
            HostInput::Click { button } => input.click(button),
        }
    }
}
