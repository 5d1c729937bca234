//! Fire-and-forget audio command channel.
//!
//! The runtime never owns audio playback; it only pushes
//! [`AudioCmd`](crate::events::audio::AudioCmd) values into a channel whose
//! receiving end belongs to the host. Sends are never awaited or tracked, and
//! a disconnected receiver is silently tolerated.

use bevy_ecs::prelude::{Resource, World};
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::audio::AudioCmd;

/// Sender half of the audio command channel.
#[derive(Resource)]
pub struct AudioBus {
    tx: Sender<AudioCmd>,
}

impl AudioBus {
    /// Push a command toward the host. Errors (host gone) are ignored.
    pub fn fire(&self, cmd: AudioCmd) {
        let _ = self.tx.send(cmd);
    }
}

/// Create the audio channel, insert the [`AudioBus`] resource and hand the
/// receiving end back to the host.
pub fn setup_audio(world: &mut World) -> Receiver<AudioCmd> {
    let (tx, rx) = unbounded::<AudioCmd>();
    world.insert_resource(AudioBus { tx });
    rx
}
