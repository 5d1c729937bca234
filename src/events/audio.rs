use std::fmt;

/// Commands sent to the host's audio playback, fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCmd {
    PlayFx { id: String },
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
}

impl fmt::Display for AudioCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioCmd::PlayFx { id } => write!(f, "play fx {}", id),
            AudioCmd::PlayMusic { id, looped } => {
                write!(f, "play music {} (looped: {})", id, looped)
            }
            AudioCmd::StopMusic { id } => write!(f, "stop music {}", id),
        }
    }
}
