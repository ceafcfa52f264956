//! Player preference toggles
//!
//! Persisted by the host alongside the profile. The engine itself never
//! reads these; the host uses them to gate which emitted events it honors.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Player preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Sound effect cues
    pub sound: bool,
    /// Background music
    pub music: bool,
    /// Haptic feedback
    pub haptics: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            music: true,
            haptics: true,
        }
    }
}

impl Settings {
    /// Whether the host should honor this event. Score and terminal events
    /// always pass; cues are filtered by the matching toggle.
    pub fn allows(&self, event: &GameEvent) -> bool {
        match event {
            GameEvent::Sound(_) => self.sound,
            GameEvent::Haptic(_) => self.haptics,
            GameEvent::ScoreChanged { .. } | GameEvent::GameOver { .. } => true,
        }
    }
}
