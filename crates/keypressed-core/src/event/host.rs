// Keypressed Event Layer - Host Events
// Decoding of keydown/keyup/blur payloads from the host environment

use serde::{Deserialize, Serialize};

use crate::{KeyEvent, RawKey};

/// A keyboard-related event as the host reports it.
///
/// Deserializes from `{ type = "keydown", key = "a" }`,
/// `{ type = "keyup", key = "a" }` and `{ type = "blur" }`. The `key` string
/// is taken verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HostEvent {
    Keydown { key: String },
    Keyup { key: String },
    /// The window or document lost focus
    Blur,
}

impl From<HostEvent> for KeyEvent {
    fn from(event: HostEvent) -> Self {
        match event {
            HostEvent::Keydown { key } => KeyEvent::Down(RawKey::from(key)),
            HostEvent::Keyup { key } => KeyEvent::Up(RawKey::from(key)),
            HostEvent::Blur => KeyEvent::Clear,
        }
    }
}
