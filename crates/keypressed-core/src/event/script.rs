// Keypressed Event Layer - Replay Scripts
// Recorded host event sequences stored as TOML

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::HostEvent;
use crate::KeyEvent;

/// Errors that can occur when loading a replay script
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

/// A recorded sequence of host events.
///
/// ```toml
/// [[event]]
/// type = "keydown"
/// key = "ArrowUp"
///
/// [[event]]
/// type = "blur"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default, rename = "event")]
    pub events: Vec<HostEvent>,
}

impl Script {
    /// Load a script from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a script from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ScriptError> {
        toml::from_str(content).map_err(|e| ScriptError::TomlParse(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The events in order, ready for the state machine
    pub fn key_events(&self) -> impl Iterator<Item = KeyEvent> + '_ {
        self.events.iter().cloned().map(KeyEvent::from)
    }
}
