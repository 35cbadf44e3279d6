// Keypressed Key Type
// Closed set of semantic keys recognized from raw key values

use std::fmt;

use strum_macros::IntoStaticStr;

/// A recognized, named key.
///
/// `Character` is the only case carrying data: the single character that was
/// matched. Equality is structural, so two `Character("a")` values are the
/// same key and are de-duplicated in [`PressedKeys`](crate::PressedKeys).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, IntoStaticStr)]
pub enum Key {
    /// A single printable character, as reported by the host
    Character(String),

    // Modifiers
    Alt,
    AltGraph,
    CapsLock,
    Control,
    Fn,
    FnLock,
    Hyper,
    Meta,
    NumLock,
    ScrollLock,
    Shift,
    Super,
    Symbol,
    SymbolLock,

    // Whitespace
    Enter,
    Tab,
    Spacebar,

    // Navigation
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    End,
    Home,
    PageDown,
    PageUp,

    // Editing
    Backspace,
    Clear,
    Copy,
    CrSel,
    Cut,
    Delete,
    EraseEof,
    ExSel,
    Insert,
    Paste,
    Redo,
    Undo,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,

    // UI
    Again,
    Attn,
    Cancel,
    ContextMenu,
    Escape,
    Execute,
    Find,
    Finish,
    Help,
    Pause,
    Play,
    Props,
    Select,
    ZoomIn,
    ZoomOut,

    // Phone
    AppSwitch,
    Call,
    Camera,
    CameraFocus,
    EndCall,
    GoBack,
    GoHome,
    HeadsetHook,
    LastNumberRedial,
    Notification,
    MannerMode,
    VoiceDial,

    // Media
    ChannelDown,
    ChannelUp,
    MediaFastForward,
    MediaPause,
    MediaPlay,
    MediaPlayPause,
    MediaRecord,
    MediaRewind,
    MediaStop,
    MediaTrackNext,
    MediaTrackPrevious,
}

impl Key {
    /// Shorthand for `Key::Character`
    pub fn character(value: impl Into<String>) -> Self {
        Key::Character(value.into())
    }

    /// Get the variant name of this key (`"Character"` for characters)
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Get the matched character, if this is a character key
    pub fn as_character(&self) -> Option<&str> {
        match self {
            Key::Character(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true for keys produced by the modifier classifier
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Key::Alt
                | Key::AltGraph
                | Key::CapsLock
                | Key::Control
                | Key::Fn
                | Key::FnLock
                | Key::Hyper
                | Key::Meta
                | Key::NumLock
                | Key::ScrollLock
                | Key::Shift
                | Key::Super
                | Key::Symbol
                | Key::SymbolLock
        )
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Character(value) => write!(f, "{}", value),
            other => write!(f, "{}", other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_name() {
        assert_eq!(Key::ArrowUp.name(), "ArrowUp");
        assert_eq!(Key::MediaTrackPrevious.name(), "MediaTrackPrevious");
        assert_eq!(Key::character("a").name(), "Character");
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::character("a").to_string(), "a");
        assert_eq!(Key::F12.to_string(), "F12");
    }

    #[test]
    fn test_character_equality() {
        assert_eq!(Key::character("a"), Key::Character("a".to_string()));
        assert_ne!(Key::character("a"), Key::character("A"));
    }

    #[test]
    fn test_as_character() {
        assert_eq!(Key::character("w").as_character(), Some("w"));
        assert_eq!(Key::Enter.as_character(), None);
    }

    #[test]
    fn test_is_modifier() {
        assert!(Key::Shift.is_modifier());
        assert!(Key::Super.is_modifier());
        assert!(!Key::Enter.is_modifier());
        assert!(!Key::character("a").is_modifier());
    }

    #[test]
    fn test_key_hash() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(Key::character("a"), "value");
        assert_eq!(map.get(&Key::character("a")), Some(&"value"));
        assert_eq!(map.get(&Key::character("b")), None);
    }
}
