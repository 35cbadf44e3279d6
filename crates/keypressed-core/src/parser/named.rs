// Keypressed Parser - Named Keys
// Exact, case-sensitive matches against the host's key name tables

use crate::{Key, RawKey};

/// Recognize modifier keys (`"OS"` is the legacy name for `Super`)
pub fn modifier_key(raw: &RawKey) -> Option<Key> {
    match raw.raw_value() {
        "Alt" => Some(Key::Alt),
        "AltGraph" => Some(Key::AltGraph),
        "CapsLock" => Some(Key::CapsLock),
        "Control" => Some(Key::Control),
        "Fn" => Some(Key::Fn),
        "FnLock" => Some(Key::FnLock),
        "Hyper" => Some(Key::Hyper),
        "Meta" => Some(Key::Meta),
        "NumLock" => Some(Key::NumLock),
        "ScrollLock" => Some(Key::ScrollLock),
        "Shift" => Some(Key::Shift),
        "Super" | "OS" => Some(Key::Super),
        "Symbol" => Some(Key::Symbol),
        "SymbolLock" => Some(Key::SymbolLock),
        _ => None,
    }
}

/// Recognize Enter, Tab and the space bar (both `"Spacebar"` and `" "`)
pub fn whitespace_key(raw: &RawKey) -> Option<Key> {
    match raw.raw_value() {
        "Enter" => Some(Key::Enter),
        "Tab" => Some(Key::Tab),
        "Spacebar" | " " => Some(Key::Spacebar),
        _ => None,
    }
}

/// Recognize arrows, Home/End and paging keys
///
/// Older browsers report arrows without the `Arrow` prefix.
pub fn navigation_key(raw: &RawKey) -> Option<Key> {
    match raw.raw_value() {
        "ArrowDown" | "Down" => Some(Key::ArrowDown),
        "ArrowLeft" | "Left" => Some(Key::ArrowLeft),
        "ArrowRight" | "Right" => Some(Key::ArrowRight),
        "ArrowUp" | "Up" => Some(Key::ArrowUp),
        "End" => Some(Key::End),
        "Home" => Some(Key::Home),
        "PageDown" => Some(Key::PageDown),
        "PageUp" => Some(Key::PageUp),
        _ => None,
    }
}

pub fn editing_key(raw: &RawKey) -> Option<Key> {
    match raw.raw_value() {
        "Backspace" => Some(Key::Backspace),
        "Clear" => Some(Key::Clear),
        "Copy" => Some(Key::Copy),
        "CrSel" => Some(Key::CrSel),
        "Cut" => Some(Key::Cut),
        "Delete" => Some(Key::Delete),
        "EraseEof" => Some(Key::EraseEof),
        "ExSel" => Some(Key::ExSel),
        "Insert" => Some(Key::Insert),
        "Paste" => Some(Key::Paste),
        "Redo" => Some(Key::Redo),
        "Undo" => Some(Key::Undo),
        _ => None,
    }
}

/// Recognize `F1` through `F20`
pub fn function_key(raw: &RawKey) -> Option<Key> {
    match raw.raw_value() {
        "F1" => Some(Key::F1),
        "F2" => Some(Key::F2),
        "F3" => Some(Key::F3),
        "F4" => Some(Key::F4),
        "F5" => Some(Key::F5),
        "F6" => Some(Key::F6),
        "F7" => Some(Key::F7),
        "F8" => Some(Key::F8),
        "F9" => Some(Key::F9),
        "F10" => Some(Key::F10),
        "F11" => Some(Key::F11),
        "F12" => Some(Key::F12),
        "F13" => Some(Key::F13),
        "F14" => Some(Key::F14),
        "F15" => Some(Key::F15),
        "F16" => Some(Key::F16),
        "F17" => Some(Key::F17),
        "F18" => Some(Key::F18),
        "F19" => Some(Key::F19),
        "F20" => Some(Key::F20),
        _ => None,
    }
}

pub fn ui_key(raw: &RawKey) -> Option<Key> {
    match raw.raw_value() {
        "Again" => Some(Key::Again),
        "Attn" => Some(Key::Attn),
        "Cancel" => Some(Key::Cancel),
        "ContextMenu" => Some(Key::ContextMenu),
        "Escape" => Some(Key::Escape),
        "Execute" => Some(Key::Execute),
        "Find" => Some(Key::Find),
        "Finish" => Some(Key::Finish),
        "Help" => Some(Key::Help),
        "Pause" => Some(Key::Pause),
        "Play" => Some(Key::Play),
        "Props" => Some(Key::Props),
        "Select" => Some(Key::Select),
        "ZoomIn" => Some(Key::ZoomIn),
        "ZoomOut" => Some(Key::ZoomOut),
        _ => None,
    }
}

/// Recognize the keys found on phone keypads and headsets
pub fn phone_key(raw: &RawKey) -> Option<Key> {
    match raw.raw_value() {
        "AppSwitch" => Some(Key::AppSwitch),
        "Call" => Some(Key::Call),
        "Camera" => Some(Key::Camera),
        "CameraFocus" => Some(Key::CameraFocus),
        "EndCall" => Some(Key::EndCall),
        "GoBack" => Some(Key::GoBack),
        "GoHome" => Some(Key::GoHome),
        "HeadsetHook" => Some(Key::HeadsetHook),
        "LastNumberRedial" => Some(Key::LastNumberRedial),
        "Notification" => Some(Key::Notification),
        "MannerMode" => Some(Key::MannerMode),
        "VoiceDial" => Some(Key::VoiceDial),
        _ => None,
    }
}

pub fn media_key(raw: &RawKey) -> Option<Key> {
    match raw.raw_value() {
        "ChannelDown" => Some(Key::ChannelDown),
        "ChannelUp" => Some(Key::ChannelUp),
        "MediaFastForward" => Some(Key::MediaFastForward),
        "MediaPause" => Some(Key::MediaPause),
        "MediaPlay" => Some(Key::MediaPlay),
        "MediaPlayPause" => Some(Key::MediaPlayPause),
        "MediaRecord" => Some(Key::MediaRecord),
        "MediaRewind" => Some(Key::MediaRewind),
        "MediaStop" => Some(Key::MediaStop),
        "MediaTrackNext" => Some(Key::MediaTrackNext),
        "MediaTrackPrevious" => Some(Key::MediaTrackPrevious),
        _ => None,
    }
}
