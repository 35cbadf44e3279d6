// Keypressed Core Library
// Semantic key classification and pressed-keys tracking

pub mod arrows;
pub mod event;
pub mod key;
pub mod parser;
pub mod raw;
pub mod settings;
pub mod state;

pub use arrows::{
    arrows, arrows_direction, direction, wasd, wasd_direction, Arrows, Direction, Layout,
};
pub use event::{HostEvent, Keyboard, Script, ScriptError};
pub use key::Key;
pub use parser::{any_key, any_key_upper, one_of, KeyCategory, KeyParse, KeyParser, OneOf};
pub use raw::RawKey;
pub use settings::{Settings, SettingsError};
pub use state::{transition, transition_with_change, KeyChange, KeyEvent, PressedKeys};
