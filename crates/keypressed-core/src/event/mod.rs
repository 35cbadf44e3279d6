// Keypressed Event Layer
// Host event decoding, the keyboard tracker and replay scripts

mod host;
mod keyboard;
pub mod script;

pub use host::HostEvent;
pub use keyboard::Keyboard;
pub use script::{Script, ScriptError};
