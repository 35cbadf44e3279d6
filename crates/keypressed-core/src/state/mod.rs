// Keypressed State Layer
// Pressed-keys state machine

mod pressed;

pub use pressed::{transition, transition_with_change, KeyChange, KeyEvent, PressedKeys};
