// Keypressed Event Layer - Keyboard Tracker
// Owns one classifier and one pressed-keys state, fed one event at a time

use log::{debug, trace};

use super::HostEvent;
use crate::arrows::{Arrows, Direction, Layout};
use crate::parser::{KeyParse, OneOf};
use crate::{Key, KeyChange, KeyEvent, PressedKeys};

/// Tracks which keys are held.
///
/// This is the same as threading a [`PressedKeys`] through
/// [`transition_with_change`](crate::transition_with_change) with a fixed
/// classifier. Events must be handled in the order the host delivered them;
/// a release without a matching press is ignored.
#[derive(Debug, Clone, Default)]
pub struct Keyboard<P = OneOf> {
    parser: P,
    pressed: PressedKeys,
}

impl Keyboard<OneOf> {
    /// Track every known key
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: KeyParse> Keyboard<P> {
    /// Track only the keys `parser` recognizes
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            pressed: PressedKeys::new(),
        }
    }

    /// Apply one event and report the change it caused
    pub fn handle(&mut self, event: &KeyEvent) -> Option<KeyChange> {
        let change = self.pressed.apply_with_change(&self.parser, event);
        match (&change, event) {
            (Some(change), _) => {
                debug!("{:?} -> {} held", change, self.pressed.len());
            }
            (None, KeyEvent::Clear) => {
                debug!("Cleared pressed keys");
            }
            (None, KeyEvent::Down(raw) | KeyEvent::Up(raw)) => {
                trace!("No change for {}", raw);
            }
        }
        change
    }

    /// Decode and apply a host event
    pub fn handle_host(&mut self, event: HostEvent) -> Option<KeyChange> {
        self.handle(&KeyEvent::from(event))
    }

    /// The keys currently held, most recent first
    pub fn pressed(&self) -> &PressedKeys {
        &self.pressed
    }

    /// Check if a key is currently held
    pub fn is_pressed(&self, key: &Key) -> bool {
        self.pressed.contains(key)
    }

    /// Release everything without reporting changes
    pub fn reset(&mut self) {
        self.pressed.clear();
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Project held keys onto `layout`
    pub fn arrows(&self, layout: Layout) -> Arrows {
        layout.arrows(&self.pressed)
    }

    pub fn direction(&self, layout: Layout) -> Direction {
        layout.direction(&self.pressed)
    }

    /// Give up the tracker, keeping the state
    pub fn into_pressed(self) -> PressedKeys {
        self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{any_key_upper, navigation_key, KeyParser};

    #[test]
    fn test_keyboard_new_is_empty() {
        let keyboard = Keyboard::new();
        assert!(keyboard.pressed().is_empty());
        assert_eq!(keyboard.direction(Layout::Arrows), Direction::NoDirection);
    }

    #[test]
    fn test_keyboard_handle_reports_changes() {
        let mut keyboard = Keyboard::new();
        assert_eq!(
            keyboard.handle(&KeyEvent::down("Shift")),
            Some(KeyChange::KeyDown(Key::Shift))
        );
        assert_eq!(keyboard.handle(&KeyEvent::down("Shift")), None);
        assert!(keyboard.is_pressed(&Key::Shift));
        assert_eq!(
            keyboard.handle(&KeyEvent::up("Shift")),
            Some(KeyChange::KeyUp(Key::Shift))
        );
        assert!(!keyboard.is_pressed(&Key::Shift));
    }

    #[test]
    fn test_keyboard_blur_clears() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_host(HostEvent::Keydown { key: "a".into() });
        keyboard.handle_host(HostEvent::Keydown { key: "Control".into() });
        assert_eq!(keyboard.pressed().len(), 2);
        assert_eq!(keyboard.handle_host(HostEvent::Blur), None);
        assert!(keyboard.pressed().is_empty());
    }

    #[test]
    fn test_keyboard_with_parser() {
        let mut keyboard = Keyboard::with_parser(navigation_key as KeyParser);
        assert_eq!(keyboard.handle(&KeyEvent::down("a")), None);
        keyboard.handle(&KeyEvent::down("ArrowUp"));
        keyboard.handle(&KeyEvent::down("Right"));
        assert_eq!(keyboard.arrows(Layout::Arrows), Arrows::new(1, 1));
        assert_eq!(keyboard.direction(Layout::Arrows), Direction::NorthEast);
    }

    #[test]
    fn test_keyboard_wasd_with_upper_parser() {
        let mut keyboard = Keyboard::with_parser(any_key_upper);
        keyboard.handle(&KeyEvent::down("a"));
        keyboard.handle(&KeyEvent::down("W"));
        assert!(keyboard.is_pressed(&Key::character("A")));
        assert_eq!(keyboard.direction(Layout::Wasd), Direction::NorthWest);
        // Releasing the other case releases the same key
        keyboard.handle(&KeyEvent::up("A"));
        assert_eq!(keyboard.direction(Layout::Wasd), Direction::North);
    }

    #[test]
    fn test_keyboard_reset_and_into_pressed() {
        let mut keyboard = Keyboard::new();
        keyboard.handle(&KeyEvent::down("F5"));
        let pressed = keyboard.clone().into_pressed();
        assert_eq!(pressed.to_vec(), vec![Key::F5]);
        keyboard.reset();
        assert!(keyboard.pressed().is_empty());
    }
}
