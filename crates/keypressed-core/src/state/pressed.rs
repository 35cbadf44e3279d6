// Keypressed Pressed Key State
// Insertion-ordered, de-duplicated set of held keys driven by down/up/clear events

use indexmap::IndexSet;

use crate::parser::KeyParse;
use crate::{Key, RawKey};

/// An event from the host, reduced to what the state machine needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// A key went down (including auto-repeat)
    Down(RawKey),
    /// A key went up
    Up(RawKey),
    /// Everything was released at once, e.g. the window lost focus
    Clear,
}

impl KeyEvent {
    /// Shorthand for `KeyEvent::Down`
    pub fn down(raw: impl Into<RawKey>) -> Self {
        KeyEvent::Down(raw.into())
    }

    /// Shorthand for `KeyEvent::Up`
    pub fn up(raw: impl Into<RawKey>) -> Self {
        KeyEvent::Up(raw.into())
    }

    /// The raw key carried by this event, if any
    pub fn raw_key(&self) -> Option<&RawKey> {
        match self {
            KeyEvent::Down(raw) | KeyEvent::Up(raw) => Some(raw),
            KeyEvent::Clear => None,
        }
    }
}

/// A single membership transition of [`PressedKeys`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyChange {
    KeyDown(Key),
    KeyUp(Key),
}

impl KeyChange {
    /// The key that went down or up
    pub fn key(&self) -> &Key {
        match self {
            KeyChange::KeyDown(key) | KeyChange::KeyUp(key) => key,
        }
    }

    pub fn is_down(&self) -> bool {
        matches!(self, KeyChange::KeyDown(_))
    }
}

/// The keys currently held, most recently pressed first.
///
/// Each key appears at most once. Only keys recognized by the classifier the
/// state is driven with are ever inserted. Two states are equal only when
/// they hold the same keys in the same order.
#[derive(Debug, Clone, Default)]
pub struct PressedKeys {
    keys: IndexSet<Key>,
}

impl PartialEq for PressedKeys {
    fn eq(&self, other: &Self) -> bool {
        self.keys.iter().eq(other.keys.iter())
    }
}

impl Eq for PressedKeys {}

impl PressedKeys {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of held keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Check if a key is currently held
    pub fn contains(&self, key: &Key) -> bool {
        self.keys.contains(key)
    }

    /// Iterate from most to least recently pressed
    pub fn iter(&self) -> impl Iterator<Item = &Key> {
        self.keys.iter()
    }

    /// The most recently pressed key still held
    pub fn latest(&self) -> Option<&Key> {
        self.keys.first()
    }

    /// Copy the held keys out, most recent first
    pub fn to_vec(&self) -> Vec<Key> {
        self.keys.iter().cloned().collect()
    }

    /// Move `key` to the front, inserting it if absent.
    ///
    /// Returns true if the key was not held before.
    pub fn press(&mut self, key: Key) -> bool {
        let was_held = self.keys.shift_remove(&key);
        self.keys.shift_insert(0, key);
        !was_held
    }

    /// Remove `key`, keeping the order of the others.
    ///
    /// Returns true if the key was held.
    pub fn release(&mut self, key: &Key) -> bool {
        self.keys.shift_remove(key)
    }

    /// Release everything
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Apply one event in place, discarding the change
    pub fn apply<P: KeyParse + ?Sized>(&mut self, parser: &P, event: &KeyEvent) {
        self.apply_with_change(parser, event);
    }

    /// Apply one event in place and report the membership change, if any.
    ///
    /// Unrecognized raw keys, re-pressing a held key and releasing a key that
    /// is not held all leave membership unchanged and report nothing. `Clear`
    /// never reports a change.
    pub fn apply_with_change<P: KeyParse + ?Sized>(
        &mut self,
        parser: &P,
        event: &KeyEvent,
    ) -> Option<KeyChange> {
        match event {
            KeyEvent::Down(raw) => {
                let key = parser.parse(raw)?;
                self.press(key.clone()).then_some(KeyChange::KeyDown(key))
            }
            KeyEvent::Up(raw) => {
                let key = parser.parse(raw)?;
                self.release(&key).then_some(KeyChange::KeyUp(key))
            }
            KeyEvent::Clear => {
                self.clear();
                None
            }
        }
    }
}

impl<'a> IntoIterator for &'a PressedKeys {
    type Item = &'a Key;
    type IntoIter = indexmap::set::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

/// Compute the state after `event`
pub fn transition<P: KeyParse + ?Sized>(
    parser: &P,
    event: &KeyEvent,
    state: PressedKeys,
) -> PressedKeys {
    transition_with_change(parser, event, state).0
}

/// Compute the state after `event`, along with the change it caused
pub fn transition_with_change<P: KeyParse + ?Sized>(
    parser: &P,
    event: &KeyEvent,
    mut state: PressedKeys,
) -> (PressedKeys, Option<KeyChange>) {
    let change = state.apply_with_change(parser, event);
    (state, change)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{any_key, navigation_key};

    fn run(events: &[KeyEvent]) -> PressedKeys {
        events
            .iter()
            .fold(PressedKeys::new(), |state, event| transition(&any_key, event, state))
    }

    #[test]
    fn test_down_inserts_most_recent_first() {
        let state = run(&[KeyEvent::down("a"), KeyEvent::down("b")]);
        assert_eq!(state.to_vec(), vec![Key::character("b"), Key::character("a")]);
        assert_eq!(state.latest(), Some(&Key::character("b")));
    }

    #[test]
    fn test_repeated_down_is_deduplicated() {
        let (state, first) =
            transition_with_change(&any_key, &KeyEvent::down("a"), PressedKeys::new());
        assert_eq!(first, Some(KeyChange::KeyDown(Key::character("a"))));

        let (state, second) = transition_with_change(&any_key, &KeyEvent::down("a"), state);
        assert_eq!(second, None);
        assert_eq!(state.to_vec(), vec![Key::character("a")]);
    }

    #[test]
    fn test_repress_moves_key_to_front() {
        let state = run(&[
            KeyEvent::down("a"),
            KeyEvent::down("b"),
            KeyEvent::down("c"),
            KeyEvent::down("a"),
        ]);
        assert_eq!(
            state.to_vec(),
            vec![Key::character("a"), Key::character("c"), Key::character("b")]
        );
    }

    #[test]
    fn test_up_removes_key_and_keeps_order() {
        let mut state = run(&[KeyEvent::down("a"), KeyEvent::down("b"), KeyEvent::down("c")]);
        let change = state.apply_with_change(&any_key, &KeyEvent::up("b"));
        assert_eq!(change, Some(KeyChange::KeyUp(Key::character("b"))));
        assert_eq!(state.to_vec(), vec![Key::character("c"), Key::character("a")]);
    }

    #[test]
    fn test_up_of_absent_key_is_noop() {
        let (state, change) =
            transition_with_change(&any_key, &KeyEvent::up("a"), PressedKeys::new());
        assert!(state.is_empty());
        assert_eq!(change, None);
    }

    #[test]
    fn test_unrecognized_keys_leave_state_unchanged() {
        let state = run(&[KeyEvent::down("a"), KeyEvent::down("Shift")]);
        for event in [KeyEvent::down("Unidentified"), KeyEvent::up("Dead")] {
            let (next, change) = transition_with_change(&any_key, &event, state.clone());
            assert_eq!(next.to_vec(), state.to_vec());
            assert_eq!(change, None);
        }
    }

    #[test]
    fn test_clear_empties_without_change() {
        let state = run(&[KeyEvent::down("a"), KeyEvent::down("ArrowUp"), KeyEvent::down("F1")]);
        assert_eq!(state.len(), 3);
        let (state, change) = transition_with_change(&any_key, &KeyEvent::Clear, state);
        assert!(state.is_empty());
        assert_eq!(change, None);

        let state = transition(&any_key, &KeyEvent::Clear, PressedKeys::new());
        assert!(state.is_empty());
    }

    #[test]
    fn test_classifier_limits_what_is_tracked() {
        let mut state = PressedKeys::new();
        assert_eq!(state.apply_with_change(&navigation_key, &KeyEvent::down("a")), None);
        assert_eq!(
            state.apply_with_change(&navigation_key, &KeyEvent::down("Up")),
            Some(KeyChange::KeyDown(Key::ArrowUp))
        );
        // Legacy and modern names resolve to the same key
        assert_eq!(
            state.apply_with_change(&navigation_key, &KeyEvent::up("ArrowUp")),
            Some(KeyChange::KeyUp(Key::ArrowUp))
        );
        assert!(state.is_empty());
    }

    #[test]
    fn test_space_variants_share_one_key() {
        let state = run(&[KeyEvent::down(" "), KeyEvent::down("Spacebar")]);
        assert_eq!(state.to_vec(), vec![Key::Spacebar]);
        let state = transition(&any_key, &KeyEvent::up(" "), state);
        assert!(state.is_empty());
    }

    #[test]
    fn test_equality_respects_order() {
        let ab = run(&[KeyEvent::down("a"), KeyEvent::down("b")]);
        let ba = run(&[KeyEvent::down("b"), KeyEvent::down("a")]);
        assert_ne!(ab, ba);
        assert_eq!(ab, run(&[KeyEvent::down("b"), KeyEvent::down("a"), KeyEvent::down("b")]));
        assert_eq!(PressedKeys::new(), run(&[KeyEvent::down("a"), KeyEvent::up("a")]));
    }

    #[test]
    fn test_apply_in_place() {
        let mut state = PressedKeys::new();
        state.apply(&any_key, &KeyEvent::down("Shift"));
        state.apply(&any_key, &KeyEvent::down("Shift"));
        state.apply(&any_key, &KeyEvent::down("x"));
        assert_eq!(state.to_vec(), vec![Key::character("x"), Key::Shift]);
        state.apply(&any_key, &KeyEvent::up("Shift"));
        assert_eq!(state, run(&[KeyEvent::down("x")]));
        state.apply(&any_key, &KeyEvent::Clear);
        assert!(state.is_empty());
    }

    #[test]
    fn test_key_change_accessors() {
        let down = KeyChange::KeyDown(Key::Shift);
        let up = KeyChange::KeyUp(Key::Shift);
        assert_eq!(down.key(), &Key::Shift);
        assert!(down.is_down());
        assert!(!up.is_down());
    }

    #[test]
    fn test_event_raw_key() {
        assert_eq!(KeyEvent::down("a").raw_key(), Some(&RawKey::from("a")));
        assert_eq!(KeyEvent::Clear.raw_key(), None);
    }
}
