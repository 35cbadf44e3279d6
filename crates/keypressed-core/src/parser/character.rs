// Keypressed Parser - Character Keys
// Best-guess single character recognition

use crate::{Key, RawKey};

/// Returns the raw value when it is exactly one code point.
///
/// `" "` is left to the whitespace classifier, which maps it to `Spacebar`.
fn single_character(raw: &RawKey) -> Option<&str> {
    let value = raw.raw_value();
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(' '), None) => None,
        (Some(_), None) => Some(value),
        _ => None,
    }
}

/// Recognize a single character, keeping the case the host reported.
///
/// ```
/// use keypressed_core::{parser::character_key, Key, RawKey};
/// assert_eq!(character_key(&RawKey::from("q")), Some(Key::character("q")));
/// assert_eq!(character_key(&RawKey::from("Shift")), None);
/// ```
pub fn character_key(raw: &RawKey) -> Option<Key> {
    single_character(raw).map(Key::character)
}

/// Recognize a single character and normalize it to upper case
///
/// Characters whose upper case form is several code points (e.g. `ß`) keep
/// that full form.
pub fn character_key_upper(raw: &RawKey) -> Option<Key> {
    single_character(raw).map(|value| Key::Character(value.to_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_code_point() {
        assert_eq!(character_key(&"a".into()), Some(Key::character("a")));
        assert_eq!(character_key(&"A".into()), Some(Key::character("A")));
        assert_eq!(character_key(&"7".into()), Some(Key::character("7")));
        assert_eq!(character_key(&"é".into()), Some(Key::character("é")));
        assert_eq!(character_key(&"€".into()), Some(Key::character("€")));
    }

    #[test]
    fn test_rejects_multi_character_values() {
        assert_eq!(character_key(&"".into()), None);
        assert_eq!(character_key(&"ab".into()), None);
        assert_eq!(character_key(&"Enter".into()), None);
        // e + combining acute accent is two code points
        assert_eq!(character_key(&"e\u{301}".into()), None);
    }

    #[test]
    fn test_space_is_not_a_character() {
        assert_eq!(character_key(&" ".into()), None);
        assert_eq!(character_key_upper(&" ".into()), None);
    }

    #[test]
    fn test_upper_normalizes_case() {
        assert_eq!(character_key_upper(&"w".into()), Some(Key::character("W")));
        assert_eq!(character_key_upper(&"W".into()), Some(Key::character("W")));
        assert_eq!(character_key_upper(&"1".into()), Some(Key::character("1")));
        assert_eq!(character_key_upper(&"ß".into()), Some(Key::character("SS")));
    }
}
