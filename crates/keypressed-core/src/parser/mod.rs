// Keypressed Parser
// Classifiers from raw key values to semantic keys, and their composition

mod character;
mod named;

use smallvec::SmallVec;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{Key, RawKey};

pub use character::{character_key, character_key_upper};
pub use named::{
    editing_key, function_key, media_key, modifier_key, navigation_key, phone_key, ui_key,
    whitespace_key,
};

/// A plain classifier function
pub type KeyParser = fn(&RawKey) -> Option<Key>;

/// Anything that can classify a raw key.
///
/// Classification is total: "not recognized" is `None`, never an error.
/// Implemented for every `Fn(&RawKey) -> Option<Key>` and for [`OneOf`].
pub trait KeyParse {
    fn parse(&self, raw: &RawKey) -> Option<Key>;
}

impl<F> KeyParse for F
where
    F: Fn(&RawKey) -> Option<Key>,
{
    fn parse(&self, raw: &RawKey) -> Option<Key> {
        self(raw)
    }
}

/// Order used by [`any_key`]
const ALL_ORIGINAL: [KeyParser; 9] = [
    character_key,
    modifier_key,
    whitespace_key,
    navigation_key,
    editing_key,
    function_key,
    ui_key,
    phone_key,
    media_key,
];

const ALL_UPPER: [KeyParser; 9] = [
    character_key_upper,
    modifier_key,
    whitespace_key,
    navigation_key,
    editing_key,
    function_key,
    ui_key,
    phone_key,
    media_key,
];

fn first_match(parsers: &[KeyParser], raw: &RawKey) -> Option<Key> {
    parsers.iter().find_map(|parse| parse(raw))
}

/// Recognize every known key, keeping character case as reported
pub fn any_key(raw: &RawKey) -> Option<Key> {
    first_match(&ALL_ORIGINAL, raw)
}

/// Recognize every known key, upper-casing characters
pub fn any_key_upper(raw: &RawKey) -> Option<Key> {
    first_match(&ALL_UPPER, raw)
}

/// An ordered list of classifiers where the first match wins
#[derive(Debug, Clone)]
pub struct OneOf {
    parsers: SmallVec<[KeyParser; 9]>,
}

/// Compose classifiers into one, trying each in order
///
/// ```
/// use keypressed_core::parser::{modifier_key, navigation_key, one_of, KeyParse, KeyParser};
/// use keypressed_core::{Key, RawKey};
///
/// let parser = one_of([navigation_key as KeyParser, modifier_key]);
/// assert_eq!(parser.parse(&RawKey::from("Up")), Some(Key::ArrowUp));
/// assert_eq!(parser.parse(&RawKey::from("a")), None);
/// ```
pub fn one_of(parsers: impl IntoIterator<Item = KeyParser>) -> OneOf {
    OneOf {
        parsers: parsers.into_iter().collect(),
    }
}

impl OneOf {
    /// Build from categories, in the order given
    pub fn from_categories(categories: impl IntoIterator<Item = KeyCategory>) -> Self {
        one_of(categories.into_iter().map(KeyCategory::parser))
    }

    /// Same as [`OneOf::from_categories`] but characters are upper-cased
    pub fn from_categories_upper(categories: impl IntoIterator<Item = KeyCategory>) -> Self {
        one_of(categories.into_iter().map(KeyCategory::upper_parser))
    }

    /// Number of composed classifiers
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl Default for OneOf {
    /// The nine categories in the same order as [`any_key`]
    fn default() -> Self {
        one_of(ALL_ORIGINAL)
    }
}

impl KeyParse for OneOf {
    fn parse(&self, raw: &RawKey) -> Option<Key> {
        first_match(&self.parsers, raw)
    }
}

/// The nine classifier categories
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum KeyCategory {
    Character,
    Modifier,
    Whitespace,
    Navigation,
    Editing,
    Function,
    Ui,
    Phone,
    Media,
}

impl KeyCategory {
    /// The classifier for this category
    pub fn parser(self) -> KeyParser {
        match self {
            KeyCategory::Character => character_key,
            KeyCategory::Modifier => modifier_key,
            KeyCategory::Whitespace => whitespace_key,
            KeyCategory::Navigation => navigation_key,
            KeyCategory::Editing => editing_key,
            KeyCategory::Function => function_key,
            KeyCategory::Ui => ui_key,
            KeyCategory::Phone => phone_key,
            KeyCategory::Media => media_key,
        }
    }

    /// Like [`KeyCategory::parser`], with characters upper-cased
    pub fn upper_parser(self) -> KeyParser {
        match self {
            KeyCategory::Character => character_key_upper,
            other => other.parser(),
        }
    }
}
