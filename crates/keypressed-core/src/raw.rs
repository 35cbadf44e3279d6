// Keypressed Raw Key
// Opaque holder for the key string reported by the host environment

use std::fmt;

/// The unprocessed `key` value of a host keyboard event.
///
/// The string is kept verbatim (no trimming, no case folding). Classifiers
/// decide what it means.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawKey(String);

impl RawKey {
    /// Wrap a raw key string
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the verbatim key string
    pub fn raw_value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RawKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RawKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
