use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Pattern character standing in for an unfilled cell.
///
/// Used in line patterns (memo keys) and hole-table lookup keys; matches any
/// single letter during slice matching.
pub const HOLE_CHAR: char = '.';

/// A single lowercase ASCII letter, the only value a filled cell can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Number of distinct letters (the a-z alphabet).
    pub const COUNT: usize = 26;

    /// Creates a letter from a char, returning `None` unless it is `'a'..='z'`.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_lowercase() {
            Some(Self(ch as u8))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based position in the alphabet (`'a'` is 0).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    /// Iterates over the whole alphabet in order.
    pub fn alphabet() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Letter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_char(self.as_char())
    }
}

impl<'de> Deserialize<'de> for Letter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ch = char::deserialize(deserializer)?;
        Self::from_char(ch)
            .ok_or_else(|| serde::de::Error::custom(format!("not a lowercase letter: {ch:?}")))
    }
}

/// One grid cell: a placed letter, or `None` for the empty sentinel.
pub type Cell = Option<Letter>;

/// Pattern character for a cell (`'.'` when empty).
#[must_use]
pub fn cell_char(cell: Cell) -> char {
    cell.map_or(HOLE_CHAR, Letter::as_char)
}
