//! Owned strings, narrow or wide.

use core::{
    fmt::{self, Write as _},
    mem,
};

/// The width of the characters of a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StringKind {
    /// UTF-8 encoded.
    Narrow,
    /// One `char` per code point.
    Wide,
}

/// An owned string.
///
/// The string is always a copy of the caller's buffer, and is freed alongside the value holding it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Text {
    /// A narrow, UTF-8 encoded, string.
    Narrow(String),
    /// A wide string.
    Wide(Vec<char>),
}

impl Text {
    /// Copies `string` into a new string of the given `kind`.
    pub fn new(string: &str, kind: StringKind) -> Self {
        match kind {
            StringKind::Narrow => Self::narrow(string),
            StringKind::Wide => Self::wide(string),
        }
    }

    /// Copies `string` into a new narrow string.
    pub fn narrow(string: &str) -> Self {
        Self::Narrow(string.to_owned())
    }

    /// Copies `string` into a new wide string.
    pub fn wide(string: &str) -> Self {
        Self::Wide(string.chars().collect())
    }

    /// Returns the kind of the string.
    pub const fn kind(&self) -> StringKind {
        match self {
            Self::Narrow(_) => StringKind::Narrow,
            Self::Wide(_) => StringKind::Wide,
        }
    }

    /// Returns the string, if narrow.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Narrow(string) => Some(string),
            Self::Wide(_) => None,
        }
    }

    /// Returns the characters of the string, if wide.
    pub fn as_chars(&self) -> Option<&[char]> {
        match self {
            Self::Narrow(_) => None,
            Self::Wide(chars) => Some(chars),
        }
    }

    /// Returns whether the string is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Narrow(string) => string.is_empty(),
            Self::Wide(chars) => chars.is_empty(),
        }
    }

    /// Returns the number of heap bytes holding the characters.
    pub fn heap_size(&self) -> usize {
        match self {
            Self::Narrow(string) => string.len(),
            Self::Wide(chars) => chars.len() * mem::size_of::<char>(),
        }
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::Narrow(string) => f.write_str(string),
            Self::Wide(chars) => chars.iter().try_for_each(|c| f.write_char(*c)),
        }
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::narrow(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self::Narrow(value)
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        match self {
            Self::Narrow(string) => string == other,
            Self::Wide(chars) => chars.iter().copied().eq(other.chars()),
        }
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

// mod tests
