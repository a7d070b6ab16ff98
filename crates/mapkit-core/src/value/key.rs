//! Mapping keys.

use std::cmp::Ordering;

/// Scalar key of a `Mapping`. Keys of different kinds may share a mapping;
/// `Key::Integer(1)` and `Key::String("1")` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Bool(bool),
    Integer(i64),
    String(String),
}

impl Key {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Key::Bool(_) => "bool",
            Key::Integer(_) => "integer",
            Key::String(_) => "string",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::String(s) => Some(s),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Key::Bool(_) => 0,
            Key::Integer(_) => 1,
            Key::String(_) => 2,
        }
    }

    /// Orders keys by their textual form, breaking ties by kind
    /// (bool < integer < string).
    pub fn cmp_textual(&self, other: &Key) -> Ordering {
        self.to_string()
            .cmp(&other.to_string())
            .then_with(|| self.rank().cmp(&other.rank()))
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::String(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::String(s)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Integer(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Integer(i64::from(i))
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}
