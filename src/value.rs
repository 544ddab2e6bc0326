//! The values a list may hold.
//!
//! A `Value` is a closed sum over the supported kinds of payload. Owned payloads -- strings -- are deep copies of
//! whatever the caller provided, while opaque payloads are caller pointers which are never dereferenced, nor freed.

mod decimal;
mod integer;
mod key;
mod opaque;
mod text;

use core::fmt;

pub use decimal::{Decimal, DecimalKind};
pub use integer::{Integer, IntegerKind};
pub use key::Key;
pub use opaque::{Opaque, User, Void};
pub use text::{StringKind, Text};

/// The kind of a `Value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A `Value::Boolean`.
    Boolean,
    /// A `Value::Integer`.
    Integer,
    /// A `Value::Decimal`.
    Decimal,
    /// A `Value::String`.
    String,
    /// A `Value::User`.
    User,
    /// A `Value::Void`.
    Void,
}

impl Kind {
    /// Returns the name of the kind, in lowercase.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::String => "string",
            Self::User => "user",
            Self::Void => "void",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(self.name())
    }
}

/// A value of any supported kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A logical flag.
    Boolean(bool),
    /// An integer, narrowed to its requested width.
    Integer(Integer),
    /// A floating point number, narrowed to its requested precision.
    Decimal(Decimal),
    /// An owned narrow or wide string.
    String(Text),
    /// A caller-owned pointer.
    User(Opaque),
    /// A caller pointer, held in a slot of its own.
    Void(Opaque),
}

impl Value {
    /// Returns the kind of the value.
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Boolean(_) => Kind::Boolean,
            Self::Integer(_) => Kind::Integer,
            Self::Decimal(_) => Kind::Decimal,
            Self::String(_) => Kind::String,
            Self::User(_) => Kind::User,
            Self::Void(_) => Kind::Void,
        }
    }

    /// Returns the flag, if a boolean.
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(boolean) => Some(*boolean),
            _ => None,
        }
    }

    /// Returns the integer, if any.
    pub const fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Integer(integer) => Some(integer),
            _ => None,
        }
    }

    /// Returns the decimal, if any.
    pub const fn as_decimal(&self) -> Option<&Decimal> {
        match self {
            Self::Decimal(decimal) => Some(decimal),
            _ => None,
        }
    }

    /// Returns the string, if any.
    pub const fn as_text(&self) -> Option<&Text> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the caller pointer of a user or void value.
    pub const fn as_opaque(&self) -> Option<Opaque> {
        match self {
            Self::User(opaque) | Self::Void(opaque) => Some(*opaque),
            _ => None,
        }
    }

    /// Returns the number of heap bytes owned by the value.
    ///
    /// Opaque values own nothing: their pointee belongs to the caller.
    pub fn heap_size(&self) -> usize {
        match self {
            Self::String(text) => text.heap_size(),
            _ => 0,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Integer> for Value {
    fn from(value: Integer) -> Self {
        Self::Integer(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<Text> for Value {
    fn from(value: Text) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(Text::narrow(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(Text::from(value))
    }
}

impl From<User> for Value {
    fn from(value: User) -> Self {
        Self::User(value.0)
    }
}

impl From<Void> for Value {
    fn from(value: Void) -> Self {
        Self::Void(value.0)
    }
}

macro_rules! value_from_primitive {
    ($via:ident: $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::from($via::from(value))
                }
            }
        )*
    };
}

value_from_primitive!(Integer: i8, u8, i16, u16, i32, u32, i64, u64);
value_from_primitive!(Decimal: f32, f64);

/// Checked extraction of a specific kind of payload out of a `Value`.
pub trait FromValue: Sized {
    /// The kind of value this type is extracted from.
    const KIND: Kind;

    /// Extracts `Self` from `value`.
    ///
    /// #   Errors
    ///
    /// Returns `value` untouched if its kind is not `Self::KIND`.
    fn from_value(value: Value) -> Result<Self, Value>;
}

impl FromValue for bool {
    const KIND: Kind = Kind::Boolean;

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Boolean(boolean) => Ok(boolean),
            other => Err(other),
        }
    }
}

impl FromValue for Integer {
    const KIND: Kind = Kind::Integer;

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Integer(integer) => Ok(integer),
            other => Err(other),
        }
    }
}

impl FromValue for Decimal {
    const KIND: Kind = Kind::Decimal;

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Decimal(decimal) => Ok(decimal),
            other => Err(other),
        }
    }
}

impl FromValue for Text {
    const KIND: Kind = Kind::String;

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::String(text) => Ok(text),
            other => Err(other),
        }
    }
}

impl FromValue for User {
    const KIND: Kind = Kind::User;

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::User(opaque) => Ok(User(opaque)),
            other => Err(other),
        }
    }
}

impl FromValue for Void {
    const KIND: Kind = Kind::Void;

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Void(opaque) => Ok(Void(opaque)),
            other => Err(other),
        }
    }
}

// mod tests
