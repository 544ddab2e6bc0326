//! Integers of any width and signedness.

use core::fmt;

/// The width and signedness an integer was requested with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntegerKind {
    /// Signed, 8 bits.
    I8,
    /// Unsigned, 8 bits.
    U8,
    /// Signed, 16 bits.
    I16,
    /// Unsigned, 16 bits.
    U16,
    /// Signed, 32 bits.
    I32,
    /// Unsigned, 32 bits.
    U32,
    /// Signed, 64 bits.
    I64,
    /// Unsigned, 64 bits.
    U64,
}

impl IntegerKind {
    /// Returns whether the kind is signed.
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    /// Returns the width of the kind, in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 => 16,
            Self::I32 | Self::U32 => 32,
            Self::I64 | Self::U64 => 64,
        }
    }

    //  Truncates `value` to the representation of `self`, then widens it back.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    const fn narrow(self, value: i128) -> i128 {
        match self {
            Self::I8 => value as i8 as i128,
            Self::U8 => value as u8 as i128,
            Self::I16 => value as i16 as i128,
            Self::U16 => value as u16 as i128,
            Self::I32 => value as i32 as i128,
            Self::U32 => value as u32 as i128,
            Self::I64 => value as i64 as i128,
            Self::U64 => value as u64 as i128,
        }
    }
}

/// An integer, alongside the width and signedness it was requested with.
///
/// Construction never fails: out of range values are truncated, as an `as` cast would.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Integer {
    kind: IntegerKind,
    //  Invariant: `value` is representable by `kind`.
    value: i128,
}

impl Integer {
    /// Creates an integer of the given `kind`, truncating `value` as necessary.
    pub const fn new(value: i128, kind: IntegerKind) -> Self {
        let value = kind.narrow(value);

        Self { kind, value }
    }

    /// Returns the kind of the integer.
    pub const fn kind(&self) -> IntegerKind {
        self.kind
    }

    /// Returns the value of the integer.
    pub const fn get(&self) -> i128 {
        self.value
    }

    /// Returns the value, if representable as an `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(self.value).ok()
    }

    /// Returns the value, if representable as an `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(self.value).ok()
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.value)
    }
}

macro_rules! integer_from_primitive {
    ($($t:ty => $kind:ident),*) => {
        $(
            impl From<$t> for Integer {
                fn from(value: $t) -> Self {
                    Self {
                        kind: IntegerKind::$kind,
                        value: i128::from(value),
                    }
                }
            }
        )*
    };
}

integer_from_primitive!(i8 => I8, u8 => U8, i16 => I16, u16 => U16, i32 => I32, u32 => U32, i64 => I64, u64 => U64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_in_range() {
        let integer = Integer::new(32, IntegerKind::I32);

        assert_eq!(IntegerKind::I32, integer.kind());
        assert_eq!(32, integer.get());
        assert_eq!(Some(32), integer.to_i64());
        assert_eq!(Some(32), integer.to_u64());
    }

    #[test]
    fn integer_truncated() {
        assert_eq!(44, Integer::new(300, IntegerKind::U8).get());
        assert_eq!(-1, Integer::new(255, IntegerKind::I8).get());
        assert_eq!(255, Integer::new(-1, IntegerKind::U8).get());
        assert_eq!(-32768, Integer::new(32768, IntegerKind::I16).get());
        assert_eq!(i128::from(u32::MAX), Integer::new(-1, IntegerKind::U32).get());
        assert_eq!(i128::from(u64::MAX), Integer::new(-1, IntegerKind::U64).get());
        assert_eq!(None, Integer::new(-1, IntegerKind::U64).to_i64());
    }

    #[test]
    fn integer_from_primitive() {
        assert_eq!(Integer::new(-5, IntegerKind::I8), Integer::from(-5i8));
        assert_eq!(Integer::new(i128::from(u64::MAX), IntegerKind::U64), Integer::from(u64::MAX));
        assert_eq!("-5", Integer::from(-5i64).to_string());
    }

    #[test]
    fn integer_kind() {
        assert!(IntegerKind::I16.is_signed());
        assert!(!IntegerKind::U16.is_signed());
        assert_eq!(64, IntegerKind::U64.bits());
        assert_eq!(8, IntegerKind::I8.bits());
    }
} // mod tests
