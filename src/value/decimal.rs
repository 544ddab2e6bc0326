//! Floating point numbers of any precision.

use core::fmt;

/// The precision a decimal was requested with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecimalKind {
    /// Single precision.
    Float,
    /// Double precision.
    Double,
    /// Extended precision.
    ///
    /// Stored with double precision, the widest available.
    Extended,
}

/// A floating point number, alongside the precision it was requested with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decimal {
    kind: DecimalKind,
    //  Invariant: `value` is representable by `kind`.
    value: f64,
}

impl Decimal {
    /// Creates a decimal of the given `kind`, rounding `value` as necessary.
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(value: f64, kind: DecimalKind) -> Self {
        let value = match kind {
            DecimalKind::Float => f64::from(value as f32),
            DecimalKind::Double | DecimalKind::Extended => value,
        };

        Self { kind, value }
    }

    /// Returns the kind of the decimal.
    pub const fn kind(&self) -> DecimalKind {
        self.kind
    }

    /// Returns the value of the decimal.
    pub const fn get(&self) -> f64 {
        self.value
    }

    /// Returns the value, rounded to single precision.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_f32(&self) -> f32 {
        self.value as f32
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.value)
    }
}

impl From<f32> for Decimal {
    fn from(value: f32) -> Self {
        Self {
            kind: DecimalKind::Float,
            value: f64::from(value),
        }
    }
}

impl From<f64> for Decimal {
    fn from(value: f64) -> Self {
        Self {
            kind: DecimalKind::Double,
            value,
        }
    }
}

// mod tests
