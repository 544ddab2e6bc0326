//! The unit of storage of a list: a value, and its optional key.

use crate::{
    error::{Error, Result},
    value::{FromValue, Key, Kind, Value},
};

/// A value, optionally keyed.
///
/// A node is owned by the list it is pushed in, until it is popped, dequeued, or removed, at which point ownership
/// returns to the caller. Dropping a node releases its key and string copies, never the pointee of an opaque value.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    value: Value,
    key: Option<Key>,
}

impl Node {
    /// Creates an unkeyed node.
    pub fn new<V>(value: V) -> Self
    where
        V: Into<Value>,
    {
        let value = value.into();

        Self { value, key: None }
    }

    /// Creates a keyed node.
    pub fn keyed<V>(key: Key, value: V) -> Self
    where
        V: Into<Value>,
    {
        let value = value.into();

        Self { value, key: Some(key) }
    }

    /// Returns the kind of the value.
    pub const fn kind(&self) -> Kind {
        self.value.kind()
    }

    /// Returns whether the node is keyed.
    pub const fn is_keyed(&self) -> bool {
        self.key.is_some()
    }

    /// Returns the key, if any.
    pub const fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    /// Returns the value.
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the value, mutably.
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    /// Returns the value, dropping the key if any.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Decomposes the node into its key, if any, and value.
    pub fn into_parts(self) -> (Option<Key>, Value) {
        (self.key, self.value)
    }

    /// Returns the value as a `T`.
    ///
    /// #   Errors
    ///
    /// Returns `Error::KindMismatch` if the value is not of kind `T::KIND`.
    pub fn into_value_as<T: FromValue>(self) -> Result<T> {
        T::from_value(self.value).map_err(|value| Error::KindMismatch {
            expected: T::KIND,
            found: value.kind(),
        })
    }

    /// Returns the number of heap bytes owned by the node, excluding the node itself.
    ///
    /// This covers the copies of the key and of string values, and is released when the node is dropped.
    pub fn payload_size(&self) -> usize {
        let key = self.key.as_ref().map_or(0, |key| key.name().len());

        key + self.value.heap_size()
    }

    //  Checks that the value is of kind `T::KIND`.
    pub(crate) fn check<T: FromValue>(&self) -> Result<()> {
        let found = self.kind();

        if found == T::KIND {
            Ok(())
        } else {
            Err(Error::KindMismatch {
                expected: T::KIND,
                found,
            })
        }
    }
}

// mod tests
