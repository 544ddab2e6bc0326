//! Keyed lookup and removal.
//!
//! Lookup is a linear scan over the keyed nodes, comparing names without regard to ASCII case. The hash stored
//! alongside each key is never consulted.

use tracing::debug;

use crate::{
    collection::{Link, LinkList, Node},
    error::{Error, Result},
    interface::{NodeHandle, Store},
    value::{FromValue, Key},
};

/// A value removed from a list, along with the key it was stored under.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyed<T> {
    /// The key, as stored at insertion.
    pub key: Key,
    /// The value.
    pub value: T,
}

impl<S: Store<Link>> LinkList<S> {
    /// Returns the handle of the first node, from the head, keyed by `key`.
    pub fn find_keyed(&self, key: &str) -> Option<NodeHandle> {
        self.scan(key, self.head(), |link| link.next)
    }

    /// Returns the handle of the first node, from the tail, keyed by `key`.
    pub fn rfind_keyed(&self, key: &str) -> Option<NodeHandle> {
        self.scan(key, self.tail(), |link| link.prev)
    }

    /// Returns the first node, from the head, keyed by `key`.
    pub fn get_keyed(&self, key: &str) -> Option<&Node> {
        self.get(self.find_keyed(key)?)
    }

    /// Removes the first node, from the head, keyed by `key`.
    ///
    /// Returns `None`, leaving the list untouched, if no node is keyed by `key`.
    pub fn remove_by_key(&mut self, key: &str) -> Option<Node> {
        let handle = self.find_keyed(key)?;

        self.remove(handle)
    }

    /// Removes the first node, from the tail, keyed by `key`, and returns its value as a `T`.
    ///
    /// #   Errors
    ///
    /// -   Returns `Error::KeyNotFound` if no node is keyed by `key`.
    /// -   Returns `Error::KindMismatch` if the value of the node is not of kind `T::KIND`, leaving the list untouched.
    ///
    /// #   Example
    ///
    /// ```
    /// use linklist::{collection::LinkList, value::Integer};
    ///
    /// let mut list = LinkList::new();
    /// list.push_keyed("age", 31i64);
    /// list.push_keyed("age", 32i64);
    ///
    /// let age = list.pop_keyed::<Integer>("AGE").unwrap();
    ///
    /// assert_eq!("age", age.key.name());
    /// assert_eq!(32, age.value.get());
    /// ```
    pub fn pop_keyed<T: FromValue>(&mut self, key: &str) -> Result<Keyed<T>> {
        let handle = self.rfind_keyed(key);

        self.take_keyed(key, handle)
    }

    /// Removes the first node, from the head, keyed by `key`, and returns its value as a `T`.
    ///
    /// #   Errors
    ///
    /// -   Returns `Error::KeyNotFound` if no node is keyed by `key`.
    /// -   Returns `Error::KindMismatch` if the value of the node is not of kind `T::KIND`, leaving the list untouched.
    pub fn dequeue_keyed<T: FromValue>(&mut self, key: &str) -> Result<Keyed<T>> {
        let handle = self.find_keyed(key);

        self.take_keyed(key, handle)
    }
}

//
//  Implementation
//

impl<S: Store<Link>> LinkList<S> {
    fn scan<F>(&self, key: &str, start: Option<NodeHandle>, mut step: F) -> Option<NodeHandle>
    where
        F: FnMut(&Link) -> Option<NodeHandle>,
    {
        let mut cursor = start;

        while let Some(handle) = cursor {
            let link = self.link(handle)?;

            if link.node.key().is_some_and(|k| k.matches(key)) {
                return Some(handle);
            }

            cursor = step(link);
        }

        None
    }

    fn take_keyed<T: FromValue>(&mut self, name: &str, handle: Option<NodeHandle>) -> Result<Keyed<T>> {
        let not_found = || Error::KeyNotFound { key: name.to_owned() };

        let Some(handle) = handle else {
            debug!(key = name, "keyed removal found no node");

            return Err(not_found());
        };

        let (key, value) = self.take_checked::<T>(handle)?.into_parts();

        //  Only keyed nodes are ever found.
        let key = key.ok_or_else(not_found)?;

        let value = T::from_value(value).map_err(|value| Error::KindMismatch {
            expected: T::KIND,
            found: value.kind(),
        })?;

        Ok(Keyed { key, value })
    }
}

// mod arena_tests

// mod inline_tests
