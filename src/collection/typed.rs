//! Typed removal, extracting the payload of a specific kind out of the node at either end of a list.

use tracing::debug;

use crate::{
    collection::{Link, LinkList, Node},
    error::{Error, Result},
    interface::{NodeHandle, Store},
    value::FromValue,
};

impl<S: Store<Link>> LinkList<S> {
    /// Pops the node at the tail of the list, and returns its value as a `T`.
    ///
    /// #   Errors
    ///
    /// -   Returns `Error::Empty` if the list is empty.
    /// -   Returns `Error::KindMismatch` if the value at the tail is not of kind `T::KIND`, leaving the list untouched.
    ///
    /// #   Example
    ///
    /// ```
    /// use linklist::{collection::LinkList, value::Integer};
    ///
    /// let mut list = LinkList::new();
    /// list.push_value(true);
    /// list.push_value(32i64);
    ///
    /// assert_eq!(Ok(Integer::from(32i64)), list.pop::<Integer>());
    /// assert_eq!(Ok(true), list.pop::<bool>());
    /// ```
    pub fn pop<T: FromValue>(&mut self) -> Result<T> {
        let handle = self.tail().ok_or(Error::Empty)?;

        self.take_checked::<T>(handle)?.into_value_as()
    }

    /// Dequeues the node at the head of the list, and returns its value as a `T`.
    ///
    /// #   Errors
    ///
    /// -   Returns `Error::Empty` if the list is empty.
    /// -   Returns `Error::KindMismatch` if the value at the head is not of kind `T::KIND`, leaving the list untouched.
    pub fn dequeue<T: FromValue>(&mut self) -> Result<T> {
        let handle = self.head().ok_or(Error::Empty)?;

        self.take_checked::<T>(handle)?.into_value_as()
    }

    //  Unlinks the node of `handle`, if and only if its value is of kind `T::KIND`.
    //
    //  `handle` is expected to refer to a node of the list, `Error::Empty` is reported otherwise.
    pub(super) fn take_checked<T: FromValue>(&mut self, handle: NodeHandle) -> Result<Node> {
        let node = self.get(handle).ok_or(Error::Empty)?;

        if let Err(error) = node.check::<T>() {
            debug!(?handle, %error, "typed removal rejected");

            return Err(error);
        }

        self.unlink(handle).ok_or(Error::Empty)
    }
}

// mod tests
