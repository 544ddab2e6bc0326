//! A doubly-linked list of heterogeneous values.
//!
//! The nodes of the list live in a `Store`, and refer to their neighbours by handle. Pushing appends at the tail,
//! popping removes from the tail (LIFO), and dequeuing removes from the head (FIFO).

use core::{fmt, mem};

use tracing::{debug, trace};

use crate::{
    collection::Node,
    config::Config,
    error::Full,
    interface::{GrowableStore, NodeHandle, Store},
    store::ArenaStore,
    value::{Key, Opaque, Value},
};

/// A node, as linked within a list.
pub struct Link {
    pub(super) node: Node,
    //  `None` in the first node of the list.
    pub(super) prev: Option<NodeHandle>,
    //  `None` in the last node of the list.
    pub(super) next: Option<NodeHandle>,
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("Link")
            .field("node", &self.node)
            .field("prev", &self.prev)
            .field("next", &self.next)
            .finish()
    }
}

/// A doubly-linked list of heterogeneous, optionally keyed, values.
pub struct LinkList<S: Store<Link> = ArenaStore<Link>> {
    //  Invariants:
    //  -   `length` is the number of nodes in the list.
    //  -   `head` and `tail` are `None` if, and only if, `length` is 0.
    //  -   Every node allocated by `store` is linked in the list.
    length: usize,
    head: Option<NodeHandle>,
    tail: Option<NodeHandle>,
    store: S,
    config: Config,
}

impl LinkList {
    /// Creates a new, empty, list.
    pub fn new() -> Self {
        Self::new_in(ArenaStore::new())
    }

    /// Creates a new, empty, list with the specified `config`.
    pub fn with_config(config: Config) -> Self {
        Self::with_config_in(ArenaStore::new(), config)
    }
}

impl<S: Store<Link>> LinkList<S> {
    /// Creates a new, empty, list with the specified `store`.
    pub fn new_in(store: S) -> Self {
        Self::with_config_in(store, Config::default())
    }

    /// Creates a new, empty, list with the specified `store` and `config`.
    ///
    /// The `store` is expected to be empty.
    pub fn with_config_in(store: S, config: Config) -> Self {
        debug_assert!(store.is_empty(), "store must be empty");

        Self {
            length: 0,
            head: None,
            tail: None,
            store,
            config,
        }
    }

    /// Returns whether the list is empty, or not.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns the maximum number of nodes, if the store is bounded.
    pub fn capacity(&self) -> Option<usize> {
        self.store.capacity()
    }

    /// Returns the configuration of the list.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the handle of the first node, if any.
    pub fn head(&self) -> Option<NodeHandle> {
        self.head
    }

    /// Returns the handle of the last node, if any.
    pub fn tail(&self) -> Option<NodeHandle> {
        self.tail
    }

    /// Returns the handle of the node following `handle`, if any.
    pub fn next(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.link(handle)?.next
    }

    /// Returns the handle of the node preceding `handle`, if any.
    pub fn prev(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.link(handle)?.prev
    }

    /// Returns whether `handle` refers to a node of the list.
    ///
    /// Handles of other lists never refer to a node of this list.
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.link(handle).is_some()
    }

    /// Returns a reference to the node of `handle`, if it is still in the list.
    pub fn get(&self, handle: NodeHandle) -> Option<&Node> {
        self.link(handle).map(|link| &link.node)
    }

    /// Returns a mutable reference to the node of `handle`, if it is still in the list.
    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.store.resolve_mut(handle).map(|link| &mut link.node)
    }

    /// Returns a reference to the first node, if any.
    pub fn front(&self) -> Option<&Node> {
        self.get(self.head?)
    }

    /// Returns a reference to the last node, if any.
    pub fn back(&self) -> Option<&Node> {
        self.get(self.tail?)
    }

    /// Returns a mutable reference to the first node, if any.
    pub fn front_mut(&mut self) -> Option<&mut Node> {
        self.get_mut(self.head?)
    }

    /// Returns a mutable reference to the last node, if any.
    pub fn back_mut(&mut self) -> Option<&mut Node> {
        self.get_mut(self.tail?)
    }

    /// Returns an iterator over the nodes, from head to tail.
    pub fn iter(&self) -> Iter<'_, S> {
        Iter {
            length: self.length,
            head: self.head,
            tail: self.tail,
            store: &self.store,
        }
    }

    /// Pushes `node` at the tail of the list, unless the store is exhausted.
    ///
    /// Returns the handle of the node, which remains valid until the node is popped, dequeued, or removed.
    ///
    /// #   Errors
    ///
    /// Returns `node`, wrapped in `Full`, if the store is exhausted.
    pub fn try_push(&mut self, node: Node) -> Result<NodeHandle, Full> {
        let link = Link {
            node,
            prev: self.tail,
            next: None,
        };

        let handle = match self.store.allocate(link) {
            Ok(handle) => handle,
            Err((link, _)) => {
                debug!(length = self.length, "store exhausted, node rejected");

                return Err(Full(link.node));
            }
        };

        self.set_next(self.tail, Some(handle));
        self.tail = Some(handle);
        self.length += 1;

        trace!(?handle, length = self.length, "pushed node");

        Ok(handle)
    }

    /// Pushes an unkeyed `value` at the tail of the list, unless the store is exhausted.
    ///
    /// #   Errors
    ///
    /// Returns the node, wrapped in `Full`, if the store is exhausted.
    pub fn try_push_value<V>(&mut self, value: V) -> Result<NodeHandle, Full>
    where
        V: Into<Value>,
    {
        self.try_push(Node::new(value))
    }

    /// Pushes `value` keyed by `key` at the tail of the list, unless the store is exhausted.
    ///
    /// The key is copied, and hashed according to the configuration of the list.
    ///
    /// #   Errors
    ///
    /// Returns the node, wrapped in `Full`, if the store is exhausted.
    pub fn try_push_keyed<V>(&mut self, key: &str, value: V) -> Result<NodeHandle, Full>
    where
        V: Into<Value>,
    {
        let key = Key::new(key, &self.config);

        self.try_push(Node::keyed(key, value))
    }

    /// Pops the node at the tail of the list, if any.
    pub fn pop_node(&mut self) -> Option<Node> {
        let node = self.unlink(self.tail?);

        trace!(length = self.length, "popped node");

        node
    }

    /// Dequeues the node at the head of the list, if any.
    pub fn dequeue_node(&mut self) -> Option<Node> {
        let node = self.unlink(self.head?);

        trace!(length = self.length, "dequeued node");

        node
    }

    /// Removes the node of `handle` from the list, wherever it is.
    ///
    /// Returns `None`, leaving the list untouched, if `handle` no longer refers to a node of the list, or was handed
    /// out by another list.
    pub fn remove(&mut self, handle: NodeHandle) -> Option<Node> {
        let node = self.unlink(handle);

        trace!(?handle, removed = node.is_some(), length = self.length, "removed node");

        node
    }

    /// Removes all the nodes matching `predicate`, returning them in list order.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> Vec<Node>
    where
        F: FnMut(&Node) -> bool,
    {
        let mut removed = Vec::new();
        let mut cursor = self.head;

        while let Some(handle) = cursor {
            let Some(link) = self.link(handle) else {
                break;
            };

            //  The successor must be read before `handle` is unlinked.
            cursor = link.next;

            if predicate(&link.node) {
                removed.extend(self.unlink(handle));
            }
        }

        trace!(removed = removed.len(), length = self.length, "removed matching nodes");

        removed
    }

    /// Removes all the user and void nodes pointing to `data`, returning them in list order.
    ///
    /// Pointers are compared by address, their pointees are never accessed.
    pub fn remove_by_data(&mut self, data: Opaque) -> Vec<Node> {
        self.remove_where(|node| node.value().as_opaque() == Some(data))
    }

    /// Clears the list, dropping every node.
    ///
    /// The resulting list is empty.
    pub fn clear(&mut self) {
        let length = mem::replace(&mut self.length, 0);

        self.tail = None;

        let mut cursor = self.head.take();

        for _ in 0..length {
            let Some(handle) = cursor else {
                break;
            };

            //  The successor must be read before the node of `handle` is dropped.
            cursor = self.store.deallocate(handle).and_then(|link| link.next);
        }

        debug_assert!(self.store.is_empty(), "nodes remaining after clear");

        trace!(length, "cleared list");
    }
}

impl<S: GrowableStore<Link>> LinkList<S> {
    /// Pushes `node` at the tail of the list.
    ///
    /// Returns the handle of the node, which remains valid until the node is popped, dequeued, or removed.
    pub fn push(&mut self, node: Node) -> NodeHandle {
        let link = Link {
            node,
            prev: self.tail,
            next: None,
        };

        let handle = self.store.insert(link);

        self.set_next(self.tail, Some(handle));
        self.tail = Some(handle);
        self.length += 1;

        trace!(?handle, length = self.length, "pushed node");

        handle
    }

    /// Pushes an unkeyed `value` at the tail of the list.
    pub fn push_value<V>(&mut self, value: V) -> NodeHandle
    where
        V: Into<Value>,
    {
        self.push(Node::new(value))
    }

    /// Pushes `value` keyed by `key` at the tail of the list.
    ///
    /// The key is copied, and hashed according to the configuration of the list.
    pub fn push_keyed<V>(&mut self, key: &str, value: V) -> NodeHandle
    where
        V: Into<Value>,
    {
        let key = Key::new(key, &self.config);

        self.push(Node::keyed(key, value))
    }
}

impl<S: GrowableStore<Link> + Default> Clone for LinkList<S> {
    fn clone(&self) -> Self {
        let mut result = Self::with_config_in(S::default(), self.config);

        for node in self {
            result.push(node.clone());
        }

        result
    }
}

impl<S: Store<Link>> fmt::Debug for LinkList<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_list().entries(self).finish()
    }
}

impl<S: Store<Link> + Default> Default for LinkList<S> {
    fn default() -> Self {
        Self::new_in(S::default())
    }
}

impl<S: Store<Link>> Drop for LinkList<S> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<S, OS> PartialEq<LinkList<OS>> for LinkList<S>
where
    S: Store<Link>,
    OS: Store<Link>,
{
    fn eq(&self, other: &LinkList<OS>) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

//
//  Iteration
//

impl<S: GrowableStore<Link>> Extend<Node> for LinkList<S> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Node>,
    {
        for node in iter {
            self.push(node);
        }
    }
}

impl<S: GrowableStore<Link> + Default> FromIterator<Node> for LinkList<S> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut result = Self::default();

        result.extend(iter);

        result
    }
}

impl<S: Store<Link>> IntoIterator for LinkList<S> {
    type Item = Node;
    type IntoIter = IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, S: Store<Link>> IntoIterator for &'a LinkList<S> {
    type Item = &'a Node;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the nodes of a list, dequeuing them.
pub struct IntoIter<S: Store<Link>>(LinkList<S>);

impl<S: Store<Link>> Iterator for IntoIter<S> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.dequeue_node()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<S: Store<Link>> DoubleEndedIterator for IntoIter<S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.pop_node()
    }
}

impl<S: Store<Link>> ExactSizeIterator for IntoIter<S> {}

/// Iterator over references to the nodes of a list.
pub struct Iter<'a, S: Store<Link>> {
    //  Only `length` nodes remain to be visited, between `head` and `tail` inclusive.
    length: usize,
    head: Option<NodeHandle>,
    tail: Option<NodeHandle>,
    store: &'a S,
}

impl<'a, S: Store<Link>> Iterator for Iter<'a, S> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        if self.length == 0 {
            return None;
        }

        let head = self.store.resolve(self.head?)?;

        self.head = head.next;
        self.length -= 1;

        Some(&head.node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.length, Some(self.length))
    }
}

impl<'a, S: Store<Link>> DoubleEndedIterator for Iter<'a, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.length == 0 {
            return None;
        }

        let tail = self.store.resolve(self.tail?)?;

        self.tail = tail.prev;
        self.length -= 1;

        Some(&tail.node)
    }
}

impl<'a, S: Store<Link>> ExactSizeIterator for Iter<'a, S> {}

//
//  Implementation
//

impl<S: Store<Link>> LinkList<S> {
    pub(super) fn link(&self, handle: NodeHandle) -> Option<&Link> {
        self.store.resolve(handle)
    }

    //  Unlinks the node of `handle`, re-pointing its neighbours, or `head` and `tail`, around it.
    pub(super) fn unlink(&mut self, handle: NodeHandle) -> Option<Node> {
        let Link { node, prev, next } = self.store.deallocate(handle)?;

        self.set_next(prev, next);
        self.set_prev(next, prev);
        self.length -= 1;

        Some(node)
    }

    //  Sets the successor of `at`, or `head` if `at` is `None`.
    fn set_next(&mut self, at: Option<NodeHandle>, next: Option<NodeHandle>) {
        let Some(at) = at else {
            self.head = next;
            return;
        };

        match self.store.resolve_mut(at) {
            Some(link) => link.next = next,
            None => debug_assert!(false, "dangling link to {at:?}"),
        }
    }

    //  Sets the predecessor of `at`, or `tail` if `at` is `None`.
    fn set_prev(&mut self, at: Option<NodeHandle>, prev: Option<NodeHandle>) {
        let Some(at) = at else {
            self.tail = prev;
            return;
        };

        match self.store.resolve_mut(at) {
            Some(link) => link.prev = prev,
            None => debug_assert!(false, "dangling link to {at:?}"),
        }
    }
}

#[cfg(test)]
mod arena_tests {
    use super::*;

    use crate::{
        collection::utils::{check_links, integers},
        value::{User, Void},
    };

    #[test]
    fn list_empty() {
        let mut list = LinkList::new();

        assert!(list.is_empty());
        assert_eq!(0, list.len());
        assert_eq!(None, list.capacity());
        assert_eq!(None, list.head());
        assert_eq!(None, list.tail());
        assert_eq!(None, list.front());
        assert_eq!(None, list.pop_node());
        assert_eq!(None, list.dequeue_node());

        check_links(&list);
    }

    #[test]
    fn list_single() {
        let mut list = LinkList::new();

        let handle = list.push_value(1u8);

        assert_eq!(1, list.len());
        assert_eq!(Some(handle), list.head());
        assert_eq!(Some(handle), list.tail());
        assert_eq!(None, list.prev(handle));
        assert_eq!(None, list.next(handle));

        check_links(&list);

        assert_eq!(Some(Node::new(1u8)), list.pop_node());
        assert!(list.is_empty());
        assert!(!list.contains(handle));

        check_links(&list);
    }

    #[test]
    fn list_pop_is_lifo() {
        let mut list = LinkList::new();

        for i in 0..5i64 {
            list.push_value(i);
        }

        check_links(&list);

        let popped: Vec<_> = (0..5).map(|_| list.pop_node().unwrap()).collect();

        assert_eq!(vec![4, 3, 2, 1, 0], integers(&popped));
        assert!(list.is_empty());
        assert_eq!(None, list.pop_node());
    }

    #[test]
    fn list_dequeue_is_fifo() {
        let mut list = LinkList::new();

        for i in 0..5i64 {
            list.push_value(i);
        }

        let dequeued: Vec<_> = (0..5).map(|_| list.dequeue_node().unwrap()).collect();

        assert_eq!(vec![0, 1, 2, 3, 4], integers(&dequeued));
        assert!(list.is_empty());
        assert_eq!(None, list.dequeue_node());
    }

    #[test]
    fn list_pop_dequeue_interleaved() {
        let mut list = LinkList::new();

        for i in 0..4i64 {
            list.push_value(i);
        }

        assert_eq!(Some(Node::new(3i64)), list.pop_node());
        check_links(&list);

        assert_eq!(Some(Node::new(0i64)), list.dequeue_node());
        check_links(&list);

        assert_eq!(Some(Node::new(2i64)), list.pop_node());
        check_links(&list);

        assert_eq!(list.head(), list.tail());

        assert_eq!(Some(Node::new(1i64)), list.dequeue_node());
        check_links(&list);

        assert!(list.is_empty());
    }

    #[test]
    fn list_remove_head_interior_tail() {
        let mut list = LinkList::new();

        let handles: Vec<_> = (0..5i64).map(|i| list.push_value(i)).collect();

        assert_eq!(Some(Node::new(2i64)), list.remove(handles[2]));
        check_links(&list);
        assert_eq!(Some(handles[3]), list.next(handles[1]));
        assert_eq!(Some(handles[1]), list.prev(handles[3]));

        assert_eq!(Some(Node::new(0i64)), list.remove(handles[0]));
        check_links(&list);
        assert_eq!(Some(handles[1]), list.head());

        assert_eq!(Some(Node::new(4i64)), list.remove(handles[4]));
        check_links(&list);
        assert_eq!(Some(handles[3]), list.tail());

        assert_eq!(vec![1, 3], integers(list.iter()));
    }

    #[test]
    fn list_remove_stale_handle() {
        let mut list = LinkList::new();

        let stale = list.push_value(0i64);

        assert_eq!(Some(Node::new(0i64)), list.remove(stale));

        //  Reuses the slot of `stale`.
        let fresh = list.push_value(1i64);

        assert_eq!(None, list.remove(stale));
        assert_eq!(None, list.get(stale));
        assert_eq!(Some(&Node::new(1i64)), list.get(fresh));
        assert_eq!(1, list.len());

        check_links(&list);
    }

    #[test]
    fn list_remove_foreign_handle() {
        let mut list = LinkList::new();
        let mut other = LinkList::new();

        let foreign = other.push_value(1i64);
        let own = list.push_value(2i64);

        assert_eq!(foreign.index(), own.index());
        assert_ne!(foreign, own);

        assert!(!list.contains(foreign));
        assert_eq!(None, list.get(foreign));
        assert_eq!(None, list.get_mut(foreign));
        assert_eq!(None, list.next(foreign));
        assert_eq!(None, list.remove(foreign));

        assert_eq!(1, list.len());
        assert_eq!(Some(&Node::new(2i64)), list.front());
        assert_eq!(Some(Node::new(1i64)), other.remove(foreign));

        check_links(&list);
        check_links(&other);
    }

    #[test]
    fn list_remove_by_data_removes_all() {
        let first = String::from("first");
        let second = String::from("second");

        let first = Opaque::from_ref(&first);
        let second = Opaque::from_ref(&second);

        let mut list = LinkList::new();

        list.push_value(User(first));
        list.push_value(0i64);
        list.push_value(Void(first));
        list.push_value(User(second));
        list.push_value(User(first));

        let removed = list.remove_by_data(first);

        assert_eq!(
            vec![Node::new(User(first)), Node::new(Void(first)), Node::new(User(first))],
            removed
        );
        assert_eq!(2, list.len());
        assert_eq!(Some(&Node::new(0i64)), list.front());
        assert_eq!(Some(&Node::new(User(second))), list.back());

        check_links(&list);

        assert!(list.remove_by_data(first).is_empty());
    }

    #[test]
    fn list_remove_where() {
        let mut list: LinkList = (0..10i64).map(Node::new).collect();

        let removed = list.remove_where(|node| node.value().as_integer().is_some_and(|i| i.get() % 3 == 0));

        assert_eq!(vec![0, 3, 6, 9], integers(&removed));
        assert_eq!(vec![1, 2, 4, 5, 7, 8], integers(list.iter()));

        check_links(&list);

        let removed = list.remove_where(|_| true);

        assert_eq!(6, removed.len());
        assert!(list.is_empty());

        check_links(&list);
    }

    #[test]
    fn list_front_back_mut() {
        let mut list = LinkList::new();

        list.push_value(false);
        list.push_value(false);

        if let Some(node) = list.front_mut() {
            *node.value_mut() = Value::Boolean(true);
        }

        assert_eq!(Some(true), list.front().and_then(|node| node.value().as_boolean()));
        assert_eq!(Some(false), list.back().and_then(|node| node.value().as_boolean()));

        if let Some(node) = list.back_mut() {
            *node.value_mut() = Value::from("tail");
        }

        assert_eq!(Some(&Node::new("tail")), list.back());
    }

    #[test]
    fn list_clear() {
        let mut list = LinkList::new();

        let handle = list.push_keyed("name", "Brielle");
        list.push_value(32i64);

        list.clear();

        assert!(list.is_empty());
        assert!(!list.contains(handle));

        check_links(&list);

        list.push_value(1i64);

        assert_eq!(1, list.len());

        check_links(&list);
    }

    #[test]
    fn list_clone() {
        let mut list = LinkList::new();

        list.push_keyed("name", "Brielle");
        list.push_value(32i64);

        let mut clone = list.clone();

        assert_eq!(list, clone);

        assert_eq!(Some(Node::new(32i64)), clone.pop_node());
        assert_ne!(list, clone);
        assert_eq!(2, list.len());
    }

    #[test]
    fn list_debug() {
        let mut list = LinkList::new();

        list.push_value(true);

        assert_eq!("[Node { value: Boolean(true), key: None }]", format!("{list:?}"));
    }

    #[test]
    fn list_iter() {
        let list: LinkList = (0..3i64).map(Node::new).collect();

        assert_eq!(3, list.iter().len());
        assert_eq!(vec![0, 1, 2], integers(list.iter()));
        assert_eq!(vec![2, 1, 0], integers(list.iter().rev()));

        let mut iter = list.iter();

        assert_eq!(Some(&Node::new(0i64)), iter.next());
        assert_eq!(Some(&Node::new(2i64)), iter.next_back());
        assert_eq!(Some(&Node::new(1i64)), iter.next());
        assert_eq!(None, iter.next_back());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn list_into_iter() {
        let list: LinkList = (0..3i64).map(Node::new).collect();

        let nodes: Vec<_> = list.into_iter().collect();

        assert_eq!(vec![0, 1, 2], integers(&nodes));

        let list: LinkList = (0..3i64).map(Node::new).collect();

        let nodes: Vec<_> = list.into_iter().rev().collect();

        assert_eq!(vec![2, 1, 0], integers(&nodes));
    }

    #[test]
    fn list_extend() {
        let mut list: LinkList = (0..3i64).map(Node::new).collect();

        list.extend((3..6i64).map(Node::new));

        assert_eq!(vec![0, 1, 2, 3, 4, 5], integers(list.iter()));

        check_links(&list);
    }

    #[test]
    fn list_keyed_hash_follows_config() {
        fn constant(_key: &str, _limit: core::num::NonZeroU32) -> u32 {
            42
        }

        let mut list = LinkList::with_config(Config::new().with_hash_fn(Some(constant)));

        let handle = list.push_keyed("name", "Brielle");

        assert_eq!(Some(42), list.get(handle).and_then(Node::key).map(Key::hash));
    }
} // mod arena_tests

// mod inline_tests

// mod random_tests
