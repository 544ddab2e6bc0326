//! Helpers shared by the tests of the collections.

use crate::{
    collection::{Link, LinkList, Node},
    interface::{NodeHandle, Store},
};

//  Walks `list` forward then backward, checking that both walks agree with each other and with its length.
//
//  Returns the handles of the nodes, in list order.
#[track_caller]
pub(crate) fn check_links<S: Store<Link>>(list: &LinkList<S>) -> Vec<NodeHandle> {
    assert_eq!(list.is_empty(), list.head().is_none(), "head of {} nodes", list.len());
    assert_eq!(list.is_empty(), list.tail().is_none(), "tail of {} nodes", list.len());

    let mut forward = Vec::with_capacity(list.len());
    let mut cursor = list.head();

    while let Some(handle) = cursor {
        assert!(forward.len() < list.len(), "cycle, or more nodes than {}", list.len());

        assert!(list.contains(handle), "dangling {handle:?}");

        let expected = forward.last().copied();
        assert_eq!(expected, list.prev(handle), "prev of {handle:?}");

        forward.push(handle);
        cursor = list.next(handle);
    }

    assert_eq!(list.len(), forward.len());
    assert_eq!(forward.last().copied(), list.tail());

    let mut backward = Vec::with_capacity(list.len());
    let mut cursor = list.tail();

    while let Some(handle) = cursor {
        assert!(backward.len() < list.len(), "cycle, or more nodes than {}", list.len());

        backward.push(handle);
        cursor = list.prev(handle);
    }

    backward.reverse();

    assert_eq!(forward, backward);
    assert_eq!(list.len(), list.iter().count());

    forward
}

//  Extracts the integer values of `nodes`, panicking on any other kind.
#[track_caller]
pub(crate) fn integers<'a, I>(nodes: I) -> Vec<i128>
where
    I: IntoIterator<Item = &'a Node>,
{
    nodes
        .into_iter()
        .map(|node| match node.value().as_integer() {
            Some(integer) => integer.get(),
            None => panic!("expected an integer, found {node:?}"),
        })
        .collect()
}
