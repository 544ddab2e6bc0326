//! The list, and the nodes it holds.
//!
//! A `LinkList` is implemented in terms of `Store`: it may be used with a growable `ArenaStore`, the default, or with
//! a fixed-capacity `InlineStore` when allocation must be bounded.

mod keyed;
mod link_list;
mod node;
mod typed;

#[cfg(test)]
mod utils;

pub use keyed::Keyed;
pub use link_list::{IntoIter, Iter, Link, LinkList};
pub use node::Node;
