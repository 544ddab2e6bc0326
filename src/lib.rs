//! A doubly-linked list of heterogeneous, optionally keyed, values.
//!
//! The list doubles as a stack, pushing and popping at the tail, and as a queue, dequeuing from the head. Each node
//! holds a `Value` of one of a closed set of kinds, and optionally a `Key` through which it can be looked up later on.
//!
//! Nodes are allocated from a `Store`, and referred to by generational `NodeHandle`: a handle to a removed node never
//! resolves again, even once its slot is reused.
//!
//! ```
//! use linklist::{collection::LinkList, value::{Integer, Text}};
//!
//! let mut list = LinkList::new();
//!
//! list.push_keyed("name", "Brielle");
//! list.push_keyed("age", 32i64);
//!
//! let age = list.pop_keyed::<Integer>("AGE").unwrap();
//! assert_eq!(32, age.value.get());
//!
//! let name = list.dequeue::<Text>().unwrap();
//! assert_eq!(name, "Brielle");
//!
//! assert!(list.is_empty());
//! ```

//  Lints
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod collection;
pub mod config;
pub mod error;
pub mod interface;
pub mod store;
pub mod value;
