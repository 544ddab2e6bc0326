//! Provides implementations of multiple stores.

mod arena_store;
mod inline_store;
mod slot;

pub use arena_store::ArenaStore;
pub use inline_store::InlineStore;
