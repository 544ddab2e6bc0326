//! Keys of keyed nodes.

use crate::config::Config;

/// The key of a keyed node.
///
/// The key owns a copy of its name, and records the hash of the name computed when the key was created. The hash is
/// informational only: lookups compare names, ignoring ASCII case.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Key {
    name: Box<str>,
    hash: u32,
}

impl Key {
    /// Creates a key named `name`, hashed according to `config`.
    pub fn new(name: &str, config: &Config) -> Self {
        let hash = config.hash(name);

        Self::with_hash(name, hash)
    }

    /// Creates a key named `name`, with a precomputed `hash`.
    pub fn with_hash(name: &str, hash: u32) -> Self {
        let name = name.into();

        Self { name, hash }
    }

    /// Returns the name of the key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hash recorded at creation.
    pub const fn hash(&self) -> u32 {
        self.hash
    }

    /// Returns whether the key is named `name`, ignoring ASCII case.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

// mod tests
