//! Per-list configuration.
//!
//! A list hashes the key of every keyed node it creates. The hash is recorded alongside the key, and never consulted
//! by lookups, which remain linear scans.

use core::{fmt, num::NonZeroU32};

/// A key hashing function.
///
/// The result is expected to be strictly less than `limit`.
pub type KeyHashFn = fn(key: &str, limit: NonZeroU32) -> u32;

/// The default limit of key hashes.
pub const DEFAULT_HASH_LIMIT: NonZeroU32 = match NonZeroU32::new(100) {
    Some(limit) => limit,
    None => unreachable!(),
};

/// The default key hashing function: a rotating XOR over the bytes of `key`, reduced modulo `limit`.
pub fn default_key_hash(key: &str, limit: NonZeroU32) -> u32 {
    let mut result: u32 = 0x5555_5555;

    for byte in key.bytes() {
        result ^= u32::from(byte);
        result = result.rotate_left(5);
    }

    result % limit
}

/// Configuration of a list, fixed at construction.
#[derive(Clone, Copy)]
pub struct Config {
    hash_fn: Option<KeyHashFn>,
    hash_limit: NonZeroU32,
}

impl Config {
    /// Creates the default configuration.
    pub const fn new() -> Self {
        Self {
            hash_fn: None,
            hash_limit: DEFAULT_HASH_LIMIT,
        }
    }

    /// Sets the key hashing function.
    ///
    /// `None` selects `default_key_hash`.
    pub const fn with_hash_fn(mut self, hash_fn: Option<KeyHashFn>) -> Self {
        self.hash_fn = hash_fn;
        self
    }

    /// Sets the limit passed to the key hashing function.
    pub const fn with_hash_limit(mut self, hash_limit: NonZeroU32) -> Self {
        self.hash_limit = hash_limit;
        self
    }

    /// Returns the key hashing function in use.
    pub fn hash_fn(&self) -> KeyHashFn {
        self.hash_fn.unwrap_or(default_key_hash)
    }

    /// Returns the limit passed to the key hashing function.
    pub const fn hash_limit(&self) -> NonZeroU32 {
        self.hash_limit
    }

    /// Hashes `key` according to this configuration.
    pub fn hash(&self, key: &str) -> u32 {
        (self.hash_fn())(key, self.hash_limit)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("Config")
            .field("custom_hash_fn", &self.hash_fn.is_some())
            .field("hash_limit", &self.hash_limit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant_hash(_key: &str, limit: NonZeroU32) -> u32 {
        limit.get() - 1
    }

    #[test]
    fn default_hash_is_bounded() {
        for key in ["", "a", "name", "age", "a rather longer key, with punctuation!"] {
            assert!(default_key_hash(key, DEFAULT_HASH_LIMIT) < DEFAULT_HASH_LIMIT.get());
        }
    }

    #[test]
    fn default_hash_values() {
        let unbounded = NonZeroU32::MAX;

        assert_eq!(0x5555_5555 % u32::MAX, default_key_hash("", unbounded));
        assert_eq!((0x5555_5555u32 ^ 0x61).rotate_left(5), default_key_hash("a", unbounded));
        assert_ne!(default_key_hash("name", unbounded), default_key_hash("Name", unbounded));
    }

    #[test]
    fn config_default() {
        let config = Config::default();

        assert_eq!(DEFAULT_HASH_LIMIT, config.hash_limit());
        assert_eq!(default_key_hash("name", DEFAULT_HASH_LIMIT), config.hash("name"));
    }

    #[test]
    fn config_custom() {
        let limit = NonZeroU32::new(7).unwrap();
        let config = Config::new().with_hash_fn(Some(constant_hash)).with_hash_limit(limit);

        assert_eq!(6, config.hash("name"));
        assert_eq!(6, config.hash(""));

        let config = config.with_hash_fn(None);

        assert_eq!(default_key_hash("name", limit), config.hash("name"));
    }
} // mod tests
