//! Hashing aliases used throughout the crate.

/// A hash set using ahash for speed.
pub type FxHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;

/// An insertion-ordered map using ahash for speed.
pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, ahash::RandomState>;
