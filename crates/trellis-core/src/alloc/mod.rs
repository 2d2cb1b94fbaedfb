//! Collection types for Trellis.
//!
//! Re-exports AHash-backed hash collections. Registry caches are keyed by
//! `TypeId`, for which the default SipHash is needlessly slow.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

/// Type alias for the standard HashMap with AHash for better performance.
pub type AHashMap<K, V> = ahash::AHashMap<K, V>;

/// Type alias for the standard HashSet with AHash for better performance.
pub type AHashSet<T> = ahash::AHashSet<T>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    #[test]
    fn test_hashmap_type_id_keys() {
        let mut map = HashMap::new();
        map.insert(TypeId::of::<u32>(), "u32");
        map.insert(TypeId::of::<String>(), "string");
        assert_eq!(map.get(&TypeId::of::<u32>()), Some(&"u32"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_hashset_ahash() {
        let mut set = HashSet::new();
        set.insert("linear");
        assert!(set.contains("linear"));
        assert!(!set.insert("linear"));
    }
}
