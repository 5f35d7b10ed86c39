//! Key-value map abstraction
//!
//! The graph keeps its node index behind [`KeyValueMap`] so the backing
//! container can be swapped without touching graph or search code. The
//! shortest-path search reuses the same trait for its visited set.
//!
//! Duplicate keys overwrite: [`KeyValueMap::put`] on a present key replaces
//! the stored value and hands the previous one back to the caller.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Result, RouteError};

/// Associative container with unique keys
pub trait KeyValueMap<K, V> {
    /// Insert `value` under `key`, returning the value it replaced (if any)
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Look up the value stored under `key`
    fn get(&self, key: &K) -> Result<&V>;

    /// Look up the value stored under `key` for mutation
    fn get_mut(&mut self, key: &K) -> Result<&mut V>;

    /// Whether `key` has an entry; never fails
    fn contains_key(&self, key: &K) -> bool;

    /// Remove the entry for `key` and return its value
    fn remove(&mut self, key: &K) -> Result<V>;

    /// Number of entries
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Iterate over all keys (order defined by the backing container)
    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a K> + 'a>
    where
        K: 'a;
}

impl<K, V> KeyValueMap<K, V> for HashMap<K, V>
where
    K: Eq + Hash + Debug,
{
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn get(&self, key: &K) -> Result<&V> {
        HashMap::get(self, key).ok_or_else(|| RouteError::key_not_found(key))
    }

    fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        HashMap::get_mut(self, key).ok_or_else(|| RouteError::key_not_found(key))
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn remove(&mut self, key: &K) -> Result<V> {
        HashMap::remove(self, key).ok_or_else(|| RouteError::key_not_found(key))
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a K> + 'a>
    where
        K: 'a,
    {
        Box::new(HashMap::keys(self))
    }
}

impl<K, V> KeyValueMap<K, V> for BTreeMap<K, V>
where
    K: Ord + Debug,
{
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn get(&self, key: &K) -> Result<&V> {
        BTreeMap::get(self, key).ok_or_else(|| RouteError::key_not_found(key))
    }

    fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        BTreeMap::get_mut(self, key).ok_or_else(|| RouteError::key_not_found(key))
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn remove(&mut self, key: &K) -> Result<V> {
        BTreeMap::remove(self, key).ok_or_else(|| RouteError::key_not_found(key))
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a K> + 'a>
    where
        K: 'a,
    {
        Box::new(BTreeMap::keys(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<M: KeyValueMap<String, u32> + Default>() {
        let mut map = M::default();
        assert!(map.is_empty());

        assert_eq!(map.put("AUS".to_string(), 1), None);
        assert_eq!(map.put("BNA".to_string(), 2), None);
        assert_eq!(map.size(), 2);
        assert!(map.contains_key(&"AUS".to_string()));
        assert!(!map.contains_key(&"LGA".to_string()));
        assert_eq!(*map.get(&"BNA".to_string()).unwrap(), 2);

        // Overwrite keeps one entry and returns the old value
        assert_eq!(map.put("AUS".to_string(), 10), Some(1));
        assert_eq!(map.size(), 2);
        assert_eq!(*map.get(&"AUS".to_string()).unwrap(), 10);

        *map.get_mut(&"BNA".to_string()).unwrap() += 5;
        assert_eq!(*map.get(&"BNA".to_string()).unwrap(), 7);

        assert_eq!(map.remove(&"AUS".to_string()).unwrap(), 10);
        assert_eq!(map.size(), 1);
        assert!(!map.contains_key(&"AUS".to_string()));
    }

    #[test]
    fn test_hash_map_contract() {
        exercise::<HashMap<String, u32>>();
    }

    #[test]
    fn test_btree_map_contract() {
        exercise::<BTreeMap<String, u32>>();
    }

    #[test]
    fn test_get_missing_key() {
        let map: HashMap<String, u32> = HashMap::new();
        let err = KeyValueMap::get(&map, &"JFK".to_string()).unwrap_err();
        assert!(matches!(err, RouteError::KeyNotFound { .. }));
    }

    #[test]
    fn test_remove_missing_key() {
        let mut map: BTreeMap<u32, ()> = BTreeMap::new();
        let err = KeyValueMap::remove(&mut map, &3).unwrap_err();
        assert!(matches!(err, RouteError::KeyNotFound { ref key } if key == "3"));
    }

    #[test]
    fn test_btree_keys_are_sorted() {
        let mut map: BTreeMap<&str, ()> = BTreeMap::new();
        map.put("ORD", ());
        map.put("ATL", ());
        map.put("DEN", ());
        let keys: Vec<_> = KeyValueMap::keys(&map).copied().collect();
        assert_eq!(keys, vec!["ATL", "DEN", "ORD"]);
    }
}
