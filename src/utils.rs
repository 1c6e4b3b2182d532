//! Utility functions and traits for `ChainedHashTable`

use crate::{ChainedHashTable, error::Result};
use std::hash::{BuildHasher, Hash};

/// Extension trait for tables that copies their contents out
pub trait TableExtensions<K, V> {
    /// Returns the keys of the table as a Vec
    fn keys(&self) -> Vec<K>;

    /// Returns the values of the table as a Vec
    fn values(&self) -> Vec<V>;
}

impl<K, V, S> TableExtensions<K, V> for ChainedHashTable<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }
}

/// Creates a `ChainedHashTable` with `capacity` buckets from an iterator of key-value pairs.
///
/// Later pairs overwrite earlier ones with the same key.
///
/// # Errors
///
/// Returns [`crate::TableError::InvalidConfiguration`] if `capacity` is zero.
pub fn try_from_iter<K, V, I>(capacity: usize, iter: I) -> Result<ChainedHashTable<K, V>>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    let mut table = ChainedHashTable::new(capacity)?;
    table.extend(iter);
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TableError;

    #[test]
    fn test_try_from_iter() {
        let data = vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)];

        let table = try_from_iter(5, data).unwrap();

        assert_eq!(table.get("a"), Some(&1));
        assert_eq!(table.get("b"), Some(&2));
        assert_eq!(table.get("c"), Some(&3));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_try_from_iter_rejects_zero_capacity() {
        let result = try_from_iter(0, vec![("a", 1)]);
        assert_eq!(result.err(), Some(TableError::InvalidConfiguration { capacity: 0 }));
    }

    #[test]
    fn test_keys_and_values() {
        let mut table = ChainedHashTable::new(2).unwrap();
        table.put("a".to_string(), 1);
        table.put("b".to_string(), 2);
        table.put("c".to_string(), 3);

        let mut keys = table.keys();
        keys.sort(); // Iteration order is unspecified

        let mut values = table.values();
        values.sort_unstable();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(values, vec![1, 2, 3]);
    }
}
