use std::{
    borrow::Borrow,
    collections::hash_map::DefaultHasher,
    hash::{BuildHasher, BuildHasherDefault, Hash},
    mem,
};

use log::{debug, trace};

use crate::error::{Result, TableError};

/// Number of buckets used by [`ChainedHashTable::default`]
pub const DEFAULT_CAPACITY: usize = 20;

/// Hasher builder used when the caller does not supply one.
///
/// Every `DefaultHasher` built this way starts from the same keys, so a key always
/// lands in the same bucket for the lifetime of the table.
pub type DefaultHashBuilder = BuildHasherDefault<DefaultHasher>;

/// A single node of a collision chain
#[derive(Debug, Clone)]
struct Entry<K, V> {
    /// The key in the key-value pair
    key: K,
    /// The value associated with the key
    value: V,
    /// Arena slot of the next entry in the same bucket
    next: Option<usize>,
}

/// A fixed-capacity hash table resolving collisions by chaining.
///
/// Entries live in an arena and every bucket holds the arena slot of its chain head,
/// with each entry linking to the next one by slot. The number of buckets is chosen
/// at construction and never changes: no rehashing is ever performed, so chains grow
/// without bound as keys are added.
///
/// Keys must implement `Hash` and `Eq` consistently: equal keys must hash equally.
///
/// Note: This implementation is not thread-safe. Wrap it in a lock for shared use.
#[derive(Debug, Clone)]
pub struct ChainedHashTable<K, V, S = DefaultHashBuilder> {
    /// Chain heads, one per bucket
    buckets: Box<[Option<usize>]>,
    /// Every entry ever inserted; entries are never removed
    entries: Vec<Entry<K, V>>,
    /// Builds the hasher used to place keys into buckets
    hash_builder: S,
}

impl<K, V> Default for ChainedHashTable<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::build(DEFAULT_CAPACITY, DefaultHashBuilder::default())
    }
}

impl<K, V> ChainedHashTable<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty table with `capacity` buckets.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidConfiguration`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K, V, S> ChainedHashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Creates an empty table with `capacity` buckets that hashes keys with `hash_builder`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidConfiguration`] if `capacity` is zero.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Result<Self> {
        if capacity == 0 {
            return Err(TableError::InvalidConfiguration { capacity });
        }
        Ok(Self::build(capacity, hash_builder))
    }

    /// Allocates the buckets; `capacity` has already been validated
    fn build(capacity: usize, hash_builder: S) -> Self {
        debug!("creating chained hash table with {capacity} buckets");
        Self { buckets: vec![None; capacity].into_boxed_slice(), entries: Vec::new(), hash_builder }
    }

    /// Maps a key to its bucket, always in `0..capacity`
    #[allow(clippy::cast_possible_truncation)]
    fn index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        // The hash is unsigned, so the remainder is never negative. It is below the
        // bucket count, which itself fits in `usize`.
        let buckets = self.buckets.len().max(1) as u64;
        (hash % buckets) as usize
    }

    /// Walks the chain starting at `head` and returns the slot holding `key`
    fn find_in_chain<Q>(&self, head: Option<usize>, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut current = head;
        while let Some(slot) = current {
            let entry = self.entries.get(slot)?;
            if entry.key.borrow() == key {
                return Some(slot);
            }
            current = entry.next;
        }
        None
    }

    /// Finds the arena slot of `key`, if it is stored
    fn locate<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let head = self.buckets.get(self.index(key)).copied().flatten();
        self.find_in_chain(head, key)
    }

    /// Associates `value` with `key`, replacing any value already stored for it.
    pub fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    /// Associates `value` with `key` and returns the value it replaced.
    ///
    /// An existing entry is updated in place. A new key is linked in as the head of its
    /// bucket's chain. Capacity never grows, whatever the resulting load factor.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let bucket = self.index(&key);
        let head = self.buckets.get(bucket).copied().flatten();

        if let Some(slot) = self.find_in_chain(head, &key) {
            trace!("updating existing entry in bucket {bucket}");
            let entry = self.entries.get_mut(slot)?;
            return Some(mem::replace(&mut entry.value, value));
        }

        let slot = self.entries.len();
        let chain_head = self.buckets.get_mut(bucket)?;
        self.entries.push(Entry { key, value, next: *chain_head });
        *chain_head = Some(slot);
        trace!("inserted new entry in bucket {bucket}, {} keys stored", self.entries.len());

        None
    }

    /// Retrieve a value for a given key
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.locate(key)?;
        self.entries.get(slot).map(|entry| &entry.value)
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.locate(key)?;
        self.entries.get_mut(slot).map(|entry| &mut entry.value)
    }

    /// Returns true if the table holds a value for `key`
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.locate(key).is_some()
    }

    /// Returns the number of distinct keys stored
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no key has been stored yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the fixed number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current load factor (keys per bucket). It is never acted upon.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// Returns the length of every bucket's chain, in bucket order
    #[must_use]
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(|&head| self.chain(head).count()).collect()
    }

    /// Returns the length of the longest chain
    #[must_use]
    pub fn longest_chain(&self) -> usize {
        self.chain_lengths().into_iter().max().unwrap_or(0)
    }

    /// Returns an iterator over the key-value pairs in no particular order
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { entries: self.entries.iter() }
    }

    /// Yields the entries of the chain starting at `head`
    fn chain(&self, head: Option<usize>) -> impl Iterator<Item = &Entry<K, V>> + '_ {
        let mut current = head;
        std::iter::from_fn(move || {
            let entry = self.entries.get(current?)?;
            current = entry.next;
            Some(entry)
        })
    }
}

impl<K, V, S> Extend<(K, V)> for ChainedHashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

/// Iterator over the key-value pairs of the table
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Arena entries left to visit
    entries: std::slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|entry| (&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}
