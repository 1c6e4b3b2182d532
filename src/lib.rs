//! # Chained Hash Table
//!
//! A fixed-capacity hash table that resolves collisions with separate chaining.
//!
//! The bucket count is chosen once at construction and never changes. New keys are
//! linked in at the head of their bucket's chain, existing keys are updated in place,
//! and lookups of a key that was never stored return `None`. Because the table never
//! rehashes, chains grow with every new key; `load_factor` and `longest_chain`
//! report how far that has gone.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chained_hashtable::ChainedHashTable;
//!
//! // Create a table with 20 buckets
//! let mut grades = ChainedHashTable::new(20)?;
//!
//! // Insert values
//! grades.put("John".to_string(), 1);
//! grades.put("Gracie".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(grades.get("John"), Some(&1));
//! assert_eq!(grades.get("Nobody"), None);
//!
//! // Update values
//! grades.put("John".to_string(), 1000);
//! assert_eq!(grades.get("John"), Some(&1000));
//! assert_eq!(grades.len(), 2);
//! # Ok::<(), chained_hashtable::TableError>(())
//! ```
//!
//! ## Invalid Capacity
//!
//! ```rust
//! use chained_hashtable::{ChainedHashTable, TableError};
//!
//! let result = ChainedHashTable::<String, i32>::new(0);
//! assert_eq!(result.err(), Some(TableError::InvalidConfiguration { capacity: 0 }));
//! ```

/// Module implementing the fixed-capacity chained hash table
mod chained_hash_table;
/// Error types for table construction
mod error;
/// Utility functions and traits for the table
mod utils;

pub use chained_hash_table::{ChainedHashTable, DEFAULT_CAPACITY, DefaultHashBuilder, Iter};
pub use error::{Result, TableError};
pub use utils::{TableExtensions, try_from_iter};
