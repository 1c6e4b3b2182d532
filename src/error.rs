//! Errors reported by `ChainedHashTable`

use thiserror::Error;

/// Errors that can occur while building a table
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The requested bucket count cannot hold any chain
    #[error("invalid table configuration: capacity must be positive, got {capacity}")]
    InvalidConfiguration {
        /// The rejected capacity
        capacity: usize,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = TableError::InvalidConfiguration { capacity: 0 };
        assert_eq!(
            err.to_string(),
            "invalid table configuration: capacity must be positive, got 0"
        );
    }
}
