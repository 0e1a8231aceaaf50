//! Core partitioner trait definitions.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered set of groups produced by a partitioner.
///
/// Always holds exactly as many groups as were requested; trailing groups may
/// be empty.
pub type Partitions<T> = Vec<Vec<T>>;

/// Distribution strategy used to split a collection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Contiguous runs of `ceil(len / n)` elements.
    Chunk,
    /// Element `i` goes to group `i % n`.
    RoundRobin,
}

impl Strategy {
    /// Stable, lowercase identifier (matches the serde representation).
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Chunk => "chunk",
            Strategy::RoundRobin => "round-robin",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A partitioner splits a collection into a fixed number of groups.
///
/// Partitioners are stateless and thread-safe, allowing concurrent calls on
/// disjoint inputs without synchronization.
pub trait Partitioner: Send + Sync + 'static {
    /// Splits `collection` into exactly `num_partitions` groups.
    ///
    /// # Arguments
    ///
    /// * `collection` - The elements to distribute, in source order
    /// * `num_partitions` - Number of groups to produce; must be positive
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` when `num_partitions` is zero. Nothing is
    /// read from `collection` in that case.
    fn partition<T, I>(&self, collection: I, num_partitions: usize) -> Result<Partitions<T>>
    where
        I: IntoIterator<Item = T>;

    /// The strategy this partitioner implements.
    fn strategy(&self) -> Strategy;

    /// Returns the name of this partitioner.
    fn name(&self) -> &'static str;
}
