//! Partitioner abstraction.
//!
//! Partitioners split an in-memory collection into a fixed number of ordered
//! groups. Two strategies are provided:
//!
//! - **Chunk**: contiguous runs of near-equal size
//! - **RoundRobin**: successive elements dealt to successive groups
//!
//! The free functions are the primary entry points; the [`Partitioner`]
//! trait lets callers be generic over the strategy.

pub mod chunk;
pub mod round_robin;
pub mod traits;

pub use chunk::{chunk_partition, ChunkPartitioner};
pub use round_robin::{round_robin_partition, RoundRobinPartitioner};
pub use traits::{Partitioner, Partitions, Strategy};

use crate::error::Result;
use crate::validate::validate_inputs;

/// Splits `collection` with the given strategy.
pub fn partition<T, I>(strategy: Strategy, collection: I, num_partitions: usize) -> Result<Partitions<T>>
where
    I: IntoIterator<Item = T>,
{
    match strategy {
        Strategy::Chunk => chunk_partition(collection, num_partitions),
        Strategy::RoundRobin => round_robin_partition(collection, num_partitions),
    }
}

/// Like [`partition`], for callers whose collection may be absent.
///
/// An absent collection is an `InvalidArgument` error, never an empty
/// result. A zero partition count is reported first.
pub fn try_partition<T, I>(
    strategy: Strategy,
    collection: Option<I>,
    num_partitions: usize,
) -> Result<Partitions<T>>
where
    I: IntoIterator<Item = T>,
{
    let collection = validate_inputs(collection, num_partitions)?;
    partition(strategy, collection, num_partitions)
}
