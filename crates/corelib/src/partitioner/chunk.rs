//! Chunk partitioner implementation.
//!
//! Splits the input into contiguous runs. The target run length is
//! `ceil(len / n)`, computed once for the whole call; groups are filled in
//! order until the input runs out, so only the last non-empty group can be
//! short and every group after it is empty.

use crate::error::Result;
use crate::math::ceil_div;
use crate::partitioner::traits::{Partitioner, Partitions, Strategy};
use crate::validate::validate_partition_count;

/// Contiguous-run partitioner.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChunkPartitioner;

impl Partitioner for ChunkPartitioner {
    fn partition<T, I>(&self, collection: I, num_partitions: usize) -> Result<Partitions<T>>
    where
        I: IntoIterator<Item = T>,
    {
        chunk_partition(collection, num_partitions)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Chunk
    }

    fn name(&self) -> &'static str {
        "ChunkPartitioner"
    }
}

/// Splits `collection` into `num_partitions` contiguous groups.
///
/// ```rust
/// use corelib::chunk_partition;
///
/// let groups = chunk_partition(1..=7, 3).unwrap();
/// assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
/// ```
pub fn chunk_partition<T, I>(collection: I, num_partitions: usize) -> Result<Partitions<T>>
where
    I: IntoIterator<Item = T>,
{
    validate_partition_count(num_partitions)?;

    // The run length depends on the total size, so the input is materialized first.
    let items: Vec<T> = collection.into_iter().collect();
    let chunk_size = ceil_div(items.len(), num_partitions);

    let mut iter = items.into_iter();
    let partitions = (0..num_partitions)
        .map(|_| iter.by_ref().take(chunk_size).collect())
        .collect();

    Ok(partitions)
}
