//! Round-robin partitioner implementation.
//!
//! Deals elements one at a time: element `i` (in source order) goes to group
//! `i % n`. Group sizes differ by at most one, and the groups holding the
//! extra element are the first `len % n`.

use crate::error::Result;
use crate::math::dealt_share;
use crate::partitioner::traits::{Partitioner, Partitions, Strategy};
use crate::validate::validate_partition_count;

/// Interleaving partitioner.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoundRobinPartitioner;

impl Partitioner for RoundRobinPartitioner {
    fn partition<T, I>(&self, collection: I, num_partitions: usize) -> Result<Partitions<T>>
    where
        I: IntoIterator<Item = T>,
    {
        round_robin_partition(collection, num_partitions)
    }

    fn strategy(&self) -> Strategy {
        Strategy::RoundRobin
    }

    fn name(&self) -> &'static str {
        "RoundRobinPartitioner"
    }
}

/// Splits `collection` into `num_partitions` interleaved groups.
///
/// ```rust
/// use corelib::round_robin_partition;
///
/// let groups = round_robin_partition(1..=7, 3).unwrap();
/// assert_eq!(groups, vec![vec![1, 4, 7], vec![2, 5], vec![3, 6]]);
/// ```
pub fn round_robin_partition<T, I>(collection: I, num_partitions: usize) -> Result<Partitions<T>>
where
    I: IntoIterator<Item = T>,
{
    validate_partition_count(num_partitions)?;

    let iter = collection.into_iter();
    let (expected_len, _) = iter.size_hint();

    let mut partitions: Partitions<T> = (0..num_partitions)
        .map(|index| Vec::with_capacity(dealt_share(expected_len, num_partitions, index)))
        .collect();

    for (index, item) in iter.enumerate() {
        partitions[index % num_partitions].push(item);
    }

    Ok(partitions)
}
