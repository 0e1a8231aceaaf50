//! Input validation shared by every partitioning strategy.
//!
//! Validation always runs before any group is allocated or any element is
//! read. The partition count is checked before the collection.

use crate::error::{Error, Result};

pub(crate) const PARTITIONS_NOT_POSITIVE: &str = "The number of partitions must be greater than 0.";
pub(crate) const COLLECTION_ABSENT: &str = "The collection cannot be null.";

/// Checks that the partition count is positive.
pub fn validate_partition_count(num_partitions: usize) -> Result<()> {
    if num_partitions == 0 {
        return Err(Error::invalid_argument(PARTITIONS_NOT_POSITIVE));
    }
    Ok(())
}

/// Checks both inputs of a partitioning call and unwraps the collection.
pub fn validate_inputs<C>(collection: Option<C>, num_partitions: usize) -> Result<C> {
    validate_partition_count(num_partitions)?;
    collection.ok_or_else(|| Error::invalid_argument(COLLECTION_ABSENT))
}

/// Converts a signed, caller-supplied partition count into a `usize`.
///
/// Zero and negative values are rejected with the same error as a zero
/// count passed to the partitioners directly.
pub fn partition_count(raw: i64) -> Result<usize> {
    if raw <= 0 {
        return Err(Error::invalid_argument(PARTITIONS_NOT_POSITIVE));
    }
    usize::try_from(raw)
        .map_err(|_| Error::invalid_argument(format!("{} partitions exceeds the addressable range", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_partitions_rejected() {
        assert_eq!(
            validate_partition_count(0),
            Err(Error::InvalidArgument(PARTITIONS_NOT_POSITIVE.to_string()))
        );
        assert!(validate_partition_count(1).is_ok());
    }

    #[test]
    fn test_count_checked_before_collection() {
        let err = validate_inputs::<Vec<u8>>(None, 0).unwrap_err();
        assert_eq!(err.message(), PARTITIONS_NOT_POSITIVE);

        let err = validate_inputs::<Vec<u8>>(None, 3).unwrap_err();
        assert_eq!(err.message(), COLLECTION_ABSENT);
    }

    #[test]
    fn test_empty_collection_is_valid() {
        let items = validate_inputs(Some(Vec::<u8>::new()), 4).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_partition_count_from_signed() {
        assert_eq!(partition_count(3), Ok(3));
        assert!(partition_count(0).is_err());
        assert!(partition_count(-1).is_err());
        assert!(partition_count(i64::MIN).is_err());
    }
}
