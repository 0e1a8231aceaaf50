//! Integration tests for the collaborator utilities, exercised the way a
//! caller of the partitioner would use them.

use chrono::{NaiveDate, NaiveDateTime};
use corelib::{chunk_partition, Error};
use proptest::prelude::*;
use support::{is_not_empty, limit, safe_iter, validate_time_interval, TimeUnit, ELLIPSIS};

fn day(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn test_safe_iter_feeds_partitioner() {
    let present = vec![1, 2, 3, 4];
    let groups = chunk_partition(safe_iter(Some(&present)), 2).unwrap();
    assert_eq!(groups, vec![vec![&1, &2], vec![&3, &4]]);

    // an absent collection becomes an empty one through the adapter
    let groups = chunk_partition(safe_iter::<Vec<i32>>(None), 2).unwrap();
    assert!(groups.iter().all(Vec::is_empty));
    assert!(!is_not_empty::<Vec<i32>>(None));
}

#[test]
fn test_interval_week_bound() {
    assert!(validate_time_interval(Some(day(1)), Some(day(8)), 1, Some(TimeUnit::Weeks)).is_ok());
    let err = validate_time_interval(Some(day(1)), Some(day(15)), 1, Some(TimeUnit::Weeks)).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn test_interval_unknown_unit_is_invalid_argument() {
    let err = "eons".parse::<TimeUnit>().unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

proptest! {
    #[test]
    fn prop_limit_never_exceeds_max(input in ".{0,64}", max_length in 0usize..80) {
        let limited = limit(&input, max_length);
        prop_assert!(limited.chars().count() <= max_length);
    }

    #[test]
    fn prop_limit_keeps_prefix(input in "[a-z]{0,64}", max_length in 4usize..80) {
        let limited = limit(&input, max_length);
        if input.len() <= max_length {
            prop_assert_eq!(&*limited, input.as_str());
        } else {
            prop_assert_eq!(limited.len(), max_length);
            prop_assert!(limited.ends_with(ELLIPSIS));
            prop_assert!(input.starts_with(&limited[..max_length - ELLIPSIS.len()]));
        }
    }
}
