//! Collaborator utilities used by callers of the partitioner.
//!
//! - Null-safe iteration over possibly absent collections
//! - String truncation with a fixed marker
//! - Time-interval bound validation
//!
//! Every fallible function here reports failures with the core library's
//! single `InvalidArgument` error kind.

pub mod collections;
pub mod interval;
pub mod strings;

pub use collections::{is_not_empty, safe_iter};
pub use interval::{validate_time_interval, TimeUnit};
pub use strings::{limit, ELLIPSIS};
