//! Core library for collection partitioning.
//!
//! This crate provides the fundamental partitioning building blocks:
//! - Chunk and round-robin partitioners
//! - Input validation shared by every strategy
//! - Numeric helpers (ceiling division, dealt shares)
//!
//! All functions are pure: they take ownership of (or iterate) the input,
//! hold no state between calls and return freshly allocated groups.

pub mod error;
pub mod math;
pub mod partitioner;
pub mod validate;

pub use error::{Error, Result};
pub use partitioner::{
    chunk_partition, partition, round_robin_partition, try_partition, ChunkPartitioner, Partitioner,
    Partitions, RoundRobinPartitioner, Strategy,
};
