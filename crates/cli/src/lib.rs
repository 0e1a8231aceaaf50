//! Command-line caller for the partitioning library.
//!
//! Provides commands for:
//! - Chunk and round-robin partitioning of arguments or stdin lines
//! - String truncation
//! - Time-interval validation
//!
//! Results are printed as JSON on stdout; failures become an
//! [`ErrorResponse`] on stderr.

pub mod commands;
pub mod config;
pub mod response;

pub use commands::{Command, CommandResult, PartitionArgs};
pub use config::CliConfig;
pub use response::ErrorResponse;
