//! Subcommands and their execution.

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::{Args, Subcommand};
use corelib::validate::partition_count;
use corelib::{try_partition, Error, Partitions, Strategy};
use serde::Serialize;
use std::io::BufRead;
use support::{limit, validate_time_interval, TimeUnit};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split items into contiguous runs of near-equal size
    Chunk(PartitionArgs),

    /// Deal items one at a time across the partitions
    RoundRobin(PartitionArgs),

    /// Shorten a string to a maximum length, ending in "..."
    Truncate {
        input: String,

        /// Maximum length of the output, marker included
        #[arg(short = 'm', long)]
        max_length: usize,
    },

    /// Check that the span between two date-times stays within a bound
    Interval {
        /// Start, as an ISO-8601 local date-time (2024-01-31T08:00:00)
        #[arg(long)]
        start: Option<String>,

        /// End, as an ISO-8601 local date-time
        #[arg(long)]
        end: Option<String>,

        /// Largest allowed number of whole units
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,

        /// nanos, micros, millis, seconds, minutes, hours, half-days, days, weeks,
        /// months, years, decades, centuries or millennia
        #[arg(long)]
        unit: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct PartitionArgs {
    /// Number of partitions to produce
    #[arg(short = 'n', long = "partitions", allow_negative_numbers = true)]
    pub partitions: i64,

    /// Items to partition, in order. Items may start with '-', so options go
    /// before the first item
    #[arg(allow_hyphen_values = true)]
    pub items: Vec<String>,

    /// Also read items from stdin, one per line
    #[arg(long)]
    pub stdin: bool,

    /// Truncate each item in the output to this many characters
    #[arg(long)]
    pub max_item_len: Option<usize>,
}

/// Successful output of a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandResult {
    Partitions {
        strategy: Strategy,
        partitions: Partitions<String>,
    },
    Truncated {
        value: String,
    },
    Interval {
        valid: bool,
        elapsed: i64,
        unit: TimeUnit,
    },
}

impl Command {
    /// Executes the command. `stdin` is only read by partition commands
    /// given `--stdin`.
    pub fn execute<R: BufRead>(&self, stdin: R) -> anyhow::Result<CommandResult> {
        match self {
            Command::Chunk(args) => args.execute(Strategy::Chunk, stdin),
            Command::RoundRobin(args) => args.execute(Strategy::RoundRobin, stdin),
            Command::Truncate { input, max_length } => Ok(CommandResult::Truncated {
                value: limit(input, *max_length).into_owned(),
            }),
            Command::Interval {
                start,
                end,
                max,
                unit,
            } => {
                let start = start.as_deref().map(parse_timestamp).transpose()?;
                let end = end.as_deref().map(parse_timestamp).transpose()?;
                let unit = unit.as_deref().map(str::parse::<TimeUnit>).transpose()?;
                let max = max.ok_or_else(|| Error::invalid_argument("maxDuration cannot be null."))?;

                validate_time_interval(start, end, max, unit)?;

                match (start, end, unit) {
                    (Some(start), Some(end), Some(unit)) => Ok(CommandResult::Interval {
                        valid: true,
                        elapsed: unit.between(start, end),
                        unit,
                    }),
                    _ => Err(anyhow::anyhow!("validated interval is missing an argument")),
                }
            }
        }
    }
}

impl PartitionArgs {
    fn execute<R: BufRead>(&self, strategy: Strategy, stdin: R) -> anyhow::Result<CommandResult> {
        // the count is checked before any input is read
        let num_partitions = partition_count(self.partitions)?;
        let collection = self.collection(stdin)?;

        let mut partitions = try_partition(strategy, collection, num_partitions)?;

        if let Some(max_len) = self.max_item_len {
            for item in partitions.iter_mut().flatten() {
                *item = limit(item, max_len).into_owned();
            }
        }

        tracing::info!(
            %strategy,
            partitions = num_partitions,
            items = partitions.iter().map(Vec::len).sum::<usize>(),
            "partitioned collection"
        );

        Ok(CommandResult::Partitions {
            strategy,
            partitions,
        })
    }

    /// Items from arguments followed by stdin lines. Absent when neither
    /// source was given.
    fn collection<R: BufRead>(&self, stdin: R) -> anyhow::Result<Option<Vec<String>>> {
        if !self.stdin {
            return Ok((!self.items.is_empty()).then(|| self.items.clone()));
        }

        let mut items = self.items.clone();
        for line in stdin.lines() {
            items.push(line.context("failed to read items from stdin")?);
        }
        Ok(Some(items))
    }
}

fn parse_timestamp(raw: &str) -> corelib::Result<NaiveDateTime> {
    raw.parse::<NaiveDateTime>()
        .map_err(|e| Error::invalid_argument(format!("invalid date-time '{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use clap::Parser;

    fn run(args: &[&str], stdin: &str) -> anyhow::Result<CommandResult> {
        let mut argv = vec!["partition"];
        argv.extend_from_slice(args);
        let config = CliConfig::try_parse_from(argv)?;
        config.command.execute(stdin.as_bytes())
    }

    fn groups(result: CommandResult) -> Partitions<String> {
        match result {
            CommandResult::Partitions { partitions, .. } => partitions,
            other => panic!("expected partitions, got {:?}", other),
        }
    }

    fn invalid_argument(err: &anyhow::Error) -> bool {
        matches!(err.downcast_ref::<Error>(), Some(Error::InvalidArgument(_)))
    }

    #[test]
    fn test_chunk_from_arguments() {
        let result = run(&["chunk", "-n", "3", "1", "2", "3", "4", "5", "6", "7"], "").unwrap();
        assert_eq!(
            groups(result),
            vec![vec!["1", "2", "3"], vec!["4", "5", "6"], vec!["7"]]
        );
    }

    #[test]
    fn test_round_robin_from_stdin() {
        let result = run(&["round-robin", "-n", "3", "--stdin"], "a\nb\nc\nd\n").unwrap();
        assert_eq!(groups(result), vec![vec!["a", "d"], vec!["b"], vec!["c"]]);
    }

    #[test]
    fn test_arguments_precede_stdin() {
        let result = run(&["chunk", "-n", "1", "--stdin", "first"], "second\n").unwrap();
        assert_eq!(groups(result), vec![vec!["first", "second"]]);
    }

    #[test]
    fn test_empty_stdin_is_empty_collection() {
        let result = run(&["chunk", "-n", "2", "--stdin"], "").unwrap();
        assert_eq!(groups(result), vec![Vec::<String>::new(), Vec::new()]);
    }

    #[test]
    fn test_no_items_is_absent_collection() {
        let err = run(&["round-robin", "-n", "2"], "").unwrap_err();
        assert!(invalid_argument(&err));
    }

    #[test]
    fn test_items_starting_with_hyphen() {
        let result = run(&["chunk", "-n", "2", "a", "-5", "b"], "").unwrap();
        assert_eq!(groups(result), vec![vec!["a", "-5"], vec!["b"]]);

        let result = run(&["round-robin", "-n", "2", "-x", "--y", "-5"], "").unwrap();
        assert_eq!(groups(result), vec![vec!["-x", "-5"], vec!["--y"]]);
    }

    #[test]
    fn test_non_positive_partitions() {
        for n in ["0", "-3"] {
            let err = run(&["chunk", "-n", n, "a", "b"], "").unwrap_err();
            assert!(invalid_argument(&err), "n = {}", n);
        }
    }

    #[test]
    fn test_max_item_len() {
        let result = run(
            &["chunk", "-n", "2", "--max-item-len", "6", "short", "much-too-long"],
            "",
        )
        .unwrap();
        assert_eq!(groups(result), vec![vec!["short"], vec!["muc..."]]);
    }

    #[test]
    fn test_truncate() {
        let result = run(&["truncate", "hello world", "-m", "8"], "").unwrap();
        assert_eq!(
            result,
            CommandResult::Truncated {
                value: "hello...".to_string()
            }
        );
    }

    #[test]
    fn test_interval_within_bound() {
        let result = run(
            &[
                "interval",
                "--start",
                "2024-01-01T00:00:00",
                "--end",
                "2024-01-03T12:00:00",
                "--max",
                "2",
                "--unit",
                "days",
            ],
            "",
        )
        .unwrap();
        assert_eq!(
            result,
            CommandResult::Interval {
                valid: true,
                elapsed: 2,
                unit: TimeUnit::Days
            }
        );
    }

    #[test]
    fn test_interval_rejections() {
        let exceeded = run(
            &["interval", "--start", "2024-01-01T00:00:00", "--end", "2024-01-01T00:10:00", "--max", "5", "--unit", "minutes"],
            "",
        )
        .unwrap_err();
        assert!(invalid_argument(&exceeded));

        let missing_end = run(
            &["interval", "--start", "2024-01-01T00:00:00", "--max", "5", "--unit", "minutes"],
            "",
        )
        .unwrap_err();
        assert!(invalid_argument(&missing_end));

        let missing_max = run(
            &["interval", "--start", "2024-01-01T00:00:00", "--end", "2024-01-02T00:00:00", "--unit", "days"],
            "",
        )
        .unwrap_err();
        assert!(invalid_argument(&missing_max));

        let bad_timestamp = run(
            &["interval", "--start", "yesterday", "--end", "2024-01-01T00:00:00", "--max", "5", "--unit", "days"],
            "",
        )
        .unwrap_err();
        assert!(invalid_argument(&bad_timestamp));

        let bad_unit = run(
            &["interval", "--start", "2024-01-01T00:00:00", "--end", "2024-01-01T00:00:00", "--max", "1", "--unit", "eons"],
            "",
        )
        .unwrap_err();
        assert!(invalid_argument(&bad_unit));
    }
}
