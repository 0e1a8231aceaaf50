//! CLI entry point for partition-utils.

use clap::Parser;
use cli::response::to_json;
use cli::{CliConfig, ErrorResponse};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    if let Err(err) = config.init_tracing() {
        eprintln!("{:#}", err);
        return ExitCode::FAILURE;
    }

    match config.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let response = ErrorResponse::from_error(&err);
            match to_json(&response, config.pretty) {
                Ok(body) => eprintln!("{}", body),
                Err(_) => eprintln!("{}: {}", response.error, response.message),
            }
            response.exit_code()
        }
    }
}
