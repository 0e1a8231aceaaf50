//! Translation of command failures into status-coded error responses.
//!
//! Invalid arguments are the caller's fault and are echoed back with a 400
//! status. Anything else is reported as a generic 500; its detail goes to
//! the log, not the response.

use serde::{Deserialize, Serialize};
use std::process::ExitCode;

pub const BAD_REQUEST: (u16, &str) = (400, "Bad Request");
pub const INTERNAL_SERVER_ERROR: (u16, &str) = (500, "Internal Server Error");

/// sysexits.h code for malformed input data.
pub const EX_DATAERR: u8 = 65;

/// Body written to stderr when a command fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new((status, reason): (u16, &str), message: impl Into<String>) -> Self {
        Self {
            status,
            error: reason.to_string(),
            message: message.into(),
        }
    }

    /// Maps an error from command execution to a response.
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<corelib::Error>() {
            Some(invalid) => {
                tracing::debug!(error = %invalid, "rejected invalid argument");
                Self::new(BAD_REQUEST, invalid.message())
            }
            None => {
                tracing::error!(error = ?err, "{}", INTERNAL_SERVER_ERROR.1);
                Self::new(INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR.1)
            }
        }
    }

    /// Exit status: 65 (`EX_DATAERR`) for caller errors, 1 for everything
    /// else. clap exits with 2 on usage errors, so the three stay distinct.
    pub fn exit_status(&self) -> u8 {
        if (400..500).contains(&self.status) {
            EX_DATAERR
        } else {
            1
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// Serializes `value` as compact or pretty JSON.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
