use std::fmt;

use async_trait::async_trait;

use super::types::ReadingResult;
use crate::core::catalog::Card;

/// Errors that can occur while producing a reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadingError {
    /// Service misconfigured (missing API key, bad URL).
    Config(String),
    /// Network-level failure (DNS, connection refused).
    Network(String),
    /// Backend answered with an error status.
    Api { status: u16, message: String },
    /// Backend answered with something that is not a usable reading.
    Parse(String),
    /// The call did not finish within the configured timeout.
    Timeout,
}

impl fmt::Display for ReadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadingError::Config(msg) => write!(f, "config error: {msg}"),
            ReadingError::Network(msg) => write!(f, "network error: {msg}"),
            ReadingError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ReadingError::Parse(msg) => write!(f, "parse error: {msg}"),
            ReadingError::Timeout => write!(f, "reading timed out"),
        }
    }
}

impl std::error::Error for ReadingError {}

/// Produces the artwork for a drawn pair.
///
/// This is the one place an external content-generation step plugs in.
/// Implementations either resolve with both images populated or return an
/// error; the caller turns any error into the Error phase.
#[async_trait]
pub trait ReadingService: Send + Sync {
    /// Returns the name of the service.
    fn name(&self) -> &str;

    /// `first` maps to `card1_image`, `second` to `card2_image`.
    async fn fetch_reading(
        &self,
        first: &Card,
        second: &Card,
    ) -> Result<ReadingResult, ReadingError>;
}
