//! Prophecy Hall library exports for testing

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod dispatch;
pub mod reading;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which reading service backs the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    /// Each card's own artwork, no network.
    #[default]
    Static,
    /// HTTP backend at the configured base URL.
    Remote,
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceKind::Static => f.write_str("static"),
            ServiceKind::Remote => f.write_str("remote"),
        }
    }
}

impl FromStr for ServiceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(ServiceKind::Static),
            "remote" => Ok(ServiceKind::Remote),
            other => Err(format!("unknown reading service: {other}")),
        }
    }
}
