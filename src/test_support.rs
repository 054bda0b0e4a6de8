//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::core::App;
use crate::core::catalog::Card;
use crate::dispatch::Dispatcher;
use crate::reading::{ReadingError, ReadingResult, ReadingService, StaticReadingService};

/// A service that always rejects.
pub struct FailingService;

#[async_trait]
impl ReadingService for FailingService {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_reading(
        &self,
        _first: &Card,
        _second: &Card,
    ) -> Result<ReadingResult, ReadingError> {
        Err(ReadingError::Network("connection refused".to_string()))
    }
}

/// Creates a test Dispatcher backed by the static service.
pub fn test_dispatcher() -> Dispatcher {
    Dispatcher::new(
        App::default(),
        Arc::new(StaticReadingService::new()),
        Duration::from_secs(25),
    )
}
