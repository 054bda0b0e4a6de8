//! Pass-through reading: each card's own artwork, unchanged.

use async_trait::async_trait;

use crate::core::catalog::Card;
use crate::reading::{ReadingError, ReadingResult, ReadingService};

#[derive(Debug, Default, Clone, Copy)]
pub struct StaticReadingService;

impl StaticReadingService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReadingService for StaticReadingService {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_reading(
        &self,
        first: &Card,
        second: &Card,
    ) -> Result<ReadingResult, ReadingError> {
        Ok(ReadingResult {
            card1_image: first.static_image.to_string(),
            card2_image: second.static_image.to_string(),
        })
    }
}
