pub mod service;
pub mod services;
pub mod types;

pub use service::{ReadingError, ReadingService};
pub use services::{RemoteReadingService, StaticReadingService};
pub use types::ReadingResult;
