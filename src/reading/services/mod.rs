pub mod remote;
pub mod static_images;

pub use remote::RemoteReadingService;
pub use static_images::StaticReadingService;
