//! Business logic services.

pub mod aggregate;
pub mod export;
pub mod latest;
pub mod live;
pub mod storage;
pub mod upload;

pub use storage::Storage;
pub use upload::configure_upload_routes;
