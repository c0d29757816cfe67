//! API endpoint modules.

pub mod collection_rates;
pub mod health;
pub mod issues;
pub mod openapi;
pub mod regions;

pub use collection_rates::configure_routes as configure_collection_rate_routes;
pub use health::configure_health_routes;
pub use issues::configure_routes as configure_issue_routes;
pub use openapi::ApiDoc;
pub use regions::configure_routes as configure_region_routes;
