// Presentation layer - HTTP surface consumed by the dashboard client
pub mod app_state;
pub mod error;
pub mod handlers;
pub mod json;
pub mod routes;
