// Application layer - Stores and use cases built on the domain
pub mod authenticator;
pub mod dashboard_service;
pub mod session_store;
pub mod snapshot;
pub mod state_repository;
pub mod theme_store;
