// Domain layer - Roles, session records and role-indexed view content
pub mod dashboard;
pub mod errors;
pub mod navigation;
pub mod role;
pub mod stats;
pub mod user;
