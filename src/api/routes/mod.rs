//! API route declarations (e.g., /api/v1/*)

pub mod ai_routes;
pub mod alert_routes;
pub mod catalog_routes;
pub mod stats_routes;
