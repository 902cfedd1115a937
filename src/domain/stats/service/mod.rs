pub mod rollup;
pub mod stats_service;
