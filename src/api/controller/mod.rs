pub mod ai;
pub mod alerts;
pub mod catalog;
pub mod stats;
