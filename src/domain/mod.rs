pub mod ai;
pub mod alert;
pub mod catalog;
pub mod stats;
