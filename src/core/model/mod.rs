//! Domain model shared across services, state, and the API layer.

pub mod alert;
pub mod geography;
pub mod stats;
