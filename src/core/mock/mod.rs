//! Canned data standing in for upstream feeds that are not wired up yet.
//!
//! The catalog and statistics served here follow the same shapes the real
//! integrations will use, so swapping a module out later does not touch the
//! services above it.

pub mod alerts;
pub mod catalog;
pub mod stats;
