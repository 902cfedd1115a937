//! In-memory runtime state. The alert store lives here behind a
//! repository trait so services and tests share one mutation path.

pub mod alerts;
