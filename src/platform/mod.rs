//! Platform abstraction layer
//!
//! Sits between the deterministic simulation and whatever presents it:
//! - `host`: Outbound notification sink (sound, HUD text, effects)
//! - `driver`: Frame pacing and inbound input queueing

pub mod driver;
pub mod host;

pub use driver::Driver;
pub use host::{Host, LogHost};
