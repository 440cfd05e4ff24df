//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Wall-clock time (spawn gating)

pub mod time;

pub use time::{Clock, ManualClock};

#[cfg(target_arch = "wasm32")]
pub use time::BrowserClock;
