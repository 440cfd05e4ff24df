//! Millisecond clocks
//!
//! The simulation never reads time itself; the frame driver asks a
//! [`Clock`] once per step and passes the value down.

use std::cell::Cell;
use std::rc::Rc;

/// Source of wall-clock time in milliseconds
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Clock advanced by hand, for tests and scripted runs
///
/// Clones share the same time, so a test can keep a handle while the
/// driver owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// `Date.now()` in the browser
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

#[cfg(target_arch = "wasm32")]
impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new(100.0);
        let handle = clock.clone();
        handle.advance(50.0);
        assert_eq!(clock.now_ms(), 150.0);
        handle.set(0.0);
        assert_eq!(clock.now_ms(), 0.0);
    }
}
