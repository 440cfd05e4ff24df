//! Ground Dash - an endless runner for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `renderer`: WebGPU rendering of the playfield
//! - `platform`: Clocks and other platform abstractions
//! - `settings`: Player preferences and balance tuning
//! - `tuning`: Data-driven game balance

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Settings, SettingsError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Viewport width the logical units are authored against
    pub const REFERENCE_WIDTH: f32 = 480.0;
    /// Distance from the bottom of the viewport to the ground line
    pub const GROUND_OFFSET: f32 = 30.0;
    /// Player spawn height above the bottom of the viewport
    pub const PLAYER_SPAWN_OFFSET: f32 = 80.0;

    /// Steps are a fixed logical increment; the browser drives ~60 per second
    pub const NOMINAL_STEPS_PER_SECOND: u32 = 60;

    /// Frames the headless driver runs before giving up on a game
    pub const HEADLESS_FRAME_LIMIT: u64 = 60 * 60 * 10;
}
