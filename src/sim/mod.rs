//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed logical step per call, never wall-clock deltas
//! - Wall-clock time only as an explicit input (spawn gating)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod driver;
pub mod lifecycle;
pub mod obstacles;
pub mod physics;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{Aabb, player_hits_obstacle};
pub use driver::{FrameDriver, FrameOutcome};
pub use lifecycle::{ActionOutcome, primary_action};
pub use obstacles::AdvanceReport;
pub use state::{GamePhase, GameState, Obstacle, Playfield, Player, Snapshot};
pub use tick::{TickInput, TickOutcome, tick};
