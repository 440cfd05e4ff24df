//! Frame driver
//!
//! Runs one tick per display refresh and decides whether another frame is
//! wanted. Scheduling stops when the run ends and resumes only through a
//! restart, so the browser loop and the headless loop share one exit rule.

use super::autopilot;
use super::lifecycle::{self, ActionOutcome};
use super::state::{GameState, Playfield};
use super::tick::{TickInput, TickOutcome, tick};
use crate::platform::Clock;

/// Result of one driven frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    pub tick: TickOutcome,
    /// Action the autopilot took before the tick
    pub action: Option<ActionOutcome>,
    /// Request another frame after rendering this one
    pub schedule_next: bool,
}

pub struct FrameDriver<C: Clock> {
    clock: C,
    scheduled: bool,
    idle_mode: bool,
    frames: u64,
}

impl<C: Clock> FrameDriver<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            scheduled: true,
            idle_mode: false,
            frames: 0,
        }
    }

    /// A frame is wanted
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Frames driven since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn set_idle_mode(&mut self, enabled: bool) {
        self.idle_mode = enabled;
    }

    pub fn toggle_idle_mode(&mut self) -> bool {
        self.idle_mode = !self.idle_mode;
        log::info!("Idle mode: {}", self.idle_mode);
        self.idle_mode
    }

    /// Run one step if a frame is scheduled
    pub fn frame(&mut self, state: &mut GameState, playfield: &Playfield, muted: bool) -> FrameOutcome {
        if !self.scheduled {
            return FrameOutcome::default();
        }

        let action = if self.idle_mode && autopilot::wants_jump(state, playfield) {
            Some(lifecycle::primary_action(state, playfield, muted))
        } else {
            None
        };

        let input = TickInput {
            now_ms: self.clock.now_ms(),
            playfield: *playfield,
        };
        let tick = tick(state, &input);
        self.frames += 1;
        self.scheduled = state.is_running();

        FrameOutcome {
            tick,
            action,
            schedule_next: self.scheduled,
        }
    }

    /// Dispatch the player's tap/key press
    ///
    /// A restart re-arms scheduling; the caller must then request a frame.
    pub fn primary_action(
        &mut self,
        state: &mut GameState,
        playfield: &Playfield,
        muted: bool,
    ) -> ActionOutcome {
        let outcome = lifecycle::primary_action(state, playfield, muted);
        if outcome == ActionOutcome::Restarted {
            self.scheduled = true;
        }
        outcome
    }

    /// Drive frames back to back until the run ends or `max_frames` pass
    ///
    /// `on_frame` sees the state after every frame; it is the place to
    /// advance a manual clock or render. Returns the number of frames run.
    pub fn run_headless(
        &mut self,
        state: &mut GameState,
        playfield: &Playfield,
        max_frames: u64,
        mut on_frame: impl FnMut(&GameState, &FrameOutcome),
    ) -> u64 {
        let mut ran = 0;
        while self.scheduled && ran < max_frames {
            let outcome = self.frame(state, playfield, true);
            on_frame(state, &outcome);
            ran += 1;
        }
        ran
    }
}
