//! Audio system using Web Audio API
//!
//! Procedurally generated sound - no external files needed. Every call is
//! best effort: if the context is missing or a node fails, the sound is
//! simply skipped.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player left the ground
    Jump,
    /// Player hit an obstacle
    GameOver,
    /// New run started
    Restart,
}

/// Background loop: C minor arpeggio, one note per step (Hz, 0 = rest)
const MUSIC_NOTES: [f32; 16] = [
    261.63, 311.13, 392.00, 311.13, 261.63, 311.13, 392.00, 466.16, 233.08, 293.66, 349.23,
    293.66, 233.08, 293.66, 349.23, 0.0,
];
/// Seconds per music step
const MUSIC_STEP: f64 = 0.18;
/// Schedule notes this far ahead of the audio clock
const MUSIC_LOOKAHEAD: f64 = 0.1;

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    /// Effective volumes (master and mute already applied)
    sfx_volume: f32,
    music_volume: f32,
    music_enabled: bool,
    next_note_time: f64,
    note_index: usize,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        let mut audio = Self {
            ctx,
            sfx_volume: 0.0,
            music_volume: 0.0,
            music_enabled: true,
            next_note_time: 0.0,
            note_index: 0,
        };
        audio.apply_settings(settings);
        audio
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Pick up volume and mute changes
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.sfx_volume = settings.effective_sfx_volume();
        self.music_volume = settings.effective_music_volume();
    }

    /// Pause or resume the background loop
    pub fn set_music_enabled(&mut self, enabled: bool) {
        self.music_enabled = enabled;
    }

    fn music_gain(&self) -> f32 {
        if self.music_enabled {
            self.music_volume
        } else {
            0.0
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.sfx_volume;
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::Jump => self.play_jump(ctx, vol),
            SoundEffect::GameOver => self.play_game_over(ctx, vol),
            SoundEffect::Restart => self.play_restart(ctx, vol),
        }
    }

    /// Keep the background loop fed; call once per frame
    pub fn update_music(&mut self) {
        let vol = self.music_gain();
        let Some(ctx) = self.ctx.clone() else { return };
        if vol <= 0.0 || ctx.state() != web_sys::AudioContextState::Running {
            return;
        }

        let now = ctx.current_time();
        // Fell behind (tab in background, muted): restart from now
        if self.next_note_time < now {
            self.next_note_time = now;
        }
        while self.next_note_time < now + MUSIC_LOOKAHEAD {
            let freq = MUSIC_NOTES[self.note_index];
            if freq > 0.0 {
                self.play_music_note(&ctx, freq, self.next_note_time, vol);
            }
            self.note_index = (self.note_index + 1) % MUSIC_NOTES.len();
            self.next_note_time += MUSIC_STEP;
        }
    }

    // === Sound generators ===

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Jump - quick rising square blip
    fn play_jump(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 330.0, OscillatorType::Square) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.25, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.15)
            .ok();
        osc.frequency().set_value_at_time(330.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(880.0, t + 0.12)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.16).ok();
    }

    /// Game over - falling sawtooth
    fn play_game_over(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 440.0, OscillatorType::Sawtooth) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.6)
            .ok();
        osc.frequency().set_value_at_time(440.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(80.0, t + 0.55)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.65).ok();
    }

    /// Restart - two short ascending notes
    fn play_restart(&self, ctx: &AudioContext, vol: f32) {
        let t = ctx.current_time();
        for (i, freq) in [523.25_f32, 783.99].into_iter().enumerate() {
            let Some((osc, gain)) = self.create_osc(ctx, freq, OscillatorType::Triangle) else {
                return;
            };
            let start = t + i as f64 * 0.08;
            gain.gain().set_value_at_time(0.0, t).ok();
            gain.gain().set_value_at_time(vol * 0.3, start).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, start + 0.1)
                .ok();
            osc.start_with_when(start).ok();
            osc.stop_with_when(start + 0.12).ok();
        }
    }

    /// One soft square note of the background loop
    fn play_music_note(&self, ctx: &AudioContext, freq: f32, at: f64, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, freq, OscillatorType::Square) else {
            return;
        };
        gain.gain().set_value_at_time(vol * 0.06, at).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.001, at + MUSIC_STEP * 0.9)
            .ok();
        osc.start_with_when(at).ok();
        osc.stop_with_when(at + MUSIC_STEP).ok();
    }
}
