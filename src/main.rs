//! Ground Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, TouchEvent, Window};

    use ground_dash::Settings;
    use ground_dash::audio::{AudioManager, SoundEffect};
    use ground_dash::platform::BrowserClock;
    use ground_dash::renderer::{RenderState, scene};
    use ground_dash::sim::{ActionOutcome, FrameDriver, GameState, Playfield};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        driver: FrameDriver<BrowserClock>,
        playfield: Playfield,
        settings: Settings,
        render_state: Option<RenderState>,
        audio: AudioManager,
        canvas: HtmlCanvasElement,
        // HUD cache to avoid touching the DOM every frame
        shown_score: Option<u64>,
        shown_game_over: Option<bool>,
    }

    impl Game {
        fn new(seed: u64, settings: Settings, canvas: HtmlCanvasElement, playfield: Playfield) -> Self {
            let mut driver = FrameDriver::new(BrowserClock);
            driver.set_idle_mode(settings.idle_mode);
            Self {
                state: GameState::new(seed, settings.tuning.clone(), &playfield),
                driver,
                playfield,
                audio: AudioManager::new(&settings),
                settings,
                render_state: None,
                canvas,
                shown_score: None,
                shown_game_over: None,
            }
        }

        /// Run one frame; returns whether another should be requested
        fn frame(&mut self) -> bool {
            let playfield = self.playfield;
            let outcome = self
                .driver
                .frame(&mut self.state, &playfield, self.settings.muted);

            if let Some(ActionOutcome::Jumped { cue: true }) = outcome.action {
                self.audio.play(SoundEffect::Jump);
            }
            if outcome.tick.collided.is_some() {
                self.audio.play(SoundEffect::GameOver);
                self.audio.set_music_enabled(false);
            }
            self.audio.update_music();

            self.render();
            self.update_hud();
            outcome.schedule_next
        }

        /// Tap or Space; returns true if the frame loop must be restarted
        fn primary_action(&mut self) -> bool {
            self.audio.resume();
            let playfield = self.playfield;
            match self
                .driver
                .primary_action(&mut self.state, &playfield, self.settings.muted)
            {
                ActionOutcome::Jumped { cue } => {
                    if cue {
                        self.audio.play(SoundEffect::Jump);
                    }
                    false
                }
                ActionOutcome::Ignored => false,
                ActionOutcome::Restarted => {
                    self.audio.play(SoundEffect::Restart);
                    self.audio.set_music_enabled(true);
                    self.update_hud();
                    true
                }
            }
        }

        fn toggle_mute(&mut self) {
            let muted = self.settings.toggle_mute();
            self.audio.apply_settings(&self.settings);
            if let Some(btn) = document().and_then(|d| d.get_element_by_id("mute-btn")) {
                btn.set_text_content(Some(if muted { "🔇" } else { "🔊" }));
            }
            log::info!("Muted: {}", muted);
        }

        /// Recompute the playfield from the current viewport
        fn resize(&mut self) {
            let Some(window) = web_sys::window() else { return };
            let (width, height) = viewport_size(&window);
            let dpr = window.device_pixel_ratio();
            let physical_w = (width as f64 * dpr) as u32;
            let physical_h = (height as f64 * dpr) as u32;
            self.canvas.set_width(physical_w);
            self.canvas.set_height(physical_h);

            self.playfield = Playfield::new(width, height, &self.state.tuning);
            self.state.fit_to(&self.playfield);
            if let Some(render_state) = self.render_state.as_mut() {
                render_state.resize(physical_w, physical_h);
            }
            log::info!(
                "Viewport {}x{} (scale {:.2}, dpr {})",
                width,
                height,
                self.playfield.scale,
                dpr
            );

            // The loop is parked after a game over; draw the new size once
            if !self.driver.is_scheduled() {
                self.render();
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = scene(&self.state, &self.playfield);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices, &self.playfield) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let Some(document) = document() else { return };

            if self.shown_score != Some(self.state.score) {
                if let Some(el) = document.get_element_by_id("score") {
                    el.set_text_content(Some(&format!("Score: {}", self.state.score)));
                }
                self.shown_score = Some(self.state.score);
            }

            let game_over = !self.state.is_running();
            if self.shown_game_over != Some(game_over) {
                if let Some(el) = document.get_element_by_id("game-over") {
                    let _ = el.set_attribute("class", if game_over { "" } else { "hidden" });
                }
                self.shown_game_over = Some(game_over);
            }
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    /// Viewport size in CSS pixels
    fn viewport_size(window: &Window) -> (f32, f32) {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(480.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(320.0);
        (width as f32, height as f32)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Ground Dash starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };

        let settings = Settings::default();
        let seed = js_sys::Date::now() as u64;
        let (width, height) = viewport_size(&window);
        let playfield = Playfield::new(width, height, &settings.tuning);
        let game = Rc::new(RefCell::new(Game::new(seed, settings, canvas.clone(), playfield)));
        game.borrow_mut().resize();

        log::info!("Game initialized with seed: {}", seed);

        // Rendering is optional: without a GPU the DOM HUD still works
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });
        match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => {
                let adapter = instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await;
                match adapter {
                    Ok(adapter) => {
                        log::info!("Using adapter: {:?}", adapter.get_info().name);
                        let (w, h) = (canvas.width(), canvas.height());
                        match RenderState::new(surface, &adapter, w, h).await {
                            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
                            Err(e) => log::error!("Failed to create device: {}", e),
                        }
                    }
                    Err(e) => log::error!("No graphics adapter: {}", e),
                }
            }
            Err(e) => log::error!("Failed to create surface: {}", e),
        }

        setup_input_handlers(&document, game.clone());
        setup_buttons(&document, game.clone());
        setup_resize(&window, &document, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Ground Dash running!");
    }

    fn primary_action(game: &Rc<RefCell<Game>>) {
        let resume = game.borrow_mut().primary_action();
        if resume {
            request_animation_frame(game.clone());
        }
    }

    fn setup_input_handlers(document: &Document, game: Rc<RefCell<Game>>) {
        // Touch anywhere
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                primary_action(&game);
            });
            let _ = document
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.code().as_str() {
                    "Space" => {
                        event.prevent_default();
                        if !event.repeat() {
                            primary_action(&game);
                        }
                    }
                    "KeyI" => {
                        game.borrow_mut().driver.toggle_idle_mode();
                    }
                    "KeyM" => game.borrow_mut().toggle_mute(),
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        // Mute toggle
        if let Some(btn) = document.get_element_by_id("mute-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
                event.stop_propagation();
                game.borrow_mut().toggle_mute();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Fullscreen toggle
        if let Some(btn) = document.get_element_by_id("fullscreen-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
                event.stop_propagation();
                let Some(document) = document() else { return };
                if document.fullscreen_element().is_some() {
                    document.exit_fullscreen();
                } else if let Some(container) = document.get_element_by_id("game-container") {
                    if let Err(e) = container.request_fullscreen() {
                        log::warn!("Fullscreen request failed: {:?}", e);
                    }
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Buttons sit over the playfield; keep their taps from jumping
        for id in ["mute-btn", "fullscreen-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.stop_propagation();
                });
                let _ = btn.add_event_listener_with_callback(
                    "touchstart",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
        }
    }

    fn setup_resize(window: &Window, document: &Document, game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().resize();
            });
            let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().resize();
            });
            let _ = document.add_event_listener_with_callback(
                "fullscreenchange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let schedule_next = game.borrow_mut().frame();
        if schedule_next {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: the autopilot plays one run on a manual 60 Hz clock and the
/// final snapshot is printed as JSON.
///
/// Usage: `ground-dash [settings.json] [seed]`
#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use ground_dash::Settings;
    use ground_dash::consts::{HEADLESS_FRAME_LIMIT, NOMINAL_STEPS_PER_SECOND};
    use ground_dash::platform::{Clock, ManualClock};
    use ground_dash::sim::{FrameDriver, GameState, Playfield};

    env_logger::init();
    log::info!("Ground Dash (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::from_path(&path)?,
        None => Settings::default(),
    };
    let seed: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => 0x5EED,
    };

    let playfield = Playfield::new(960.0, 540.0, &settings.tuning);
    let mut state = GameState::new(seed, settings.tuning.clone(), &playfield);
    let clock = ManualClock::new(0.0);
    let mut driver = FrameDriver::new(clock.clone());
    driver.set_idle_mode(true);

    let frame_ms = 1000.0 / NOMINAL_STEPS_PER_SECOND as f64;
    let frames = driver.run_headless(&mut state, &playfield, HEADLESS_FRAME_LIMIT, |state, outcome| {
        clock.advance(frame_ms);
        if let Some(id) = outcome.tick.collided {
            log::info!("Hit obstacle {} at score {}", id, state.score);
        }
    });

    log::info!(
        "Finished after {} frames ({:.1}s simulated), running: {}",
        frames,
        clock.now_ms() / 1000.0,
        state.is_running()
    );
    println!("{}", serde_json::to_string_pretty(&state.snapshot(&playfield))?);
    Ok(())
}
