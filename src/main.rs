//! Jump Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, PointerEvent};

    use jump_runner::hud::{HIDDEN, HudView, POP, TapAction, with_class_token};
    use jump_runner::renderer::{RenderError, RenderState};
    use jump_runner::settings::Settings;
    use jump_runner::sim::{Engine, FrameDriver, autopilot};

    fn js_err(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    /// Game instance holding all state
    struct Game {
        engine: Engine,
        driver: FrameDriver,
        settings: Settings,
        render_state: Option<RenderState>,
        /// A requestAnimationFrame callback is outstanding
        frame_pending: bool,
        /// Autopilot plays the game
        demo_mode: bool,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            Self {
                engine: Engine::new(seed),
                driver: FrameDriver::new(),
                settings,
                render_state: None,
                frame_pending: false,
                demo_mode: false,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Start a run. Returns true if the caller must schedule a frame.
        fn start(&mut self) -> bool {
            self.engine.start();
            self.driver.arm();
            self.redraw();
            let needs_frame = !self.frame_pending;
            self.frame_pending = true;
            needs_frame
        }

        fn reset(&mut self) {
            self.engine.reset();
            self.driver.arm();
            self.redraw();
        }

        fn jump(&mut self) {
            if self.engine.jump() {
                log::debug!("Jump at score {}", self.engine.state().score);
            }
        }

        /// Run simulation ticks for this frame. Returns whether to keep going.
        fn update(&mut self, time: f64) -> bool {
            if self.demo_mode && autopilot::should_jump(self.engine.state()) {
                self.engine.jump();
            }
            let report = self.driver.advance(&mut self.engine, time);

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }

            report.keep_running
        }

        /// Render the current frame
        fn render(&mut self) {
            let state = self.engine.state();
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(state) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        fn redraw(&mut self) {
            self.render();
            self.update_hud();
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let state = self.engine.state();
            let view = HudView::new(state, &self.settings);

            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&view.score.to_string()));
            }

            set_class_token(&document, "hud-fps", HIDDEN, !view.show_fps);
            if let Some(el) = document.query_selector("#hud-fps .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.fps.to_string()));
            }

            set_class_token(&document, "start-prompt", HIDDEN, !view.start_prompt);

            set_class_token(&document, "game-over", HIDDEN, !view.game_over);
            if view.game_over {
                if let Some(el) = document.get_element_by_id("final-score") {
                    el.set_text_content(Some(&view.score.to_string()));
                }
            }

            // "pop" animates once as the panel appears
            set_class_token(&document, "secret-panel", HIDDEN, !view.secret_panel);
            set_class_token(&document, "secret-panel", POP, view.secret_panel);
            if let Some(el) = document.get_element_by_id("secret-code") {
                el.set_text_content(state.secret_code.as_deref());
            }
        }

        /// Match the surface to the canvas' current CSS size
        fn fit_canvas(&mut self, canvas: &HtmlCanvasElement) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let dpr = window.device_pixel_ratio();
            let width = (canvas.client_width() as f64 * dpr) as u32;
            let height = (canvas.client_height() as f64 * dpr) as u32;
            canvas.set_width(width);
            canvas.set_height(height);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height);
            }
            self.redraw();
        }

        fn toggle_fps(&mut self) {
            let shown = self.settings.toggle_fps();
            self.settings.save();
            log::info!("FPS counter: {}", shown);
            self.update_hud();
        }
    }

    /// Add or remove one class token, leaving layout classes alone
    fn set_class_token(document: &web_sys::Document, id: &str, token: &str, present: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let class = with_class_token(&el.class_name(), token, present);
            el.set_class_name(&class);
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&js_err(e));
        }

        log::info!("Jump Runner starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        set_class_token(&document, "loading", HIDDEN, true);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or(js_sys::Date::now() as u64);
        let palette = settings.palette();
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU (WebGL fallback)
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| js_err(RenderError::from(e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| js_err(RenderError::from(e)))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, palette)
            .await
            .map_err(js_err)?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());

        // Idle screen until the player starts
        game.borrow_mut().redraw();

        log::info!("Jump Runner ready!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                let schedule = {
                    let mut g = game.borrow_mut();
                    if g.settings.is_jump_key(&key) {
                        event.prevent_default();
                        g.jump();
                        false
                    } else if g.settings.is_start_key(&key) {
                        !g.engine.state().is_active() && g.start()
                    } else if g.settings.is_reset_key(&key) {
                        g.reset();
                        false
                    } else if key == "i" || key == "I" {
                        g.demo_mode = !g.demo_mode;
                        log::info!("Demo mode: {}", g.demo_mode);
                        false
                    } else if key == "f" || key == "F" {
                        g.toggle_fps();
                        false
                    } else {
                        false
                    }
                };
                if schedule {
                    request_animation_frame(game.clone());
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Tap / click on the scene jumps mid-run, otherwise starts one
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                let schedule = {
                    let mut g = game.borrow_mut();
                    match TapAction::for_state(g.engine.state()) {
                        TapAction::Jump => {
                            g.jump();
                            false
                        }
                        TapAction::Start => g.start(),
                    }
                };
                if schedule {
                    request_animation_frame(game.clone());
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window resize
        {
            let game = game.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                game.borrow_mut().fit_canvas(&canvas);
            });
            let _ =
                window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        // Start (idle screen) and restart (game over panel) both begin a fresh run
        for id in ["start-btn", "restart-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    let schedule = game.borrow_mut().start();
                    if schedule {
                        request_animation_frame(game.clone());
                    }
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();
            let keep_running = g.update(time);
            g.redraw();
            g.frame_pending = keep_running;
            keep_running
        };

        // Game over or reset: drop the frame subscription until the next start
        if keep_running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        web_sys::console::error_1(&e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run: the autopilot plays one seeded game
#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use jump_runner::Settings;
    use jump_runner::sim::{Engine, TickOutcome, autopilot};

    env_logger::init();
    log::info!("Jump Runner (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            eprintln!("invalid seed: {}", e);
            return std::process::ExitCode::from(2);
        }
        None => Settings::load().seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        }),
    };
    let max_ticks = match args.next().map(|s| s.parse::<u32>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            eprintln!("invalid tick count: {}", e);
            return std::process::ExitCode::from(2);
        }
        None => 5_000,
    };

    let mut engine = Engine::new(seed);
    engine.start();
    log::info!("Seed {}, running up to {} ticks", seed, max_ticks);

    for _ in 0..max_ticks {
        if autopilot::should_jump(engine.state()) {
            engine.jump();
        }
        match engine.tick() {
            TickOutcome::Collided { .. } => break,
            TickOutcome::Revealed => {
                println!("Secret code: {}", engine.state().secret_code.as_deref().unwrap_or(""));
            }
            _ => {}
        }
        if engine.state().score % 1000 == 0 {
            log::info!("Score {}", engine.state().score);
        }
    }

    let state = engine.state();
    println!(
        "Final score: {}{}",
        state.score,
        if state.game_over { " (crashed)" } else { "" }
    );
    std::process::ExitCode::SUCCESS
}
