//! Ping Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use ping_pong::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
    use ping_pong::platform::{self, web};
    use ping_pong::renderer::RenderState;
    use ping_pong::settings::Settings;
    use ping_pong::sim::{MatchConfig, MatchState, TickInput, play_again, start_game, tick};

    /// Game instance holding all state
    struct Game {
        state: MatchState,
        settings: Settings,
        render_state: Option<RenderState>,
        input: TickInput,
        canvas: HtmlCanvasElement,
        game_over: Option<web::GameOverPanel>,
    }

    impl Game {
        fn new(config: MatchConfig, settings: Settings, canvas: HtmlCanvasElement) -> Self {
            Self {
                state: start_game(config),
                settings,
                render_state: None,
                input: TickInput::default(),
                canvas,
                game_over: None,
            }
        }

        /// Record a pointer position over the canvas
        fn pointer_moved(&mut self, client_x: f32) {
            let left = web::canvas_left(&self.canvas);
            self.input.paddle_x = Some(platform::paddle_x_from_pointer(client_x, left));
            if self.settings.hide_cursor {
                web::hide_cursor(&self.canvas);
            }
        }

        /// Replace the match wholesale. Returns false if no match was over.
        fn restart(&mut self) -> bool {
            let Some(state) = play_again(&self.state) else {
                return false;
            };
            if let Some(panel) = &self.game_over {
                panel.hide(&self.canvas);
            }
            self.state = state;
            self.input = TickInput::default();
            true
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Ping Pong starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = match document.get_element_by_id("canvas") {
            Some(el) => el.dyn_into()?,
            None => {
                let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
                canvas.set_id("canvas");
                document
                    .body()
                    .ok_or_else(|| JsValue::from_str("no body"))?
                    .append_child(&canvas)?;
                canvas
            }
        };
        canvas.set_width(SURFACE_WIDTH as u32);
        canvas.set_height(SURFACE_HEIGHT as u32);

        let settings = Settings::load();
        let profile = platform::startup_profile(&settings, web::viewport_width());
        let config = profile.match_config();

        let game = Rc::new(RefCell::new(Game::new(config, settings, canvas.clone())));

        let panel = {
            let game = game.clone();
            web::GameOverPanel::new(&document, move || {
                let restarted = game.borrow_mut().restart();
                if restarted {
                    request_animation_frame(game.clone());
                }
            })?
        };
        game.borrow_mut().game_over = Some(panel);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            SURFACE_WIDTH as u32,
            SURFACE_HEIGHT as u32,
        )
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone())?;

        request_animation_frame(game);

        log::info!("Ping Pong running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Mouse move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().pointer_moved(event.client_x() as f32);
            });
            canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().pointer_moved(touch.client_x() as f32);
                }
            });
            canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let winner = {
            let mut g = game.borrow_mut();
            let input = std::mem::take(&mut g.input);
            let outcome = tick(&mut g.state, &input);

            if let Some(ref mut render_state) = g.render_state {
                match render_state.render(&outcome.frame) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => render_state.reconfigure(),
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }

            outcome.winner
        };

        match winner {
            Some(winner) => {
                let g = game.borrow();
                if let Some(panel) = &g.game_over {
                    panel.show(&g.canvas, winner);
                }
            }
            None => {
                if !game.borrow().state.is_over() {
                    request_animation_frame(game);
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ping Pong (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    let (state, ticks) = run_headless(100_000);
    match state.winner() {
        Some(winner) => println!(
            "{} ({} - {}) after {} ticks",
            winner.banner(),
            state.scores.player,
            state.scores.computer,
            ticks
        ),
        None => println!(
            "No winner after {} ticks ({} - {})",
            ticks, state.scores.player, state.scores.computer
        ),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play a match with a scripted pointer that trails the ball slightly
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(max_ticks: u64) -> (ping_pong::MatchState, u64) {
    use ping_pong::consts::SURFACE_WIDTH;
    use ping_pong::platform::{centered_surface_left, paddle_x_from_pointer, startup_profile};
    use ping_pong::{Settings, TickInput, start_game, tick};

    let settings = Settings::load();
    let viewport = 1280.0;
    let left = centered_surface_left(viewport, SURFACE_WIDTH);
    let mut state = start_game(startup_profile(&settings, viewport).match_config());

    let mut ticks = 0;
    while !state.is_over() && ticks < max_ticks {
        // Aim a little off-center so rallies drift sideways
        let pointer = left + state.ball.pos.x - 12.0;
        let input = TickInput {
            paddle_x: Some(paddle_x_from_pointer(pointer, left)),
        };
        let outcome = tick(&mut state, &input);
        if let Some(side) = outcome.scored {
            log::debug!("{} scored at tick {}", side.label(), ticks);
        }
        ticks += 1;
    }

    (state, ticks)
}
