//! Lane Rush entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, KeyboardEvent, TouchEvent};

    use lane_rush::input::{Direction, InputIntents};
    use lane_rush::renderer::Scene;
    use lane_rush::renderer::dom::DomScene;
    use lane_rush::sim::{GamePhase, GameState, TickInput, Viewport, tick};
    use lane_rush::{HighScore, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        scene: DomScene,
        intents: InputIntents,
        highscore: HighScore,
        /// One-shot pause toggle consumed by the next tick
        pause_queued: bool,
        /// Touch-start coordinates for swipe classification
        touch_start: (f32, f32),
        /// Previous touch-end timestamp, for double-tap zoom suppression
        last_touch_end: f64,
        /// Track phase for overlay/highscore transitions
        last_phase: GamePhase,
    }

    impl Game {
        fn new(seed: u64, viewport: Viewport, tuning: Tuning, scene: DomScene) -> Self {
            Self {
                state: GameState::new(seed, viewport, tuning),
                scene,
                intents: InputIntents::new(),
                highscore: HighScore::load(),
                pause_queued: false,
                touch_start: (0.0, 0.0),
                last_touch_end: 0.0,
                last_phase: GamePhase::Idle,
            }
        }

        /// (Re)start a run against the current play-area geometry
        fn start_run(&mut self) {
            if let Some(viewport) = measure_game_area() {
                self.state.viewport = viewport;
            }
            self.intents.clear();
            self.pause_queued = false;
            self.state.start();
            self.scene.reset(&self.state);
            self.last_phase = GamePhase::Running;

            set_class("start-btn", "hidden");
            set_class("pause-screen", "hidden");
            set_class("game-over-screen", "hidden");
            set_class("game-area", "");
        }

        /// Sample intents and advance the simulation by one tick
        fn update(&mut self, now_ms: f64) {
            let input = TickInput {
                left: self.intents.held(Direction::Left, now_ms),
                right: self.intents.held(Direction::Right, now_ms),
                pause: std::mem::take(&mut self.pause_queued),
            };
            tick(&mut self.state, &input);
        }

        fn render(&mut self) {
            self.scene.draw(&self.state);
        }

        /// Live score/speed label, updated every running tick
        fn update_hud(&self) {
            if !self.state.is_running() {
                return;
            }
            set_text(
                "score",
                &format!(
                    "Score: {} | Speed: {}km/h",
                    self.state.final_score(),
                    self.state.player.display_speed
                ),
            );
        }

        /// React to phase transitions: overlays, fade-out, high score
        fn watch_transitions(&mut self) {
            let phase = self.state.phase;
            if phase == self.last_phase {
                return;
            }

            match phase {
                GamePhase::Paused => {
                    set_text(
                        "pause-score",
                        &format!("Score: {}", self.state.final_score()),
                    );
                    set_class("pause-screen", "");
                }
                GamePhase::Running => {
                    set_class("pause-screen", "hidden");
                }
                GamePhase::GameOver => self.finish_run(),
                GamePhase::Idle => {}
            }

            self.last_phase = phase;
        }

        /// Game over: settle the high score and surface the final stats
        fn finish_run(&mut self) {
            let final_score = self.state.final_score();
            let final_speed = self.state.player.display_speed;

            if self.highscore.record(final_score) {
                self.highscore.save();
                set_text(
                    "game-over-score",
                    &format!("New High Score! Score: {final_score}"),
                );
            } else {
                set_text("game-over-score", &format!("Score: {final_score}"));
            }
            set_text("game-over-speed", &format!("Speed: {final_speed}km/h"));

            set_class("game-over-screen", "");
            set_class("game-area", "fadeOut");
        }
    }

    fn document() -> Document {
        web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
    }

    /// Missing HUD/overlay nodes are skipped, never fatal
    fn set_text(id: &str, text: &str) {
        if let Some(el) = document().get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_class(id: &str, class: &str) {
        if let Some(el) = document().get_element_by_id(id) {
            let _ = el.set_attribute("class", class);
        }
    }

    fn measure_game_area() -> Option<Viewport> {
        let area = document().get_element_by_id("game-area")?;
        let rect = area.get_bounding_client_rect();
        Some(Viewport {
            width: rect.width() as f32,
            height: rect.height() as f32,
        })
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Lane Rush starting...");

        let document = document();
        let area = document
            .get_element_by_id("game-area")
            .expect("no game area");

        let seed = js_sys::Date::now() as u64;
        let tuning = Tuning::load();
        let viewport = measure_game_area().unwrap_or(Viewport {
            width: 400.0,
            height: 600.0,
        });
        let scene = DomScene::new(document, area);

        let game = Rc::new(RefCell::new(Game::new(seed, viewport, tuning, scene)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_buttons(game.clone());
        setup_auto_pause(game.clone());

        request_animation_frame(game);

        log::info!("Lane Rush running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = document();

        // Keyboard held state; unrecognized keys fall through untouched
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => {
                        event.prevent_default();
                        g.intents.key_down(Direction::Left);
                    }
                    "ArrowRight" => {
                        event.prevent_default();
                        g.intents.key_down(Direction::Right);
                    }
                    " " => {
                        event.prevent_default();
                        g.pause_queued = true;
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.intents.key_up(Direction::Left),
                    "ArrowRight" => g.intents.key_up(Direction::Right),
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start: remember where the gesture began
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().touch_start =
                        (touch.client_x() as f32, touch.client_y() as f32);
                }
            });
            let _ = document
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end: classify the gesture as a swipe pulse, and swallow
        // rapid double taps so mobile browsers don't zoom
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let now = js_sys::Date::now();
                let mut g = game.borrow_mut();
                if now - g.last_touch_end <= 300.0 {
                    event.prevent_default();
                }
                g.last_touch_end = now;

                if let Some(touch) = event.changed_touches().get(0) {
                    let delta_x = touch.client_x() as f32 - g.touch_start.0;
                    g.intents.swipe(delta_x, now);
                }
            });
            let _ = document
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // No long-press context menu over the road
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                event.prevent_default();
            });
            let _ = document
                .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = document();

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().start_run();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("play-again-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().start_run();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("resume-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().pause_queued = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = document();

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    if g.state.is_running() {
                        g.pause_queued = true;
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.state.is_running() {
                    g.pause_queued = true;
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, _time: f64) {
        {
            let mut g = game.borrow_mut();
            let now_ms = js_sys::Date::now();

            g.update(now_ms);
            g.render();
            g.update_hud();
            g.watch_transitions();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lane_rush::Tuning;
    use lane_rush::sim::{GameState, TickInput, Viewport, tick};

    env_logger::init();
    log::info!("Lane Rush (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Smoke-run the simulation: a clean 500-tick run crosses the first
    // speed checkpoint
    let mut state = GameState::new(
        42,
        Viewport {
            width: 400.0,
            height: 2000.0,
        },
        Tuning::default(),
    );
    state.start();

    let input = TickInput::default();
    for _ in 0..500 {
        tick(&mut state, &input);
    }

    println!(
        "500 ticks: score {}, speed {}km/h, phase {:?}",
        state.final_score(),
        state.player.display_speed,
        state.phase
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
