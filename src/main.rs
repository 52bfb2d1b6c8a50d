//! Gravity Flip entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlInputElement, KeyboardEvent, MouseEvent};

    use gravity_flip::Settings;
    use gravity_flip::commentary;
    use gravity_flip::renderer::SceneRenderer;
    use gravity_flip::scores::{LocalStore, ScoreBoard};
    use gravity_flip::sim::{GameEvent, GamePhase, Simulation, TickInput, run_frame};

    /// Game instance holding all state
    struct Game {
        sim: Simulation,
        input: TickInput,
        renderer: SceneRenderer,
        scores: ScoreBoard,
        settings: Settings,
    }

    impl Game {
        fn new(seed: u64, renderer: SceneRenderer) -> Self {
            Self {
                sim: Simulation::new(seed),
                input: TickInput::default(),
                renderer,
                scores: ScoreBoard::new(Box::new(LocalStore)),
                settings: Settings::load(),
            }
        }

        /// One animation frame: apply pending input, tick once, draw.
        fn frame(&mut self) {
            let input = self.input;
            // Clear one-shot inputs after processing
            self.input = TickInput::default();

            if let Some(GameEvent::GameOver { score }) = run_frame(&mut self.sim, &input) {
                self.on_game_over(score);
            }

            self.renderer.render(&self.sim.snapshot());
            self.update_hud();
        }

        /// Fires exactly once per run, on the collision tick.
        fn on_game_over(&mut self, score: u64) {
            let label = self.settings.label().to_string();
            self.scores.report(score, &label);
            update_high_score_labels(&self.scores);

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("final-score") {
                el.set_text_content(Some(&score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("ai-comment") {
                el.set_text_content(Some("Summoning commentary..."));
            }

            // Fire-and-forget: the overlay is fully usable before this lands
            commentary::fetch_comment(&self.settings.commentary_api_key, score, |comment| {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    if let Some(el) = document.get_element_by_id("ai-comment") {
                        el.set_text_content(Some(&comment));
                    }
                }
            });
        }

        /// Sync HUD text and overlay visibility with the current phase
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&format!("Score: {}", self.sim.score)));
            }

            set_hidden(&document, "start-screen", self.sim.phase != GamePhase::Inactive);
            set_hidden(
                &document,
                "game-over-screen",
                self.sim.phase != GamePhase::GameOver,
            );
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let classes = el.class_list();
            let _ = if hidden {
                classes.add_1("hidden")
            } else {
                classes.remove_1("hidden")
            };
        }
    }

    fn update_high_score_labels(scores: &ScoreBoard) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Ok(nodes) = document.query_selector_all(".high-score-display") {
            let text = format!(
                "{}: {}",
                scores.holder().unwrap_or("Player 1"),
                scores.best()
            );
            for i in 0..nodes.length() {
                if let Some(node) = nodes.item(i) {
                    node.set_text_content(Some(&text));
                }
            }
        }
    }

    fn input_value(document: &Document, id: &str) -> Option<String> {
        document
            .get_element_by_id(id)?
            .dyn_into::<HtmlInputElement>()
            .ok()
            .map(|el| el.value())
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Gravity Flip starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let renderer = SceneRenderer::new(&canvas).expect("2d context");
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, renderer)));

        log::info!("Game initialized with seed: {seed}");

        update_high_score_labels(&game.borrow().scores);
        prefill_settings_inputs(&document, &game.borrow().settings);

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());

        request_animation_frame(game);

        log::info!("Gravity Flip running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard: Space flips, Escape returns to the start screen
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.code().as_str() {
                    "Space" => {
                        game.borrow_mut().input.flip = true;
                        event.prevent_default();
                    }
                    "Escape" => game.borrow_mut().input.reset = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer: press anywhere on the canvas flips
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().input.flip = true;
                event.prevent_default();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Start reads the player name, then begins a run
        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    if let Some(name) = input_value(&document, "player-name-input") {
                        g.settings.player_name = name;
                        g.settings.save();
                    }
                }
                g.input.start = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Restart goes straight into a fresh run
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.start = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Settings modal
        if let Some(btn) = document.get_element_by_id("settings-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    set_hidden(&document, "settings-modal", false);
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("close-settings-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    if let Some(name) = input_value(&document, "player-name-input") {
                        g.settings.player_name = name;
                    }
                    if let Some(key) = input_value(&document, "api-key-input") {
                        g.settings.commentary_api_key = key;
                    }
                    g.settings.save();
                    set_hidden(&document, "settings-modal", true);
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn prefill_settings_inputs(document: &Document, settings: &Settings) {
        if let Some(el) = document.get_element_by_id("player-name-input") {
            if let Ok(input) = el.dyn_into::<HtmlInputElement>() {
                input.set_value(&settings.player_name);
            }
        }
        if let Some(el) = document.get_element_by_id("api-key-input") {
            if let Ok(input) = el.dyn_into::<HtmlInputElement>() {
                input.set_value(&settings.commentary_api_key);
            }
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use gravity_flip::commentary;
    use gravity_flip::sim::{GameEvent, Simulation, TickInput, run_frame};

    env_logger::init();
    log::info!("Gravity Flip (native) starting...");

    // Headless smoke run: flip every 40 frames until the first collision
    let mut sim = Simulation::new(7);
    sim.start();
    let mut ended = None;
    for frame in 0..10_000u32 {
        let input = TickInput {
            flip: frame % 40 == 39,
            ..Default::default()
        };
        if let Some(GameEvent::GameOver { score }) = run_frame(&mut sim, &input) {
            ended = Some(score);
            break;
        }
    }

    match ended {
        Some(score) => {
            println!("Run over: score {score} after {} frames", sim.frame_count);
            println!("{}", commentary::fallback_line(&mut rand::rng()));
        }
        None => println!("Survived the whole smoke run - score {}", sim.score),
    }
}
