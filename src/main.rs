//! Penney's Game entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlButtonElement, HtmlElement, HtmlInputElement};

    use penneys_game::Settings;
    use penneys_game::platform::{Presenter, Scoreboard};
    use penneys_game::sim::{
        Coin, GameState, Pattern, SeededCoins, SpeedTier, TickOutcome, start, stop, tick,
    };

    const HEADS_BUTTONS: [&str; 3] = ["firstHeads", "secondHeads", "thirdHeads"];
    const TAILS_BUTTONS: [&str; 3] = ["firstTails", "secondTails", "thirdTails"];

    /// Game instance holding all state
    struct Game {
        state: GameState,
        source: SeededCoins,
        settings: Settings,
        /// Whether a frame callback is currently armed
        loop_armed: bool,
    }

    /// Writes the scoreboard into the page
    struct DomPresenter;

    impl Presenter for DomPresenter {
        fn present(&mut self, board: &Scoreboard) {
            set_text("playerSequence", &board.player_pattern);
            set_text("playerScore", &board.player_score.to_string());
            set_text("computerSequence", &board.computer_pattern);
            set_text("computerScore", &board.computer_score.to_string());
            set_text("sequenceWindow", board.history_display());
            if board.history.is_some() {
                if let Some(el) = document().get_element_by_id("sequenceWindow") {
                    el.set_scroll_left(el.scroll_width());
                }
            }
        }
    }

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = document().get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn input(id: &str) -> Option<HtmlInputElement> {
        document()
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    }

    fn button(id: &str) -> Option<HtmlButtonElement> {
        document()
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    }

    /// Pattern from the radio inputs (unchecked tails radio means heads)
    fn read_player_pattern() -> Pattern {
        let mut coins = [Coin::Heads; 3];
        for (coin, id) in coins.iter_mut().zip(TAILS_BUTTONS) {
            if input(id).map(|i| i.checked()).unwrap_or(false) {
                *coin = Coin::Tails;
            }
        }
        Pattern(coins)
    }

    fn read_speed() -> SpeedTier {
        if input("radioSlow").map(|i| i.checked()).unwrap_or(true) {
            SpeedTier::Slow
        } else {
            SpeedTier::Fast
        }
    }

    /// Reflect saved settings in the form
    fn apply_settings(settings: &Settings) {
        for (i, coin) in settings.pattern.coins().iter().enumerate() {
            let id = match coin {
                Coin::Heads => HEADS_BUTTONS[i],
                Coin::Tails => TAILS_BUTTONS[i],
            };
            if let Some(el) = input(id) {
                el.set_checked(true);
            }
        }
        let speed_id = match settings.speed {
            SpeedTier::Slow => "radioSlow",
            SpeedTier::Fast => "radioFast",
        };
        if let Some(el) = input(speed_id) {
            el.set_checked(true);
        }
    }

    fn set_controls_running(running: bool) {
        for id in HEADS_BUTTONS.iter().chain(TAILS_BUTTONS.iter()) {
            if let Some(el) = input(id) {
                el.set_disabled(running);
            }
        }
        if let Some(go) = button("goButton") {
            go.set_disabled(running);
        }
        if let Some(stop) = button("stopButton") {
            stop.set_disabled(!running);
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

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            // Speed radios stay live while running
            g.state.set_speed(read_speed());

            let Game { state, source, .. } = &mut *g;
            match tick(state, source, time) {
                TickOutcome::Idle => {
                    g.loop_armed = false;
                    return;
                }
                TickOutcome::Skipped => {}
                TickOutcome::Stepped(_) => {
                    if let Some(board) = Scoreboard::from_state(&g.state) {
                        DomPresenter.present(&board);
                    }
                }
            }
        }

        request_animation_frame(game);
    }

    fn setup_go_button(game: Rc<RefCell<Game>>) {
        if let Some(btn) = button("goButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let pattern = read_player_pattern();
                let speed = read_speed();
                let rearm = {
                    let mut g = game.borrow_mut();
                    if !start(&mut g.state, pattern, speed, now_ms()) {
                        return;
                    }
                    g.source = g
                        .settings
                        .seed
                        .map(SeededCoins::new)
                        .unwrap_or_else(SeededCoins::from_entropy);
                    g.settings.pattern = pattern;
                    g.settings.speed = speed;
                    g.settings.save();

                    if let Some(reporting) = document()
                        .get_element_by_id("reporting")
                        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                    {
                        reporting.set_hidden(false);
                    }
                    if let Some(board) = Scoreboard::from_state(&g.state) {
                        DomPresenter.present(&board);
                    }
                    set_controls_running(true);

                    let rearm = !g.loop_armed;
                    g.loop_armed = true;
                    rearm
                };
                // A callback still pending from a previous run picks the new game up
                if rearm {
                    request_animation_frame(game.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_stop_button(game: Rc<RefCell<Game>>) {
        if let Some(btn) = button("stopButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if stop(&mut game.borrow_mut().state) {
                    set_controls_running(false);
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        log::info!("Penney's Game (web) starting...");

        let settings = Settings::load();
        apply_settings(&settings);
        set_controls_running(false);

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(),
            source: SeededCoins::from_entropy(),
            settings,
            loop_armed: false,
        }));

        setup_go_button(game.clone());
        setup_stop_button(game);
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
mod native_game {
    use std::time::{Duration, Instant};

    use penneys_game::Settings;
    use penneys_game::platform::native::{SystemClock, run_native, run_races};
    use penneys_game::platform::{Presenter, Scoreboard};
    use penneys_game::sim::{GameState, Pattern, SeededCoins, SpeedTier, start};

    pub struct Args {
        pattern: Option<Pattern>,
        speed: Option<SpeedTier>,
        seed: Option<u64>,
        duration_secs: Option<f64>,
        races: Option<u32>,
    }

    fn usage_exit(msg: &str) -> ! {
        eprintln!("{msg}");
        eprintln!(
            "Usage: penneys-game [--pattern HTH] [--speed slow|fast] [--seed N] \
             [--duration-secs S] [--races N]"
        );
        std::process::exit(1);
    }

    fn value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
        args.get(i)
            .map(String::as_str)
            .unwrap_or_else(|| usage_exit(&format!("Missing value for {flag}")))
    }

    pub fn parse_args() -> Args {
        let args: Vec<String> = std::env::args().collect();
        let mut parsed = Args {
            pattern: None,
            speed: None,
            seed: None,
            duration_secs: None,
            races: None,
        };

        let mut i = 1;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--pattern" => {
                    i += 1;
                    let v = value(&args, i, flag);
                    parsed.pattern = Some(v.parse().unwrap_or_else(|e| usage_exit(&format!("{e}"))));
                }
                "--speed" => {
                    i += 1;
                    let v = value(&args, i, flag);
                    parsed.speed = Some(
                        SpeedTier::from_str(v)
                            .unwrap_or_else(|| usage_exit(&format!("Invalid --speed value: {v}"))),
                    );
                }
                "--seed" => {
                    i += 1;
                    let v = value(&args, i, flag);
                    parsed.seed = Some(
                        v.parse()
                            .unwrap_or_else(|_| usage_exit(&format!("Invalid --seed value: {v}"))),
                    );
                }
                "--duration-secs" => {
                    i += 1;
                    let v = value(&args, i, flag);
                    parsed.duration_secs = Some(
                        v.parse()
                            .ok()
                            .filter(|s: &f64| s.is_finite() && *s >= 0.0)
                            .unwrap_or_else(|| {
                                usage_exit(&format!("Invalid --duration-secs value: {v}"))
                            }),
                    );
                }
                "--races" => {
                    i += 1;
                    let v = value(&args, i, flag);
                    parsed.races = Some(
                        v.parse()
                            .unwrap_or_else(|_| usage_exit(&format!("Invalid --races value: {v}"))),
                    );
                }
                other => usage_exit(&format!("Unknown argument: {other}")),
            }
            i += 1;
        }
        parsed
    }

    /// Prints one scoreboard line per step
    struct TerminalPresenter;

    impl Presenter for TerminalPresenter {
        fn present(&mut self, board: &Scoreboard) {
            println!(
                "Player {} {:>5} | Computer {} {:>5} | {}",
                board.player_pattern,
                board.player_score,
                board.computer_pattern,
                board.computer_score,
                board.history_display()
            );
        }
    }

    pub fn run(args: Args) {
        let mut settings = Settings::load();
        if let Some(pattern) = args.pattern {
            settings.pattern = pattern;
        }
        if let Some(speed) = args.speed {
            settings.speed = speed;
        }
        if args.seed.is_some() {
            settings.seed = args.seed;
        }

        let mut source = settings
            .seed
            .map(SeededCoins::new)
            .unwrap_or_else(SeededCoins::from_entropy);
        log::info!("Toss seed: {}", source.seed());

        let mut state = GameState::new();
        let clock = SystemClock::new();
        start(&mut state, settings.pattern, settings.speed, 0.0);

        if let Some(races) = args.races {
            run_races(&mut state, &mut source, races);
            report_races(&state);
            return;
        }

        let deadline = args
            .duration_secs
            .map(|s| Instant::now() + Duration::from_secs_f64(s));
        run_native(
            &mut state,
            &mut source,
            &clock,
            &mut TerminalPresenter,
            Duration::from_millis(settings.frame_ms),
            |_| deadline.is_none_or(|d| Instant::now() < d),
        );
        report_races(&state);
    }

    fn report_races(state: &GameState) {
        let (Some(player), Some(computer)) = (state.player, state.computer) else {
            return;
        };
        let total = state.races().max(1) as f64;
        println!(
            "Player   {}: {} wins ({:.1}%)",
            player.pattern,
            player.score,
            100.0 * player.score as f64 / total
        );
        println!(
            "Computer {}: {} wins ({:.1}%)",
            computer.pattern,
            computer.score,
            100.0 * computer.score as f64 / total
        );
        println!("Tosses: {}", state.tosses);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Penney's Game (native) starting...");
    let args = native_game::parse_args();
    native_game::run(args);
}
