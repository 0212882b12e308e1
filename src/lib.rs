use std::cell::RefCell;
use wasm_bindgen::prelude::*;

pub mod game;
mod logging;
pub mod render;

use game::config::GameConfig;
use game::player::Controls;
use game::Session;
use log::LevelFilter;

thread_local! {
    static GAME: RefCell<Option<Session>> = RefCell::new(None);
}

const NOT_INITIALIZED: &str = "game not initialized";

fn with_game<R>(f: impl FnOnce(&Session) -> R) -> Result<R, &'static str> {
    GAME.with(|cell| match cell.borrow().as_ref() {
        Some(game) => Ok(f(game)),
        None => Err(NOT_INITIALIZED),
    })
}

fn with_game_mut<R>(f: impl FnOnce(&mut Session) -> R) -> Result<R, &'static str> {
    GAME.with(|cell| {
        let mut opt = cell.borrow_mut();
        match opt.as_mut() {
            Some(game) => Ok(f(game)),
            None => Err(NOT_INITIALIZED),
        }
    })
}

fn install(start: impl FnOnce() -> Session) {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init_default();

    let session = start();
    GAME.with(|g| {
        *g.borrow_mut() = Some(session);
    });
}

/// `now` is wall-clock seconds (e.g. `performance.now() / 1000`).
#[wasm_bindgen]
pub fn init_game(seed: u64, now: f64) {
    install(|| Session::new(seed, GameConfig::default(), now));
}

#[wasm_bindgen]
pub fn init_game_from_entropy(now: f64) {
    install(|| Session::from_entropy(GameConfig::default(), now));
}

/// Returns "ok", or the reason the config was rejected.
#[wasm_bindgen]
pub fn init_game_with_config(seed: u64, config_json: &str, now: f64) -> String {
    match GameConfig::from_json(config_json) {
        Ok(config) => {
            install(|| Session::new(seed, config, now));
            "ok".to_string()
        }
        Err(e) => e.to_string(),
    }
}

/// Accepts `off`, `error`, `warn`, `info`, `debug` or `trace`.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    match level.parse::<LevelFilter>() {
        Ok(filter) => {
            logging::set_level(filter);
            true
        }
        Err(_) => false,
    }
}

/// Bits: 1 rotate left, 2 rotate right, 4 thrust, 8 shoot. Returns true on game over.
#[wasm_bindgen]
pub fn tick(controls: u8, now: f64) -> bool {
    with_game_mut(|game| game.tick(Controls::from_bits(controls), now)).unwrap_or(true)
}

#[wasm_bindgen]
pub fn frame_json(now: f64) -> String {
    match with_game(|game| game.frame(now).to_json()) {
        Ok(v) => v,
        Err(e) => e.to_string(),
    }
}

#[wasm_bindgen]
pub fn arena_json() -> String {
    match with_game(|game| render::arena_json(game.world())) {
        Ok(v) => v,
        Err(e) => e.to_string(),
    }
}

/// Prints and returns the final score in whole seconds.
#[wasm_bindgen]
pub fn final_score(now: f64) -> u32 {
    let score = with_game(|game| game.score(now)).unwrap_or(0);
    web_sys::console::log_1(&format!("Score : {}", score).into());
    score
}
