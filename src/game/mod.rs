pub mod asteroid;
pub mod clock;
pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod projectile;
pub mod vec2;
pub mod world;

use crate::render::FrameView;
use clock::Stopwatch;
use config::GameConfig;
use log::info;
use player::Controls;
use world::World;

/// One play-through: the world plus the score clock and game-over latch.
pub struct Session {
    world: World,
    score_clock: Stopwatch,
    ended_at: Option<f64>,
}

impl Session {
    pub fn new(seed: u64, config: GameConfig, now: f64) -> Self {
        info!("starting session with seed {seed}");
        Self::with_world(World::new(seed, config, now), now)
    }

    pub fn from_entropy(config: GameConfig, now: f64) -> Self {
        info!("starting session from entropy");
        Self::with_world(World::from_entropy(config, now), now)
    }

    fn with_world(world: World, now: f64) -> Self {
        Self {
            world,
            score_clock: Stopwatch::started_at(now),
            ended_at: None,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn is_over(&self) -> bool {
        self.ended_at.is_some()
    }

    /// Runs one frame unless the game already ended. Returns the game-over state.
    pub fn tick(&mut self, controls: Controls, now: f64) -> bool {
        if self.is_over() {
            return true;
        }
        if self.world.update(controls, now) {
            self.ended_at = Some(now);
            info!("player destroyed, final score {}", self.score(now));
        }
        self.is_over()
    }

    /// Whole seconds survived; frozen once the game is over.
    pub fn score(&self, now: f64) -> u32 {
        let end = self.ended_at.unwrap_or(now);
        self.score_clock.elapsed(end).max(0.0).floor() as u32
    }

    pub fn frame(&self, now: f64) -> FrameView {
        FrameView::capture(&self.world, self.is_over(), self.score(now))
    }
}
