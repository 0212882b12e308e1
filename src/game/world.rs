use crate::game::asteroid::{Asteroid, AsteroidSize};
use crate::game::clock::Stopwatch;
use crate::game::config::GameConfig;
use crate::game::entity::{is_colliding, render_all, wrap, Renderer, Simulated};
use crate::game::player::{Controls, Player};
use crate::game::projectile::Bullet;
use crate::game::vec2::Vec2;
use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f32::consts::TAU;

pub struct World {
    dimensions: Vec2,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub asteroids: Vec<Asteroid>,
    shoot_cooldown: Stopwatch,
    rng: ChaCha8Rng,
    config: GameConfig,
}

impl World {
    pub fn new(seed: u64, config: GameConfig, now: f64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed), config, now)
    }

    pub fn from_entropy(config: GameConfig, now: f64) -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy(), config, now)
    }

    pub fn with_rng(rng: ChaCha8Rng, config: GameConfig, now: f64) -> Self {
        let dimensions = Vec2::new(config.arena.width, config.arena.height);
        let centre = dimensions * 0.5;
        Self {
            dimensions,
            player: Player::new(centre, config.player.clone()),
            bullets: Vec::new(),
            asteroids: Vec::new(),
            shoot_cooldown: Stopwatch::started_at(now),
            rng,
            config,
        }
    }

    pub fn dimensions(&self) -> Vec2 {
        self.dimensions
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Builds an asteroid of `size`. A `position` of exactly (0, 0) means
    /// "anywhere": a uniform random point in the arena is used instead.
    pub fn generate_asteroid(&mut self, size: AsteroidSize, position: Vec2) -> Asteroid {
        let position = if position == Vec2::zero() {
            self.random_position()
        } else {
            position
        };
        let rotation = self.rng.gen_range(0.0..TAU);
        Asteroid::new(size, position, rotation, self.config.asteroid.speed)
    }

    fn random_position(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(0.0..self.dimensions.x),
            self.rng.gen_range(0.0..self.dimensions.y),
        )
    }

    /// Advances one frame. Returns `true` once the player touches an asteroid.
    pub fn update(&mut self, controls: Controls, now: f64) -> bool {
        self.player.update(controls);
        wrap(&mut self.player, self.dimensions);

        if self.player.shoot
            && self.shoot_cooldown.elapsed(now) > self.config.bullet.cooldown_secs
        {
            let ship = &self.player.entity;
            self.bullets.push(Bullet::new(
                ship.position,
                ship.rotation,
                self.config.bullet.speed,
                self.config.bullet.radius,
            ));
            self.shoot_cooldown.restart(now);
        }

        self.bullets.iter_mut().for_each(Simulated::advance);
        let dimensions = self.dimensions;
        self.bullets
            .retain(|b| !b.to_be_destroyed && !b.is_out_of_bounds(dimensions));

        if self.asteroids.len() < self.config.asteroid.population_floor {
            let asteroid = self.generate_asteroid(AsteroidSize::Large, Vec2::zero());
            debug!(
                "spawned large asteroid at ({:.1}, {:.1})",
                asteroid.entity.position.x, asteroid.entity.position.y
            );
            self.asteroids.push(asteroid);
        }

        for asteroid in &mut self.asteroids {
            asteroid.advance();
            wrap(asteroid, dimensions);
        }
        self.asteroids.retain(|a| !a.to_be_destroyed);

        self.resolve_bullet_hits();

        trace!(
            "frame: {} bullets, {} asteroids",
            self.bullets.len(),
            self.asteroids.len()
        );
        self.player_hit()
    }

    /// Flags every overlapping bullet/asteroid pair. Fragments are appended
    /// after the full pass so they never take part in it.
    fn resolve_bullet_hits(&mut self) {
        let mut fragments = Vec::new();
        for bullet in &mut self.bullets {
            for asteroid in &mut self.asteroids {
                if is_colliding(&bullet.entity, &asteroid.entity) {
                    bullet.to_be_destroyed = true;
                    asteroid.to_be_destroyed = true;
                    if let Some(child) = asteroid.size.split() {
                        fragments.push((child, asteroid.entity.position));
                    }
                }
            }
        }

        for (size, position) in fragments {
            debug!(
                "asteroid split into two {:?} at ({:.1}, {:.1})",
                size, position.x, position.y
            );
            for _ in 0..2 {
                let child = self.generate_asteroid(size, position);
                self.asteroids.push(child);
            }
        }
    }

    fn player_hit(&self) -> bool {
        self.asteroids
            .iter()
            .any(|a| is_colliding(&self.player.entity, &a.entity))
    }

    pub fn draw<R: Renderer>(&self, target: &mut R) {
        let offset = self.config.render.legacy_origin_offset;
        render_all(&self.bullets, target, offset);
        render_all(&self.asteroids, target, offset);
        render_all(std::slice::from_ref(&self.player), target, offset);
    }
}
