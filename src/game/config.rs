use crate::game::error::{GameError, GameResult};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub frame_rate_limit: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
            title: "Assteroids".to_string(),
            frame_rate_limit: 60,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub radius: f32,
    /// Radians per frame while a rotate key is held.
    pub rotation_step: f32,
    pub acceleration: f32,
    /// Multiplicative speed decay per frame without thrust.
    pub drag: f32,
    pub max_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            radius: 30.0,
            rotation_step: 0.1,
            acceleration: 0.05,
            drag: 0.99,
            max_speed: 5.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct BulletConfig {
    pub speed: f32,
    pub radius: f32,
    pub cooldown_secs: f64,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            radius: 5.0,
            cooldown_secs: 0.2,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AsteroidConfig {
    pub speed: f32,
    pub population_floor: usize,
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            speed: 2.0,
            population_floor: 10,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Draw circles with their local origin at radius/2, which shifts the
    /// visible disc by (radius/2, radius/2) from the logical position.
    pub legacy_origin_offset: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            legacy_origin_offset: true,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena: ArenaConfig,
    pub player: PlayerConfig,
    pub bullet: BulletConfig,
    pub asteroid: AsteroidConfig,
    pub render: RenderConfig,
}

impl GameConfig {
    /// Parses a (possibly partial) JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> GameResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GameResult<()> {
        fn positive(name: &str, value: f32) -> GameResult<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(GameError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )))
            }
        }
        fn non_negative(name: &str, value: f32) -> GameResult<()> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(GameError::InvalidConfig(format!(
                    "{name} must not be negative, got {value}"
                )))
            }
        }

        positive("arena.width", self.arena.width)?;
        positive("arena.height", self.arena.height)?;
        positive("player.radius", self.player.radius)?;
        positive("bullet.radius", self.bullet.radius)?;
        non_negative("player.rotation_step", self.player.rotation_step)?;
        non_negative("player.acceleration", self.player.acceleration)?;
        non_negative("player.max_speed", self.player.max_speed)?;
        non_negative("bullet.speed", self.bullet.speed)?;
        non_negative("asteroid.speed", self.asteroid.speed)?;

        if !(self.player.drag > 0.0 && self.player.drag <= 1.0) {
            return Err(GameError::InvalidConfig(format!(
                "player.drag must be in (0, 1], got {}",
                self.player.drag
            )));
        }
        if !(self.bullet.cooldown_secs.is_finite() && self.bullet.cooldown_secs >= 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "bullet.cooldown_secs must not be negative, got {}",
                self.bullet.cooldown_secs
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.arena.width, 1000.0);
        assert_eq!(config.arena.title, "Assteroids");
        assert_eq!(config.arena.frame_rate_limit, 60);
        assert_eq!(config.player.max_speed, 5.0);
        assert_eq!(config.bullet.cooldown_secs, 0.2);
        assert_eq!(config.asteroid.population_floor, 10);
        assert!(config.render.legacy_origin_offset);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            GameConfig::from_json(r#"{"arena":{"width":640},"bullet":{"cooldown_secs":0.5}}"#)
                .expect("valid config");
        assert_eq!(config.arena.width, 640.0);
        assert_eq!(config.arena.height, 1000.0);
        assert_eq!(config.bullet.cooldown_secs, 0.5);
        assert_eq!(config.bullet.speed, 5.0);
    }

    #[test]
    fn rejects_bad_values() {
        let err = GameConfig::from_json(r#"{"arena":{"height":0}}"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)), "{err}");

        let err = GameConfig::from_json(r#"{"player":{"drag":1.5}}"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)), "{err}");

        let err = GameConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, GameError::ConfigParse(_)), "{err}");
    }
}
