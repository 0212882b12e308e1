use crate::game::entity::{Color, Entity, Positioned, Simulated};
use crate::game::error::GameError;
use crate::game::vec2::Vec2;

/// Size tier; the discriminant is the classic tier number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AsteroidSize {
    Large = 4,
    Medium = 2,
    Small = 1,
}

impl AsteroidSize {
    pub fn radius(self) -> f32 {
        match self {
            AsteroidSize::Large => 40.0,
            AsteroidSize::Medium => 20.0,
            AsteroidSize::Small => 10.0,
        }
    }

    /// Tier of the two fragments left behind, if any.
    pub fn split(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }

    pub fn tier(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for AsteroidSize {
    type Error = GameError;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        match tier {
            4 => Ok(AsteroidSize::Large),
            2 => Ok(AsteroidSize::Medium),
            1 => Ok(AsteroidSize::Small),
            other => Err(GameError::InvalidAsteroidSize(other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Asteroid {
    pub entity: Entity,
    pub size: AsteroidSize,
    pub to_be_destroyed: bool,
}

impl Asteroid {
    pub fn new(size: AsteroidSize, position: Vec2, rotation: f32, speed: f32) -> Self {
        Self {
            entity: Entity::new(position, rotation, speed, size.radius(), Color::WHITE),
            size,
            to_be_destroyed: false,
        }
    }
}

impl Positioned for Asteroid {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl Simulated for Asteroid {
    fn advance(&mut self) {
        self.entity.advance_along_rotation();
    }
}
