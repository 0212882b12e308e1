use crate::game::entity::{Color, Entity, Positioned, Simulated};
use crate::game::vec2::Vec2;

#[derive(Clone, Debug)]
pub struct Bullet {
    pub entity: Entity,
    pub to_be_destroyed: bool,
}

impl Bullet {
    pub fn new(position: Vec2, rotation: f32, speed: f32, radius: f32) -> Self {
        Self {
            entity: Entity::new(position, rotation, speed, radius, Color::CYAN),
            to_be_destroyed: false,
        }
    }

    /// Outside the arena on either axis. Bullets are culled, never wrapped.
    pub fn is_out_of_bounds(&self, dimensions: Vec2) -> bool {
        let Vec2 { x, y } = self.entity.position;
        x < 0.0 || y < 0.0 || x > dimensions.x || y > dimensions.y
    }
}

impl Positioned for Bullet {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl Simulated for Bullet {
    fn advance(&mut self) {
        self.entity.advance_along_rotation();
    }
}
