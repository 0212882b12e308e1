use crate::game::config::PlayerConfig;
use crate::game::entity::{Color, Entity, Positioned};
use crate::game::vec2::Vec2;

/// Key state for one frame; "held right now", not edge-triggered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub shoot: bool,
}

impl Controls {
    pub const ROTATE_LEFT: u8 = 1 << 0;
    pub const ROTATE_RIGHT: u8 = 1 << 1;
    pub const THRUST: u8 = 1 << 2;
    pub const SHOOT: u8 = 1 << 3;

    pub fn from_bits(bits: u8) -> Self {
        Self {
            rotate_left: bits & Self::ROTATE_LEFT != 0,
            rotate_right: bits & Self::ROTATE_RIGHT != 0,
            thrust: bits & Self::THRUST != 0,
            shoot: bits & Self::SHOOT != 0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub entity: Entity,
    pub shoot: bool,
    tuning: PlayerConfig,
}

impl Player {
    pub fn new(position: Vec2, tuning: PlayerConfig) -> Self {
        Self {
            entity: Entity::new(position, 0.0, 0.0, tuning.radius, Color::RED),
            shoot: false,
            tuning,
        }
    }

    pub fn update(&mut self, controls: Controls) {
        let e = &mut self.entity;
        if controls.rotate_left {
            e.rotation -= self.tuning.rotation_step;
        }
        if controls.rotate_right {
            e.rotation += self.tuning.rotation_step;
        }
        if controls.thrust {
            e.heading = Vec2::from_angle(e.rotation);
            e.speed += self.tuning.acceleration;
        } else {
            e.speed *= self.tuning.drag;
        }
        self.shoot = controls.shoot;
        e.speed = e.speed.clamp(0.0, self.tuning.max_speed);

        // Heading keeps the last thrust direction, so the ship drifts.
        e.position += e.heading * e.speed;
    }
}

impl Positioned for Player {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::wrap;

    fn player() -> Player {
        Player::new(Vec2::new(500.0, 500.0), PlayerConfig::default())
    }

    #[test]
    fn decodes_key_mask() {
        let c = Controls::from_bits(Controls::THRUST | Controls::SHOOT);
        assert!(c.thrust && c.shoot);
        assert!(!c.rotate_left && !c.rotate_right);
        assert_eq!(Controls::from_bits(0), Controls::default());
    }

    #[test]
    fn rotation_steps_by_a_tenth_radian() {
        let mut p = player();
        p.update(Controls {
            rotate_right: true,
            ..Controls::default()
        });
        assert!((p.entity.rotation - 0.1).abs() < 1e-6);
        p.update(Controls {
            rotate_left: true,
            ..Controls::default()
        });
        p.update(Controls {
            rotate_left: true,
            ..Controls::default()
        });
        assert!((p.entity.rotation + 0.1).abs() < 1e-6);
    }

    #[test]
    fn speed_stays_clamped_for_any_input_sequence() {
        let mut p = player();
        for frame in 0u32..600 {
            let bits = (frame.wrapping_mul(2_654_435_761) >> 7) as u8 & 0x0f;
            p.update(Controls::from_bits(bits));
            assert!(
                (0.0..=5.0).contains(&p.entity.speed),
                "frame {frame}: speed {}",
                p.entity.speed
            );
            assert_eq!(p.entity.radius(), 30.0);
            assert!(p.entity.position.is_finite());
        }
    }

    #[test]
    fn thrust_accelerates_to_cap_then_drag_decays() {
        let mut p = player();
        let thrust = Controls {
            thrust: true,
            ..Controls::default()
        };
        for _ in 0..200 {
            p.update(thrust);
        }
        assert_eq!(p.entity.speed, 5.0);

        p.update(Controls::default());
        assert!((p.entity.speed - 4.95).abs() < 1e-5);
    }

    #[test]
    fn drifts_along_last_thrust_heading() {
        let mut p = player();
        p.update(Controls {
            thrust: true,
            ..Controls::default()
        });
        let heading = p.entity.heading;
        assert_eq!(heading, Vec2::new(1.0, 0.0));

        p.update(Controls {
            rotate_left: true,
            ..Controls::default()
        });
        assert_eq!(p.entity.heading, heading);
        assert!(p.entity.position.x > 500.0);
        assert_eq!(p.entity.position.y, 500.0);
    }

    #[test]
    fn shoot_flag_follows_key_each_frame() {
        let mut p = player();
        p.update(Controls {
            shoot: true,
            ..Controls::default()
        });
        assert!(p.shoot);
        p.update(Controls::default());
        assert!(!p.shoot);
    }

    #[test]
    fn wrapping_moves_only_the_position() {
        let mut p = player();
        p.update(Controls {
            thrust: true,
            shoot: true,
            ..Controls::default()
        });
        p.entity.position = Vec2::new(1010.0, -5.0);
        let speed = p.entity.speed;

        wrap(&mut p, Vec2::new(1000.0, 1000.0));

        assert!((p.entity.position.x - 10.0).abs() < 1e-3);
        assert!((p.entity.position.y - 995.0).abs() < 1e-3);
        assert_eq!(p.entity.speed, speed);
        assert!(p.shoot);
    }
}
