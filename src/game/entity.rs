use crate::game::vec2::Vec2;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Drawing collaborator: the only primitive the simulation needs.
pub trait Renderer {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// State shared by everything that moves through the arena.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub position: Vec2,
    pub heading: Vec2,
    /// Radians.
    pub rotation: f32,
    pub speed: f32,
    radius: f32,
    pub color: Color,
}

impl Entity {
    pub fn new(position: Vec2, rotation: f32, speed: f32, radius: f32, color: Color) -> Self {
        debug_assert!(radius > 0.0, "entity radius must be positive");
        Self {
            position,
            heading: Vec2::zero(),
            rotation,
            speed,
            radius,
            color,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Straight-line motion along the fixed rotation.
    pub fn advance_along_rotation(&mut self) {
        self.heading = Vec2::from_angle(self.rotation);
        self.position += self.heading * self.speed;
    }

    pub fn render<R: Renderer>(&self, target: &mut R, legacy_origin_offset: bool) {
        let center = if legacy_origin_offset {
            let half = self.radius / 2.0;
            self.position + Vec2::new(half, half)
        } else {
            self.position
        };
        target.fill_circle(center, self.radius, self.color);
    }
}

/// Anything that carries an `Entity`; enough for wrap and draw.
pub trait Positioned {
    fn entity(&self) -> &Entity;
    fn entity_mut(&mut self) -> &mut Entity;
}

/// Kinds that step on their own each frame, without input.
pub trait Simulated: Positioned {
    fn advance(&mut self);
}

/// Circle overlap, inclusive at the touching distance.
pub fn is_colliding(lhs: &Entity, rhs: &Entity) -> bool {
    lhs.position.distance(rhs.position) <= lhs.radius + rhs.radius
}

fn wrap_axis(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid rounds tiny negatives up to exactly `extent`.
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

/// Toroidal correction into `[0, dimensions)` on both axes.
pub fn wrap<T: Positioned + ?Sized>(item: &mut T, dimensions: Vec2) {
    let position = &mut item.entity_mut().position;
    position.x = wrap_axis(position.x, dimensions.x);
    position.y = wrap_axis(position.y, dimensions.y);
}

pub fn render_all<T: Positioned, R: Renderer>(
    items: &[T],
    target: &mut R,
    legacy_origin_offset: bool,
) {
    for item in items {
        item.entity().render(target, legacy_origin_offset);
    }
}
