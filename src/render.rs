use crate::game::entity::{Color, Renderer};
use crate::game::vec2::Vec2;
use crate::game::world::World;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Color,
}

/// Collects draw calls for one frame so the host can paint them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrameBuffer {
    pub circles: Vec<CircleView>,
}

impl Renderer for FrameBuffer {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.circles.push(CircleView {
            x: center.x,
            y: center.y,
            radius,
            color,
        });
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameView {
    pub width: f32,
    pub height: f32,
    pub game_over: bool,
    pub score: u32,
    pub circles: Vec<CircleView>,
}

impl FrameView {
    pub fn capture(world: &World, game_over: bool, score: u32) -> Self {
        let mut buffer = FrameBuffer::default();
        world.draw(&mut buffer);
        let dims = world.dimensions();
        Self {
            width: dims.x,
            height: dims.y,
            game_over,
            score,
            circles: buffer.circles,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArenaView {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub frame_rate_limit: u32,
}

impl From<&World> for ArenaView {
    fn from(world: &World) -> Self {
        let arena = &world.config().arena;
        Self {
            width: arena.width,
            height: arena.height,
            title: arena.title.clone(),
            frame_rate_limit: arena.frame_rate_limit,
        }
    }
}

pub fn arena_json(world: &World) -> String {
    serde_json::to_string(&ArenaView::from(world)).unwrap_or_else(|_| "{}".to_string())
}
