//! Movable Entity
//!
//! The sprite spawned from the selected item while the scene is in playing
//! mode. The entity exists only between mode entry and exit; the scene owns
//! it through an `Option` and drops it on exit. The physics step applies
//! the frame's velocity plus gravity, then clamps the entity to the canvas
//! when its world-bounds flag is set.

use std::collections::HashMap;

use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

use crate::config::{self, SceneConfig};

pub struct MovableEntity {
    /// Top-left corner in canvas units.
    pub x: f32,
    pub y: f32,
    pub size: u32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    /// Texture key of the backing item.
    pub image_id: String,
    /// When set, the physics step keeps the entity inside the canvas.
    pub clamp_to_bounds: bool,
}

impl MovableEntity {
    /// Spawns an entity centered on the given point with bounds clamping on.
    pub fn spawn(center_x: i32, center_y: i32, size: u32, image_id: &str) -> Self {
        MovableEntity {
            x: center_x as f32 - size as f32 / 2.0,
            y: center_y as f32 - size as f32 / 2.0,
            size,
            velocity_x: 0.0,
            velocity_y: 0.0,
            image_id: image_id.to_string(),
            clamp_to_bounds: true,
        }
    }

    /// Advances the entity by one frame.
    ///
    /// Gravity is added to the frame's vertical velocity before integration.
    /// Steering re-zeroes velocity every frame, so gravity never accumulates
    /// across frames.
    pub fn step(&mut self, dt: f32, gravity: f32, bounds: (u32, u32)) {
        self.velocity_y += gravity * dt;
        self.x += self.velocity_x * dt;
        self.y += self.velocity_y * dt;

        if self.clamp_to_bounds {
            let max_x = bounds.0 as f32 - self.size as f32;
            let max_y = bounds.1 as f32 - self.size as f32;
            self.x = self.x.clamp(0.0, max_x.max(0.0));
            self.y = self.y.clamp(0.0, max_y.max(0.0));
        }
    }

    /// Draws the sprite, or a plain filled rectangle when the item's texture
    /// never loaded.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        textures: &HashMap<String, Texture<'_>>,
        config: &SceneConfig,
    ) -> Result<(), String> {
        let dest = Rect::new(self.x as i32, self.y as i32, self.size, self.size);

        match textures.get(&self.image_id) {
            Some(texture) => canvas.copy(texture, None, dest),
            None => {
                canvas.set_draw_color(config::rgb(config.colors.entity_fallback));
                canvas.fill_rect(dest).map_err(|e| e.to_string())
            }
        }
    }
}
