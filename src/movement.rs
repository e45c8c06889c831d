//! Movement Controller
//!
//! Translates held directional keys into velocity commands for the movable
//! entity. Runs only while the scene is in playing mode. Velocity is reset
//! to zero every frame before steering, so releasing every key stops the
//! entity immediately.

use crate::entity::MovableEntity;
use crate::input::{ControlKey, InputSampler};

pub struct MovementController {
    speed: f32,
}

impl MovementController {
    pub fn new(speed: f32) -> Self {
        MovementController { speed }
    }

    /// Sets the entity's velocity for this frame from level-triggered reads.
    ///
    /// Axes are independent; within an axis the keys are mutually exclusive
    /// with left and up taking priority when both directions are held.
    pub fn steer(&self, entity: &mut MovableEntity, input: &dyn InputSampler) {
        entity.velocity_x = 0.0;
        entity.velocity_y = 0.0;

        if input.is_held(ControlKey::Left) {
            entity.velocity_x = -self.speed;
        } else if input.is_held(ControlKey::Right) {
            entity.velocity_x = self.speed;
        }

        if input.is_held(ControlKey::Up) {
            entity.velocity_y = -self.speed;
        } else if input.is_held(ControlKey::Down) {
            entity.velocity_y = self.speed;
        }
    }
}
