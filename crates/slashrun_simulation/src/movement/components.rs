//! Movement intent компонент (контракт с host integrator)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Scaled движение за текущий tick
///
/// Архитектура:
/// - dispatch_player_actions пишет scaled оси (high-level intent)
/// - Host integrator читает после tick и применяет к своему
///   physics/collision resolution
/// - Валиден ОДИН tick: clear_movement_intents сбрасывает в начале
///   следующего (нет залипшего input без свежих Move events)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct MovementIntent {
    /// Forward ось после масштабирования (axis * speed * crawl_factor)
    pub forward: f32,

    /// Lateral ось после масштабирования
    /// (axis * speed * crawl_factor * DODGE_FACTOR)
    pub lateral: f32,
}

impl MovementIntent {
    pub fn clear(&mut self) {
        self.forward = 0.0;
        self.lateral = 0.0;
    }

    /// Нет движения в этом tick (host может пропустить integration)
    pub fn is_idle(&self) -> bool {
        self.forward == 0.0 && self.lateral == 0.0
    }
}
