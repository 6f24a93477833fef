//! Movement domain — locomotion pipeline и контракт с host integrator
//!
//! ECS ответственность:
//! - Locomotion state: crawl/dodge флаги, jump gate
//! - Масштабирование input осей (crawl_factor, DODGE_FACTOR)
//! - Intents: MovementIntent, JumpIntent, LookIntent
//!
//! Host ответственность:
//! - Raw device input → PlayerActionEvent
//! - Физика/коллизии: применение MovementIntent к character body
//! - Camera boom/rotation по LookIntent

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

pub use components::MovementIntent;
pub use events::{JumpIntent, LookIntent};
pub use systems::clear_movement_intents;

use crate::input::{dispatch_player_actions, PlayerActionEvent};

/// Locomotion Plugin
///
/// Регистрирует locomotion pipeline в FixedUpdate (60Hz).
///
/// Порядок выполнения:
/// 1. clear_movement_intents — сброс intent прошлого tick
/// 2. dispatch_player_actions — привязки input → state/intents
///
/// Host шлёт PlayerActionEvent до tick, читает MovementIntent
/// и JumpIntent/LookIntent после.
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<PlayerActionEvent>()
            .add_event::<JumpIntent>()
            .add_event::<LookIntent>();

        // Регистрация систем в FixedUpdate
        app.add_systems(
            FixedUpdate,
            (clear_movement_intents, dispatch_player_actions).chain(), // Последовательное выполнение
        );
    }
}
