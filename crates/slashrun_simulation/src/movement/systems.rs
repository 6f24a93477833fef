//! Movement tick системы

use bevy::prelude::*;

use super::components::MovementIntent;

/// Сброс MovementIntent в начале каждого tick
///
/// Intent валиден один tick: без свежих Move events актор стоит
/// (accumulate-and-consume паттерн input векторов).
/// Работает в FixedUpdate ДО dispatch_player_actions (chain).
pub fn clear_movement_intents(mut query: Query<&mut MovementIntent>) {
    for mut intent in query.iter_mut() {
        intent.clear();
    }
}
