//! Input dispatch system (ECS)
//!
//! Таблица привязок input actions, выраженная одним match:
//! (action, phase) → locomotion переход / intent для host.
//!
//! # Архитектура
//! - Читает: PlayerActionEvent (от host input layer)
//! - Пишет: Locomotion (переходы), MovementIntent (scaled оси),
//!   JumpIntent / LookIntent events (читает host integrator)
//! - Query: With<Player> (только player-controlled актор)
//!
//! Симуляция НЕ трогает позицию/velocity/коллизии — host integrator
//! забирает MovementIntent и применяет физику сам.

use bevy::prelude::*;

use crate::components::{Locomotion, MoveSpeed, Player};
use crate::movement::{JumpIntent, LookIntent, MovementIntent};

use super::events::{ActionPhase, InputAction, PlayerActionEvent};

/// Dispatch player input: один match вместо таблицы delegate привязок
///
/// # Привязки
/// - Move / Triggered → scaled оси в MovementIntent
/// - Look / Triggered → LookIntent passthrough (locomotion не участвует)
/// - Jump / Triggered → try_jump gate, при успехе JumpIntent
/// - Crawl / Started → begin_crawl; Completed ИЛИ Canceled → end_crawl
/// - Dodge / Started → begin_dodge; Completed → end_dodge
///   (Canceled для dodge намеренно не привязан,
///   см. test_dodge_canceled_not_bound)
///
/// Отказ jump gate — тихий no-op: intent просто не эмитится.
pub fn dispatch_player_actions(
    mut actions: EventReader<PlayerActionEvent>,
    mut jump_events: EventWriter<JumpIntent>,
    mut look_events: EventWriter<LookIntent>,
    mut player_query: Query<
        (Entity, &mut Locomotion, &MoveSpeed, &mut MovementIntent),
        With<Player>,
    >,
) {
    // Guard: нет player entity — events дренируются без эффекта
    let Ok((player_entity, mut locomotion, move_speed, mut intent)) =
        player_query.single_mut()
    else {
        return;
    };

    for event in actions.read() {
        match (event.action, event.phase) {
            (InputAction::Move, ActionPhase::Triggered) => {
                // value.y — forward ось, value.x — lateral (масштабируется
                // crawl_factor и безусловным DODGE_FACTOR)
                intent.forward = locomotion.forward_input(move_speed.speed, event.value.y);
                intent.lateral = locomotion.lateral_input(move_speed.speed, event.value.x);
            }

            (InputAction::Look, ActionPhase::Triggered) => {
                // Passthrough: locomotion state обзор не модифицирует
                look_events.write(LookIntent {
                    entity: player_entity,
                    yaw: event.value.x,
                    pitch: event.value.y,
                });
            }

            (InputAction::Jump, ActionPhase::Triggered) => {
                if locomotion.try_jump() {
                    jump_events.write(JumpIntent {
                        entity: player_entity,
                    });
                }
            }

            (InputAction::Crawl, ActionPhase::Started) => locomotion.begin_crawl(),
            (InputAction::Crawl, ActionPhase::Completed | ActionPhase::Canceled) => {
                locomotion.end_crawl()
            }

            (InputAction::Dodge, ActionPhase::Started) => locomotion.begin_dodge(),
            (InputAction::Dodge, ActionPhase::Completed) => locomotion.end_dodge(),

            // Непривязанные (action, phase) комбинации игнорируются
            _ => {}
        }
    }
}
