//! Movement events (контракт с host layer)

use bevy::prelude::*;

/// Event: намерение прыгнуть (jump intent)
///
/// Генерируется:
/// - dispatch_player_actions, ТОЛЬКО если jump gate пропустил
///   (не эмитится пока актор crawling)
///
/// Обрабатывается:
/// - Host layer: применяет jump velocity к своему character body
#[derive(Event, Debug, Clone)]
pub struct JumpIntent {
    pub entity: Entity,
}

/// Event: raw look оси для host controller rotation
///
/// Passthrough без модификаций — locomotion state на обзор не влияет.
/// Host применяет yaw к controller rotation, pitch к camera boom.
#[derive(Event, Debug, Clone, Copy)]
pub struct LookIntent {
    pub entity: Entity,
    pub yaw: f32,
    pub pitch: f32,
}
