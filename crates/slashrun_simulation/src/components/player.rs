//! Player control marker component
//!
//! Отмечает entity которым управляет игрок через input.

use bevy::prelude::Component;

/// Marker component для player-controlled entity
///
/// Input dispatch системы используют `With<Player>` filter — locomotion
/// переходы применяются только к актору под контролем игрока.
///
/// # Single-player
/// В single-player режиме обычно только один entity имеет этот компонент.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
