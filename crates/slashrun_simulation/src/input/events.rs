//! Player input events
//!
//! События генерируются host input layer (движок владеет raw devices)
//! и обрабатываются ECS dispatch системой.

use bevy::prelude::{Event, Vec2};

/// Именованный input action (таблица привязок host слоя)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Двухосевое движение (value: x = lateral, y = forward)
    Move,
    /// Двухосевой обзор (value: x = yaw, y = pitch)
    Look,
    /// Прыжок (discrete)
    Jump,
    /// Crawl, hold-to-activate (discrete start/stop)
    Crawl,
    /// Dodge, hold-to-activate (discrete start/stop)
    Dodge,
}

/// Фаза срабатывания action на стороне host
///
/// Семантика как у action-based input систем движков:
/// - Started: кнопка только что нажата
/// - Triggered: срабатывает каждый frame пока action активен
/// - Completed: кнопка отпущена
/// - Canceled: удержание прервано движком (меню, потеря фокуса)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionPhase {
    Started,
    Triggered,
    Completed,
    Canceled,
}

/// Player action event — один на (action, phase) срабатывание
///
/// # Архитектура
/// - Emit: host input layer (по одному event на trigger, Move/Look —
///   каждый frame пока оси ненулевые)
/// - Consume: dispatch_player_actions (ECS system)
///
/// # Оси
/// `value` несёт логические оси для Move/Look, `Vec2::ZERO` для
/// discrete actions:
/// - `value.y`: forward axis, -1.0 (назад) → +1.0 (вперёд)
/// - `value.x`: lateral axis, -1.0 (влево) → +1.0 (вправо)
///
/// Маппинг на мировые направления (basis актора, контроллер yaw)
/// делает host — симуляция осей не интерпретирует.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerActionEvent {
    pub action: InputAction,
    pub phase: ActionPhase,
    pub value: Vec2,
}

impl PlayerActionEvent {
    /// Конструктор для discrete action (value не используется)
    pub fn discrete(action: InputAction, phase: ActionPhase) -> Self {
        Self {
            action,
            phase,
            value: Vec2::ZERO,
        }
    }

    /// Конструктор для осевого action (Move/Look, фаза Triggered)
    pub fn axis(action: InputAction, value: Vec2) -> Self {
        Self {
            action,
            phase: ActionPhase::Triggered,
            value,
        }
    }
}
