//! Player input domain
//!
//! Содержит:
//! - PlayerActionEvent / InputAction / ActionPhase (события от host)
//! - dispatch_player_actions (таблица привязок → locomotion / intents)

pub mod events;
pub mod systems;

pub use events::{ActionPhase, InputAction, PlayerActionEvent};
pub use systems::dispatch_player_actions;
