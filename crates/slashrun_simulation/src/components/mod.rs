//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - locomotion: режимы движения (Locomotion, MoveSpeed, crawl/dodge факторы)
//! - player: player control marker (Player)
//! - camera: camera rig конфигурация (CameraRig)

pub mod camera;
pub mod locomotion;
pub mod player;

// Re-exports для удобного импорта
pub use camera::*;
pub use locomotion::*;
pub use player::*;
