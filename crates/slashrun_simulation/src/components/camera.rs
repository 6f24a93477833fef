//! Camera rig конфигурация
//!
//! Несвязанный с locomotion collaborator: host движок строит boom/camera
//! по этим параметрам один раз при spawn. Симуляция их не читает.

use bevy::prelude::*;

/// Конфигурация camera boom для player entity
///
/// Задаётся при spawn; host layer создаёт spring arm + follow camera
/// и дальше владеет interpolation/collision камеры сам.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct CameraRig {
    /// Длина boom (камера следует на этой дистанции за актором)
    pub arm_length: f32,

    /// Boom вращается за controller rotation
    pub boom_follows_controller: bool,

    /// Камера вращается относительно boom (false = жёстко на конце boom)
    pub camera_follows_boom: bool,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            arm_length: 400.0,
            boom_follows_controller: true,
            camera_follows_boom: false,
        }
    }
}
