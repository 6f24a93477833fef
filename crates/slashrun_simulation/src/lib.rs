//! SLASHRUN Simulation Core
//!
//! ECS-симуляция locomotion на Bevy 0.16 (strategic layer)
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (locomotion state, jump gate, масштабирование input)
//! - Host движок = tactical layer (физика, коллизии, камера, raw input)
//!
//! Контракт с host:
//! - Вход: PlayerActionEvent (по одному на (action, phase) срабатывание)
//! - Выход: MovementIntent компонент + JumpIntent/LookIntent events

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod input;
pub mod logger;
pub mod movement;

// Re-export базовых типов для удобства
pub use components::*;
pub use input::{ActionPhase, InputAction, PlayerActionEvent};
pub use logger::*;
pub use movement::{JumpIntent, LocomotionPlugin, LookIntent, MovementIntent};

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick (легче считать интервалы)
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Детерминистичный RNG (seed по умолчанию)
            .insert_resource(DeterministicRng::new(42))
            // Подсистемы (ECS strategic layer)
            .add_plugins(LocomotionPlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
///
/// Используется scripted replay для генерации input расписаний:
/// одинаковый seed → одинаковая последовательность PlayerActionEvent.
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Snapshot компонентов мира для сравнения детерминизма
///
/// Entity сортируются по index — порядок байтов стабилен между прогонами.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();
    entities.sort_by_key(|(entity, _)| entity.index());

    // Debug formatting как канонический байтовый вид компонента
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
