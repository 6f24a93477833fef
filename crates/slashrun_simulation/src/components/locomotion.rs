//! Locomotion state: crawl/dodge флаги и масштабирование movement input

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Множитель скорости в crawl режиме
pub const CRAWL_FACTOR: f32 = 0.25;

/// Множитель скорости для lateral оси (dodge)
///
/// Применяется ВСЕГДА, независимо от dodging флага — известный quirk,
/// зафиксирован тестом (test_dodge_factor_not_gated_by_flag).
pub const DODGE_FACTOR: f32 = 4.0;

/// Locomotion state актора (crawl / dodge / jump)
///
/// Инварианты:
/// - crawl_factor == CRAWL_FACTOR пока crawling, иначе ровно 1.0
/// - crawling и dodging — НЕЗАВИСИМЫЕ флаги (могут быть true одновременно),
///   не сворачивать в один exclusive enum
///
/// Поля приватные: читаем через accessors, мутируем только через
/// begin_/end_/try_jump переходы. Все переходы тотальные и идемпотентные.
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct Locomotion {
    crawling: bool,
    dodging: bool,
    jumping: bool,
    crawl_factor: f32,
}

impl Default for Locomotion {
    fn default() -> Self {
        Self {
            crawling: false,
            dodging: false,
            jumping: false,
            crawl_factor: 1.0,
        }
    }
}

impl Locomotion {
    /// Вход в crawl режим (hold-to-crawl, host шлёт Started)
    pub fn begin_crawl(&mut self) {
        self.crawling = true;
        self.crawl_factor = CRAWL_FACTOR;
    }

    /// Выход из crawl режима (Completed или Canceled на стороне host)
    pub fn end_crawl(&mut self) {
        self.crawling = false;
        self.crawl_factor = 1.0;
    }

    /// Вход в dodge (только флаг — multiplier lateral оси не гейтится им)
    pub fn begin_dodge(&mut self) {
        self.dodging = true;
    }

    pub fn end_dodge(&mut self) {
        self.dodging = false;
    }

    /// Jump gate: единственное условие во всей системе
    ///
    /// Возвращает false пока crawling (jumping НЕ трогаем),
    /// иначе выставляет jumping и возвращает true.
    /// Отказ — нормальный gameplay исход, не ошибка.
    pub fn try_jump(&mut self) -> bool {
        if self.crawling {
            return false;
        }
        self.jumping = true;
        true
    }

    pub fn is_crawling(&self) -> bool {
        self.crawling
    }

    pub fn is_dodging(&self) -> bool {
        self.dodging
    }

    /// Выставляется удачным try_jump; операции сброса нет —
    /// внешние наблюдатели (анимация/UI) читают как есть
    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    pub fn crawl_factor(&self) -> f32 {
        self.crawl_factor
    }

    /// Scaled forward input: axis * speed * crawl_factor
    pub fn forward_input(&self, speed: f32, axis: f32) -> f32 {
        axis * speed * self.crawl_factor
    }

    /// Scaled lateral input: axis * speed * crawl_factor * DODGE_FACTOR
    ///
    /// DODGE_FACTOR не гейтится dodging флагом.
    pub fn lateral_input(&self, speed: f32, axis: f32) -> f32 {
        axis * speed * self.crawl_factor * DODGE_FACTOR
    }
}

/// Базовая скорость движения актора
///
/// Задаётся при spawn, константна после конструирования.
/// Используется locomotion системой при масштабировании input осей.
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct MoveSpeed {
    pub speed: f32,
}

impl Default for MoveSpeed {
    fn default() -> Self {
        Self { speed: 600.0 } // Дефолтный бег
    }
}

impl MoveSpeed {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}
