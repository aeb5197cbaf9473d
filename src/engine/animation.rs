//! Анимация "барабана" перед объявлением победителей.
//!
//! Здесь только презентационная часть: сколько тиков крутить и что
//! показывать на каждом тике. На итоговый выбор это никак не влияет:
//! у барабана свой RNG и доступ к пулу только на чтение.

use serde::{Deserialize, Serialize};

use crate::domain::Name;
use crate::engine::RandomSource;

/// Правила анимации для сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnimationRules {
    /// Период обновления "барабана", мс. Контрактом не является,
    /// это подсказка для таймера во фронте.
    pub tick_interval_ms: u32,
    /// Сколько тиков длится розыгрыш, включая финальный тик
    /// с победителями. Кадров барабана на один меньше.
    pub draw_ticks: u32,
    /// Перцептивная задержка перед показом групп, мс.
    pub grouping_delay_ms: u32,
}

impl AnimationRules {
    /// Строгий конструктор.
    pub const fn new(tick_interval_ms: u32, draw_ticks: u32, grouping_delay_ms: u32) -> Self {
        Self {
            tick_interval_ms,
            draw_ticks,
            grouping_delay_ms,
        }
    }

    /// Стандартный профиль: 30 тиков по 50 мс, группы через 600 мс.
    pub const fn standard() -> Self {
        Self::new(50, 30, 600)
    }

    /// Без анимации: розыгрыш финализируется на первом же тике.
    pub const fn instant() -> Self {
        Self::new(0, 1, 0)
    }

    /// Полная длительность барабана, мс.
    pub fn draw_duration_ms(&self) -> u64 {
        u64::from(self.tick_interval_ms) * u64::from(self.draw_ticks)
    }
}

impl Default for AnimationRules {
    fn default() -> Self {
        Self::standard()
    }
}

/// Счётчик тиков барабана для одного розыгрыша.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecoyReel {
    slots: usize,
    ticks_left: u32,
}

impl DecoyReel {
    /// `ticks` меньше 1 поднимаем до 1: финализация всегда происходит на тике.
    pub fn new(slots: usize, ticks: u32) -> Self {
        Self {
            slots,
            ticks_left: ticks.max(1),
        }
    }

    pub fn ticks_left(&self) -> u32 {
        self.ticks_left
    }

    /// Остался только финальный тик?
    pub fn is_last_tick(&self) -> bool {
        self.ticks_left <= 1
    }

    /// Отсчитать тик барабана.
    pub fn advance(&mut self) {
        self.ticks_left = self.ticks_left.saturating_sub(1);
    }

    /// Набор "обманок": `slots` имён с возвращением из `pool`.
    pub fn spin<R: RandomSource>(&self, pool: &[Name], rng: &mut R) -> Vec<Name> {
        if pool.is_empty() {
            return Vec::new();
        }
        (0..self.slots)
            .map(|_| pool[rng.index(pool.len())].clone())
            .collect()
    }
}
