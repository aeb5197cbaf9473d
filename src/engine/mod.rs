//! Движки поверх списка участников: розыгрыш призов и разбиение на группы.
//!
//! Высокоуровневые объекты:
//!   - `DrawEngine` – розыгрыш с повторами / без повторов + история
//!   - `GroupingEngine` – разбиение на группы по числу групп / размеру группы
//!
//! Оба движка независимы друг от друга и узнают об изменении списка
//! только через явный `RosterObserver::roster_changed`.

pub mod animation;
pub mod draw;
pub mod draw_history;
pub mod errors;
pub mod grouping;
pub mod observer;

pub use animation::{AnimationRules, DecoyReel};
pub use draw::{
    select_winners, DrawConfig, DrawEngine, DrawPhase, DrawStep, Selection, DEFAULT_MAX_DRAW_COUNT,
};
pub use draw_history::{DrawHistory, DrawRecord};
pub use errors::EngineError;
pub use grouping::{partition_shuffled, Group, GroupMode, GroupingConfig, GroupingEngine, Partition};
pub use observer::RosterObserver;

/// RNG интерфейс для движков.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерная перестановка (Fisher–Yates).
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равномерный индекс в диапазоне `0..upper`. `upper` > 0.
    fn index(&mut self, upper: usize) -> usize;
}
