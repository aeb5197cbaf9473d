//! Список участников + розыгрыш призов + случайное разбиение на группы.
//!
//! Ядро браузерного инструмента: состояние и алгоритмы, без отрисовки.
//! Слой представления держит `Session` и дёргает её командами/запросами
//! (`api`) или напрямую методами.
//!
//! Поток данных:
//!   `RosterStore` (источник правды)
//!       → `DrawEngine` (пул без повторов, история)
//!       → `GroupingEngine` (текущее разбиение)
//! Движки друг от друга не зависят.

pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod session;

pub use config::{ConfigError, SessionConfig};
pub use session::Session;
