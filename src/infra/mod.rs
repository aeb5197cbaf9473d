//! Инфраструктурный слой вокруг движков:
//! - генерация ID;
//! - RNG-реализации;
//! - приём сырого ввода списка;
//! - выгрузка групп в таблицу.

pub mod export;
pub mod ids;
pub mod ingest;
pub mod rng;

pub use export::{partition_to_table, ExportOptions};
pub use ids::IdGenerator;
pub use ingest::{names_from_rows, names_from_text};
pub use rng::{ConfiguredRng, DeterministicRng, SystemRng};
