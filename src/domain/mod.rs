//! Доменная модель: имена участников, список (roster), подтверждения.

pub mod confirm;
pub mod name;
pub mod roster;

/// Идентификатор записи розыгрыша.
pub type DrawId = u64;

pub use confirm::*;
pub use name::*;
pub use roster::*;
