use thiserror::Error;

/// Ошибки движков розыгрыша и разбиения на группы.
///
/// Все они восстановимые и показываются пользователю;
/// при любой из них состояние движка не меняется.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Список участников пуст")]
    EmptyRoster,

    #[error("Недостаточно участников в пуле: нужно {requested}, осталось {remaining}")]
    InsufficientPool { requested: u32, remaining: usize },

    #[error("Недопустимое значение {field}={value}: вне допустимого диапазона")]
    InvalidValue { field: &'static str, value: u32 },

    #[error("Розыгрыш уже идёт")]
    DrawInProgress,

    #[error("Нет активного розыгрыша")]
    NoDrawInProgress,
}
