use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту).
///
/// Все восстановимые: фронт показывает сообщение, состояние не изменилось.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// В списке нет ни одного имени.
    EmptyRoster,

    /// Без повторов: запрошено больше, чем осталось в пуле.
    InsufficientPool { requested: u32, remaining: usize },

    /// Количество победителей / значение разбиения вне допустимого диапазона.
    InvalidValue { field: String, value: u32 },

    /// Розыгрыш уже крутится: новый запрос отклонён.
    DrawInProgress,

    /// Тик пришёл, а розыгрыша нет (например, его сбросило изменение списка).
    NoDrawInProgress,

    /// Неправильные входные данные (например, битый JSON команды).
    BadRequest(String),
}

impl ApiError {
    /// Текст для показа пользователю.
    pub fn message(&self) -> String {
        match self {
            ApiError::EmptyRoster => EngineError::EmptyRoster.to_string(),
            ApiError::InsufficientPool {
                requested,
                remaining,
            } => EngineError::InsufficientPool {
                requested: *requested,
                remaining: *remaining,
            }
            .to_string(),
            ApiError::InvalidValue { field, value } => {
                format!("Недопустимое значение {field}={value}: вне допустимого диапазона")
            }
            ApiError::DrawInProgress => EngineError::DrawInProgress.to_string(),
            ApiError::NoDrawInProgress => EngineError::NoDrawInProgress.to_string(),
            ApiError::BadRequest(msg) => format!("Некорректный запрос: {msg}"),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::EmptyRoster => ApiError::EmptyRoster,
            EngineError::InsufficientPool {
                requested,
                remaining,
            } => ApiError::InsufficientPool {
                requested,
                remaining,
            },
            EngineError::InvalidValue { field, value } => ApiError::InvalidValue {
                field: field.to_string(),
                value,
            },
            EngineError::DrawInProgress => ApiError::DrawInProgress,
            EngineError::NoDrawInProgress => ApiError::NoDrawInProgress,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
