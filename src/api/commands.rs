use serde::{Deserialize, Serialize};

use crate::engine::{DrawConfig, GroupingConfig};

/// Команда верхнего уровня: всё, что меняет состояние сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Операции над списком участников.
    Roster(RosterCommand),

    /// Розыгрыш призов.
    Draw(DrawCommand),

    /// Разбиение на группы.
    Grouping(GroupingCommand),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RosterCommand {
    /// Добавить готовые токены (каждый будет обрезан, пустые отброшены).
    AddNames { names: Vec<String> },

    /// Многострочный текст из поля ввода: одно имя на строку.
    AddFromText { text: String },

    /// Табличные данные (уже распарсенный файл): строки ячеек.
    AddFromRows { rows: Vec<Vec<String>> },

    /// Удалить имя по позиции.
    RemoveAt { index: usize },

    /// Очистить весь список (спрашивает подтверждение).
    Clear,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DrawCommand {
    /// Запустить барабан.
    Start(DrawConfig),

    /// Тик таймера фронта. `now_ms` пойдёт в запись истории,
    /// если этот тик финализирует розыгрыш.
    Tick { now_ms: u64 },

    /// Сбросить историю и пул (спрашивает подтверждение).
    ResetHistory,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GroupingCommand {
    /// Сгенерировать новое разбиение.
    Generate(GroupingConfig),
}
