use serde::{Deserialize, Serialize};

use crate::domain::DrawId;
use crate::engine::{DrawConfig, DrawRecord, GroupMode, GroupingConfig};

/// DTO одной позиции в списке.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameEntryDto {
    /// Позиция: по ней фронт удаляет конкретную запись (дубликаты допустимы).
    pub index: usize,
    pub name: String,
}

/// DTO списка участников.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterViewDto {
    pub revision: u64,
    pub total: usize,
    pub names: Vec<NameEntryDto>,
}

/// DTO записи истории розыгрышей.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawRecordDto {
    pub id: DrawId,
    pub winners: Vec<String>,
    pub requested: u32,
    pub allow_repeat: bool,
    pub timestamp_ms: u64,
}

impl From<&DrawRecord> for DrawRecordDto {
    fn from(record: &DrawRecord) -> Self {
        Self {
            id: record.id,
            winners: record.winners.iter().map(|n| n.to_string()).collect(),
            requested: record.requested,
            allow_repeat: record.allow_repeat,
            timestamp_ms: record.timestamp_ms,
        }
    }
}

/// DTO вкладки розыгрыша.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawViewDto {
    /// Крутится ли сейчас барабан (кнопка "Draw" недоступна).
    pub animating: bool,
    /// Сколько тиков барабана осталось (0, если не крутится).
    pub ticks_left: u32,
    /// Период таймера фронта, мс.
    pub tick_interval_ms: u32,
    /// Максимум победителей в одном розыгрыше (ограничение поля ввода).
    pub max_count: u32,
    /// Всего участников.
    pub total: usize,
    /// Осталось в активном пуле для выбранного режима.
    pub remaining: usize,
    /// Табло; `None` значит пустой слот ("???").
    pub display: Vec<Option<String>>,
    /// История, новые сверху.
    pub history: Vec<DrawRecordDto>,
}

/// Значения по умолчанию для форм розыгрыша и групп.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultsDto {
    pub draw: DrawConfig,
    pub grouping: GroupingConfig,
    pub max_draw_count: u32,
}

/// DTO одной группы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupDto {
    pub label: String,
    pub size: usize,
    pub members: Vec<String>,
}

/// DTO разбиения на группы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartitionDto {
    pub id: u64,
    pub mode: GroupMode,
    pub value: u32,
    pub groups: Vec<GroupDto>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Пользователь отказался в диалоге подтверждения: ничего не поменялось.
    Declined,

    /// Команда валидна, но ничего не изменила (пустой ввод, индекс вне списка).
    Unchanged,

    /// Список изменился.
    RosterUpdated(RosterViewDto),

    /// Барабан запущен / прокрутился на тик / история сброшена.
    DrawState(DrawViewDto),

    /// Розыгрыш завершён.
    DrawFinished {
        record: DrawRecordDto,
        state: DrawViewDto,
    },

    /// Новое разбиение.
    PartitionGenerated(PartitionDto),
}
