use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::domain::RosterStore;
use crate::engine::{DrawEngine, DrawPhase, Partition};
use crate::infra::ExportOptions;

use super::dto::{
    DefaultsDto, DrawRecordDto, DrawViewDto, GroupDto, NameEntryDto, PartitionDto, RosterViewDto,
};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Текущий список участников.
    GetRoster,

    /// Состояние вкладки розыгрыша; `allow_repeat` влияет на счётчик "осталось".
    GetDrawState { allow_repeat: bool },

    /// Текущее разбиение (если есть).
    GetPartition,

    /// Текущее разбиение в виде таблицы (если есть).
    ExportPartition,

    /// Что подставить в формы при открытии вкладок.
    GetDefaults,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Roster(RosterViewDto),
    Draw(DrawViewDto),
    Partition(Option<PartitionDto>),
    Export(Option<String>),
    Defaults(DefaultsDto),
}

/// Собрать DTO списка.
pub fn build_roster_view(roster: &RosterStore) -> RosterViewDto {
    RosterViewDto {
        revision: roster.revision(),
        total: roster.len(),
        names: roster
            .names()
            .iter()
            .enumerate()
            .map(|(index, name)| NameEntryDto {
                index,
                name: name.to_string(),
            })
            .collect(),
    }
}

/// Собрать DTO вкладки розыгрыша.
///
/// Во время анимации счётчик "осталось" берём по режиму идущего розыгрыша,
/// а не по переданному флагу.
pub fn build_draw_view(engine: &DrawEngine, total: usize, allow_repeat: bool) -> DrawViewDto {
    let (ticks_left, allow_repeat) = match engine.phase() {
        DrawPhase::Idle => (0, allow_repeat),
        DrawPhase::Animating { config, reel } => (reel.ticks_left(), config.allow_repeat),
    };

    DrawViewDto {
        animating: engine.is_animating(),
        ticks_left,
        tick_interval_ms: engine.rules().tick_interval_ms,
        max_count: engine.max_count(),
        total,
        remaining: engine.remaining_for(allow_repeat),
        display: engine
            .display()
            .iter()
            .map(|slot| slot.as_ref().map(|n| n.to_string()))
            .collect(),
        history: engine.history().records().iter().map(DrawRecordDto::from).collect(),
    }
}

/// Собрать DTO разбиения; метки групп: по шаблону из настроек выгрузки.
pub fn build_partition_view(partition: &Partition, export: &ExportOptions) -> PartitionDto {
    PartitionDto {
        id: partition.id,
        mode: partition.config.mode,
        value: partition.config.value,
        groups: partition
            .groups
            .iter()
            .enumerate()
            .map(|(idx, group)| GroupDto {
                label: export.label(idx + 1),
                size: group.len(),
                members: group.members.iter().map(|n| n.to_string()).collect(),
            })
            .collect(),
    }
}

pub fn build_defaults_view(config: &SessionConfig) -> DefaultsDto {
    DefaultsDto {
        draw: config.default_draw,
        grouping: config.default_grouping,
        max_draw_count: config.max_draw_count,
    }
}
