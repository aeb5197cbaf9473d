//! Случайное разбиение списка на группы.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{Name, RosterChange};
use crate::engine::errors::EngineError;
use crate::engine::observer::RosterObserver;
use crate::engine::RandomSource;
use crate::infra::ids::IdGenerator;

/// Как трактовать `GroupingConfig::value`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GroupMode {
    /// `value`: сколько групп нужно.
    ByGroupCount,
    /// `value`: сколько человек в группе.
    ByGroupSize,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupingConfig {
    pub mode: GroupMode,
    pub value: u32,
}

impl GroupingConfig {
    pub const fn by_group_count(count: u32) -> Self {
        Self {
            mode: GroupMode::ByGroupCount,
            value: count,
        }
    }

    pub const fn by_group_size(size: u32) -> Self {
        Self {
            mode: GroupMode::ByGroupSize,
            value: size,
        }
    }
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self::by_group_count(2)
    }
}

/// Одна группа. Порядок участников: только для отображения.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub members: Vec<Name>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Результат одного вызова `generate`. Каждый вызов полностью заменяет предыдущий.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Partition {
    pub id: u64,
    pub config: GroupingConfig,
    pub groups: Vec<Group>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Размеры групп по порядку.
    pub fn sizes(&self) -> Vec<usize> {
        self.groups.iter().map(Group::len).collect()
    }

    /// Все участники подряд, группа за группой.
    pub fn members(&self) -> impl Iterator<Item = &Name> {
        self.groups.iter().flat_map(|g| g.members.iter())
    }
}

/// Нарезать уже перемешанный список на группы.
///
/// `ByGroupCount`: n = min(value, len), имя на позиции i уходит в группу i mod n,
///   размеры групп отличаются максимум на 1.
/// `ByGroupSize`: s = min(value, len), подряд идущие куски по s,
///   последний может быть короче.
///
/// Ожидает `value >= 1`; проверка: на стороне `GroupingEngine::generate`.
pub fn partition_shuffled(shuffled: Vec<Name>, config: &GroupingConfig) -> Vec<Group> {
    if shuffled.is_empty() {
        return Vec::new();
    }

    let value = (config.value as usize).clamp(1, shuffled.len());

    match config.mode {
        GroupMode::ByGroupCount => {
            let mut groups = vec![Group::default(); value];
            for (i, name) in shuffled.into_iter().enumerate() {
                groups[i % value].members.push(name);
            }
            groups
        }
        GroupMode::ByGroupSize => shuffled
            .chunks(value)
            .map(|chunk| Group {
                members: chunk.to_vec(),
            })
            .collect(),
    }
}

/// Движок разбиения на группы.
#[derive(Debug)]
pub struct GroupingEngine {
    roster: Vec<Name>,
    partition: Option<Partition>,
    ids: Arc<IdGenerator>,
}

impl GroupingEngine {
    pub fn new(ids: Arc<IdGenerator>) -> Self {
        Self {
            roster: Vec::new(),
            partition: None,
            ids,
        }
    }

    /// Текущее разбиение (если уже генерировали и список с тех пор не менялся).
    pub fn partition(&self) -> Option<&Partition> {
        self.partition.as_ref()
    }

    /// Сгенерировать новое разбиение, заменив старое.
    ///
    /// Список и пул розыгрыша не трогаются.
    pub fn generate<R: RandomSource>(
        &mut self,
        config: GroupingConfig,
        rng: &mut R,
    ) -> Result<&Partition, EngineError> {
        if self.roster.is_empty() {
            return Err(EngineError::EmptyRoster);
        }

        if config.value == 0 {
            return Err(EngineError::InvalidValue {
                field: "value",
                value: config.value,
            });
        }

        let mut shuffled = self.roster.clone();
        rng.shuffle(&mut shuffled);

        let partition = Partition {
            id: self.ids.next_partition_id(),
            config,
            groups: partition_shuffled(shuffled, &config),
        };

        info!(
            partition_id = partition.id,
            mode = ?config.mode,
            value = config.value,
            groups = partition.len(),
            "partition generated"
        );

        Ok(&*self.partition.insert(partition))
    }

    /// Выбросить текущее разбиение.
    pub fn invalidate(&mut self) {
        if self.partition.take().is_some() {
            debug!("partition invalidated");
        }
    }
}

impl RosterObserver for GroupingEngine {
    fn roster_changed(&mut self, roster: &[Name], _change: &RosterChange) {
        self.roster = roster.to_vec();
        self.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<Name> {
        raw.iter().filter_map(|s| Name::parse(s)).collect()
    }

    #[test]
    fn round_robin_keeps_shuffled_order() {
        let groups = partition_shuffled(
            names(&["A", "B", "C", "D", "E"]),
            &GroupingConfig::by_group_count(2),
        );

        assert_eq!(groups[0].members, names(&["A", "C", "E"]));
        assert_eq!(groups[1].members, names(&["B", "D"]));
    }

    #[test]
    fn chunks_keep_shuffled_order() {
        let groups = partition_shuffled(
            names(&["A", "B", "C", "D", "E"]),
            &GroupingConfig::by_group_size(2),
        );

        assert_eq!(groups[0].members, names(&["A", "B"]));
        assert_eq!(groups[1].members, names(&["C", "D"]));
        assert_eq!(groups[2].members, names(&["E"]));
    }

    #[test]
    fn oversized_values_are_clamped_to_roster() {
        let by_count = partition_shuffled(names(&["A", "B", "C"]), &GroupingConfig::by_group_count(10));
        assert_eq!(by_count.len(), 3);
        assert!(by_count.iter().all(|g| g.len() == 1));

        let by_size = partition_shuffled(names(&["A", "B", "C"]), &GroupingConfig::by_group_size(10));
        assert_eq!(by_size.len(), 1);
        assert_eq!(by_size[0].len(), 3);
    }
}
