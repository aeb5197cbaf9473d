use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::confirm::{Confirmation, DestructiveAction};
use crate::domain::name::Name;

/// Что именно поменялось в списке.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RosterChangeKind {
    /// В конец добавлено `added` имён.
    Appended { added: usize },
    /// Удалено одно имя с позиции `index`.
    Removed { index: usize, name: Name },
    /// Список очищен, было `removed` имён.
    Cleared { removed: usize },
}

/// Явное событие "список изменился".
///
/// Возвращается каждой успешной мутацией `RosterStore`.
/// Координатор (`Session`) обязан прогнать его через всех наблюдателей,
/// иначе производное состояние (пул, группы) останется устаревшим.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterChange {
    /// Ревизия списка ПОСЛЕ изменения.
    pub revision: u64,
    pub kind: RosterChangeKind,
}

/// Итог `RosterStore::clear`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Список и так пуст: подтверждение не спрашивали.
    AlreadyEmpty,
    /// Пользователь отказался, список не менялся.
    Declined,
    Cleared(RosterChange),
}

impl ClearOutcome {
    pub fn change(&self) -> Option<&RosterChange> {
        match self {
            ClearOutcome::Cleared(change) => Some(change),
            _ => None,
        }
    }

    pub fn into_change(self) -> Option<RosterChange> {
        match self {
            ClearOutcome::Cleared(change) => Some(change),
            _ => None,
        }
    }
}

/// Хранилище списка участников.
///
/// Единственный источник правды: порядок вставки сохраняется
/// и важен (порядок отображения, исходный порядок перед перемешиванием).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterStore {
    names: Vec<Name>,
    revision: u64,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> &[Name] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Монотонный счётчик изменений (0: список ни разу не менялся).
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Добавить имена в конец в заданном порядке.
    ///
    /// Каждый кандидат обрезается, пустые отбрасываются.
    /// Если после фильтра ничего не осталось: no-op, `None`.
    pub fn append<I, S>(&mut self, raw: I) -> Option<RosterChange>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let accepted: Vec<Name> = raw
            .into_iter()
            .filter_map(|s| Name::parse(s.as_ref()))
            .collect();

        if accepted.is_empty() {
            debug!("roster append ignored: no non-empty names");
            return None;
        }

        let added = accepted.len();
        self.names.extend(accepted);

        info!(added, total = self.names.len(), "names appended to roster");
        Some(self.bump(RosterChangeKind::Appended { added }))
    }

    /// Удалить имя по позиции; вне диапазона: молча ничего не делаем.
    pub fn remove_at(&mut self, index: usize) -> Option<RosterChange> {
        if index >= self.names.len() {
            debug!(index, total = self.names.len(), "roster remove ignored: out of bounds");
            return None;
        }

        let name = self.names.remove(index);

        info!(index, name = %name, total = self.names.len(), "name removed from roster");
        Some(self.bump(RosterChangeKind::Removed { index, name }))
    }

    /// Очистить список целиком после подтверждения.
    ///
    /// Пустой список не трогаем и подтверждение не спрашиваем.
    pub fn clear(&mut self, confirm: &mut impl Confirmation) -> ClearOutcome {
        if self.names.is_empty() {
            debug!("roster clear ignored: already empty");
            return ClearOutcome::AlreadyEmpty;
        }

        if !confirm.confirm(DestructiveAction::ClearRoster) {
            debug!("roster clear declined");
            return ClearOutcome::Declined;
        }

        let removed = self.names.len();
        self.names.clear();

        info!(removed, "roster cleared");
        ClearOutcome::Cleared(self.bump(RosterChangeKind::Cleared { removed }))
    }

    fn bump(&mut self, kind: RosterChangeKind) -> RosterChange {
        self.revision += 1;
        RosterChange {
            revision: self.revision,
            kind,
        }
    }
}
