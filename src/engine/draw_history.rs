use serde::{Deserialize, Serialize};

use crate::domain::{DrawId, Name};

/// Один завершённый розыгрыш. После создания не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawRecord {
    pub id: DrawId,
    /// Победители в порядке выбора.
    /// Короче `requested` только если пул кончился посреди розыгрыша.
    pub winners: Vec<Name>,
    pub requested: u32,
    pub allow_repeat: bool,
    /// Время финализации (мс, часы вызывающей стороны).
    pub timestamp_ms: u64,
}

impl DrawRecord {
    /// Пул иссяк раньше, чем набралось `requested` победителей.
    pub fn is_short(&self) -> bool {
        self.winners.len() < self.requested as usize
    }
}

/// История розыгрышей: новые сверху, только добавление до явного сброса.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawHistory {
    records: Vec<DrawRecord>,
}

impl DrawHistory {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    pub fn push(&mut self, record: DrawRecord) {
        self.records.insert(0, record);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Самый свежий розыгрыш.
    pub fn latest(&self) -> Option<&DrawRecord> {
        self.records.first()
    }

    /// Записи от новых к старым.
    pub fn records(&self) -> &[DrawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
