//! Выгрузка разбиения в табличный текст.
//!
//! Одна строка на группу: метка группы + участники через разделитель.
//! Кодировка файла и скачивание: забота фронта.

use serde::{Deserialize, Serialize};

use crate::engine::grouping::Partition;

/// Настройки выгрузки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExportOptions {
    /// Заголовок колонки с меткой группы; `None` вместе с `members_header`
    /// отключает строку заголовка.
    pub group_header: Option<String>,
    pub members_header: Option<String>,
    /// Шаблон метки, `{n}` заменяется номером группы с 1.
    pub label_template: String,
    /// Разделитель участников внутри ячейки.
    pub member_delimiter: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            group_header: Some("Group".to_string()),
            members_header: Some("Members".to_string()),
            label_template: "Group {n}".to_string(),
            member_delimiter: ", ".to_string(),
        }
    }
}

impl ExportOptions {
    /// Метка группы по её номеру (с 1).
    pub fn label(&self, number: usize) -> String {
        self.label_template.replace("{n}", &number.to_string())
    }
}

/// Сформировать таблицу (CSV-совместимую: каждая ячейка в кавычках,
/// кавычки внутри удваиваются).
pub fn partition_to_table(partition: &Partition, options: &ExportOptions) -> String {
    let mut out = String::new();

    if options.group_header.is_some() || options.members_header.is_some() {
        push_row(
            &mut out,
            options.group_header.as_deref().unwrap_or_default(),
            options.members_header.as_deref().unwrap_or_default(),
        );
    }

    for (idx, group) in partition.groups.iter().enumerate() {
        let members = group
            .members
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(&options.member_delimiter);
        push_row(&mut out, &options.label(idx + 1), &members);
    }

    out
}

fn push_row(out: &mut String, label: &str, members: &str) {
    out.push_str(&quote(label));
    out.push(',');
    out.push_str(&quote(members));
    out.push('\n');
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}
