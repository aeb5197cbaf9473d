use std::fmt;

use serde::{Deserialize, Serialize};

/// Имя участника: обрезанная по краям, непустая строка.
///
/// Уникальность НЕ требуется: два одинаковых имени в списке
/// это два разных участника, различаемых по позиции.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Разобрать "сырой" токен: trim + отбросить пустые.
    ///
    /// Мусорный ввод не ошибка, а просто `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Name::parse(&value).ok_or("имя не может быть пустым")
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}
