use serde::{Deserialize, Serialize};

/// Разрушительные действия, перед которыми нужно спросить пользователя.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DestructiveAction {
    /// Очистить весь список участников.
    ClearRoster,
    /// Сбросить историю розыгрышей и вернуть всех в пул.
    ResetDrawHistory,
}

/// Синхронный "да/нет" оракул.
///
/// Во фронте это диалог подтверждения, в тестах и демо: константа.
pub trait Confirmation {
    fn confirm(&mut self, action: DestructiveAction) -> bool;
}

impl<F> Confirmation for F
where
    F: FnMut(DestructiveAction) -> bool,
{
    fn confirm(&mut self, action: DestructiveAction) -> bool {
        self(action)
    }
}

/// Всегда отвечает "да".
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysConfirm;

impl Confirmation for AlwaysConfirm {
    fn confirm(&mut self, _action: DestructiveAction) -> bool {
        true
    }
}

/// Всегда отвечает "нет".
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysDecline;

impl Confirmation for AlwaysDecline {
    fn confirm(&mut self, _action: DestructiveAction) -> bool {
        false
    }
}
