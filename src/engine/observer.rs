use crate::domain::{Name, RosterChange};

/// Контракт "список изменился → производное состояние сброшено".
///
/// Никаких скрытых реактивных хуков: координатор сам вызывает
/// `roster_changed` у каждого наблюдателя после успешной мутации.
pub trait RosterObserver {
    /// `roster`: уже новое содержимое списка.
    fn roster_changed(&mut self, roster: &[Name], change: &RosterChange);
}
