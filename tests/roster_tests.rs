// tests/roster_tests.rs
//
// Хранилище списка участников.
//
// Проверяем:
//  1) append: trim, отброс пустых, порядок сохраняется, дубликаты допустимы.
//  2) append([]) и append([" ", ""]): no-op, ревизия не растёт.
//  3) remove_at вне диапазона: молча ничего.
//  4) remove_at удаляет ровно одну запись и сдвигает хвост.
//  5) clear требует подтверждения; отказ ничего не меняет; пустой список: AlreadyEmpty.
//  6) Ревизия монотонно растёт на каждой успешной мутации.

use roster_draw_engine::domain::{
    AlwaysConfirm, AlwaysDecline, ClearOutcome, DestructiveAction, Name, RosterChangeKind,
    RosterStore,
};

fn as_strs(store: &RosterStore) -> Vec<&str> {
    store.names().iter().map(Name::as_str).collect()
}

//
// TEST 1: append trims, filters and keeps order
//
#[test]
fn append_trims_filters_and_keeps_order() {
    let mut store = RosterStore::new();

    let change = store
        .append(["  Аня ", "", "Борис", "\t", "Аня"])
        .expect("non-empty input must change the roster");

    assert_eq!(change.kind, RosterChangeKind::Appended { added: 3 });
    assert_eq!(change.revision, 1);
    assert_eq!(as_strs(&store), vec!["Аня", "Борис", "Аня"]);

    store.append(vec!["Вика".to_string()]);
    assert_eq!(as_strs(&store), vec!["Аня", "Борис", "Аня", "Вика"]);
}

//
// TEST 2: blank input is a no-op
//
#[test]
fn blank_append_is_noop() {
    let mut store = RosterStore::new();
    store.append(["A", "B"]);
    let before = store.clone();

    let empty: [&str; 0] = [];
    assert!(store.append(empty).is_none());
    assert!(store.append([" ", ""]).is_none());

    assert_eq!(store, before);
    assert_eq!(store.revision(), 1);
}

//
// TEST 3: remove_at out of bounds is silent
//
#[test]
fn remove_out_of_bounds_is_silent() {
    let mut store = RosterStore::new();
    assert!(store.remove_at(0).is_none());

    store.append(["A", "B"]);
    assert!(store.remove_at(2).is_none());
    assert!(store.remove_at(usize::MAX).is_none());
    assert_eq!(as_strs(&store), vec!["A", "B"]);
}

//
// TEST 4: remove_at removes exactly one duplicate by position
//
#[test]
fn remove_at_targets_position_not_value() {
    let mut store = RosterStore::new();
    store.append(["A", "B", "A", "C"]);

    let change = store.remove_at(2).unwrap();

    assert_eq!(
        change.kind,
        RosterChangeKind::Removed {
            index: 2,
            name: Name::parse("A").unwrap()
        }
    );
    assert_eq!(as_strs(&store), vec!["A", "B", "C"]);
}

//
// TEST 5: clear is gated by confirmation
//
#[test]
fn clear_requires_confirmation() {
    let mut store = RosterStore::new();
    store.append(["A", "B", "C"]);

    assert_eq!(store.clear(&mut AlwaysDecline), ClearOutcome::Declined);
    assert_eq!(store.len(), 3);

    let mut asked = Vec::new();
    let mut oracle = |action: DestructiveAction| {
        asked.push(action);
        true
    };
    let change = store.clear(&mut oracle).into_change().unwrap();

    assert_eq!(asked, vec![DestructiveAction::ClearRoster]);
    assert_eq!(change.kind, RosterChangeKind::Cleared { removed: 3 });
    assert!(store.is_empty());

    // Пустой список: подтверждение не спрашиваем, изменений нет.
    let mut asked_again = false;
    let outcome = store.clear(&mut |_: DestructiveAction| {
        asked_again = true;
        true
    });
    assert_eq!(outcome, ClearOutcome::AlreadyEmpty);
    assert!(!asked_again);
}

//
// TEST 6: revision grows on every successful mutation only
//
#[test]
fn revision_is_monotonic() {
    let mut store = RosterStore::new();
    assert_eq!(store.revision(), 0);

    store.append(["A", "B"]);
    store.remove_at(9);
    store.remove_at(0);
    store.append([""]);
    store.clear(&mut AlwaysConfirm);

    assert_eq!(store.revision(), 3);
}
