// tests/grouping_tests.rs
//
// Движок разбиения на группы.
//
// Проверяем:
//  1) ByGroupCount, 7 имён / 3 группы -> размеры {3,2,2}, каждый ровно один раз.
//  2) ByGroupSize, 5 имён / по 2 -> [2,2,1], каждый ровно один раз.
//  3) Свойства на диапазоне размеров списка и значений.
//  4) EmptyRoster / InvalidValue, прошлое разбиение при ошибке не трогается.
//  5) Новое разбиение заменяет старое; изменение списка его сбрасывает.
//  6) Перемешивание равномерно (все 6 перестановок из 3 имён).

use std::collections::HashMap;
use std::sync::Arc;

use roster_draw_engine::domain::{Name, RosterStore};
use roster_draw_engine::engine::{
    EngineError, GroupMode, GroupingConfig, GroupingEngine, RandomSource, RosterObserver,
};
use roster_draw_engine::infra::{DeterministicRng, IdGenerator};

fn setup(names: &[&str]) -> (RosterStore, GroupingEngine) {
    let mut store = RosterStore::new();
    let mut engine = GroupingEngine::new(Arc::new(IdGenerator::new()));
    if let Some(change) = store.append(names) {
        engine.roster_changed(store.names(), &change);
    }
    (store, engine)
}

fn roster_of(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("P{i:02}")).collect()
}

fn sorted(v: impl IntoIterator<Item = Name>) -> Vec<Name> {
    let mut v: Vec<Name> = v.into_iter().collect();
    v.sort();
    v
}

//
// TEST 1: 7 names into 3 groups
//
#[test]
fn seven_names_three_groups() {
    let (store, mut engine) = setup(&["A", "B", "C", "D", "E", "F", "G"]);
    let mut rng = DeterministicRng::from_seed(1);

    let partition = engine
        .generate(GroupingConfig::by_group_count(3), &mut rng)
        .unwrap();

    assert_eq!(partition.len(), 3);
    let mut sizes = partition.sizes();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![2, 2, 3]);
    assert_eq!(
        sorted(partition.members().cloned()),
        sorted(store.names().iter().cloned())
    );
}

//
// TEST 2: 5 names in groups of 2
//
#[test]
fn five_names_groups_of_two() {
    let (store, mut engine) = setup(&["A", "B", "C", "D", "E"]);
    let mut rng = DeterministicRng::from_seed(2);

    let partition = engine
        .generate(GroupingConfig::by_group_size(2), &mut rng)
        .unwrap();

    assert_eq!(partition.sizes(), vec![2, 2, 1]);
    assert_eq!(
        sorted(partition.members().cloned()),
        sorted(store.names().iter().cloned())
    );
}

//
// TEST 3: size properties over many roster sizes and values
//
#[test]
fn partition_properties_hold_for_all_small_inputs() {
    let mut rng = DeterministicRng::from_seed(3);

    for len in 1..=13usize {
        let raw = roster_of(len);
        let mut store = RosterStore::new();
        let mut engine = GroupingEngine::new(Arc::new(IdGenerator::new()));
        let change = store.append(&raw).unwrap();
        engine.roster_changed(store.names(), &change);
        let expected = sorted(store.names().iter().cloned());

        for value in 1..=15u32 {
            // По числу групп: ровно min(value, len) групп, размеры floor/ceil.
            let p = engine
                .generate(GroupingConfig::by_group_count(value), &mut rng)
                .unwrap();
            let n = (value as usize).min(len);
            assert_eq!(p.len(), n);
            let (lo, hi) = (len / n, (len + n - 1) / n);
            assert!(p.sizes().iter().all(|s| *s == lo || *s == hi), "len={len} value={value}");
            assert_eq!(sorted(p.members().cloned()), expected);

            // По размеру группы: все, кроме последней, размера s; последняя len mod s (или s).
            let p = engine
                .generate(GroupingConfig::by_group_size(value), &mut rng)
                .unwrap();
            let s = (value as usize).min(len);
            let sizes = p.sizes();
            let (last, head) = sizes.split_last().unwrap();
            assert!(head.iter().all(|x| *x == s), "len={len} value={value}");
            let tail = if len % s == 0 { s } else { len % s };
            assert_eq!(*last, tail);
            assert_eq!(sorted(p.members().cloned()), expected);
        }
    }
}

//
// TEST 4: precondition failures keep the previous partition
//
#[test]
fn errors_leave_previous_partition_intact() {
    let (_store, mut engine) = setup(&[]);
    let mut rng = DeterministicRng::from_seed(4);
    assert_eq!(
        engine.generate(GroupingConfig::by_group_count(2), &mut rng).unwrap_err(),
        EngineError::EmptyRoster
    );

    let (_store, mut engine) = setup(&["A", "B", "C"]);
    let first = engine
        .generate(GroupingConfig::by_group_count(2), &mut rng)
        .unwrap()
        .clone();

    let err = engine
        .generate(
            GroupingConfig {
                mode: GroupMode::ByGroupSize,
                value: 0,
            },
            &mut rng,
        )
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidValue {
            field: "value",
            value: 0
        }
    );
    assert_eq!(engine.partition(), Some(&first));
}

//
// TEST 5: replacement and invalidation
//
#[test]
fn new_partition_replaces_old_and_roster_change_invalidates() {
    let (mut store, mut engine) = setup(&["A", "B", "C", "D"]);
    let mut rng = DeterministicRng::from_seed(5);

    let first_id = engine
        .generate(GroupingConfig::by_group_count(2), &mut rng)
        .unwrap()
        .id;
    let second = engine
        .generate(GroupingConfig::by_group_size(3), &mut rng)
        .unwrap();
    assert!(second.id > first_id);
    assert_eq!(second.config, GroupingConfig::by_group_size(3));
    assert_eq!(engine.partition().unwrap().sizes(), vec![3, 1]);

    let change = store.remove_at(0).unwrap();
    engine.roster_changed(store.names(), &change);
    assert!(engine.partition().is_none());

    let p = engine
        .generate(GroupingConfig::by_group_count(3), &mut rng)
        .unwrap();
    assert_eq!(p.members().count(), 3);
}

//
// TEST 6: shuffle is uniform over permutations
//
#[test]
fn shuffle_is_uniform_over_permutations() {
    let mut rng = DeterministicRng::from_seed(6);
    let mut counts: HashMap<Vec<u8>, u32> = HashMap::new();

    for _ in 0..6_000 {
        let mut v = vec![1u8, 2, 3];
        rng.shuffle(&mut v);
        *counts.entry(v).or_default() += 1;
    }

    assert_eq!(counts.len(), 6);
    for (perm, n) in &counts {
        assert!((800..=1200).contains(n), "perm {:?} seen {} times", perm, n);
    }
}
