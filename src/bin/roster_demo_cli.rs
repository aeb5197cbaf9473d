// src/bin/roster_demo_cli.rs
//
// Скриптовый прогон одной сессии: список → розыгрыши → группы → выгрузка.
// Таймер фронта имитируем через thread::sleep.
//
// Запуск:  RUST_LOG=roster_draw_engine=debug cargo run --bin roster_demo_cli [seed]

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_draw_engine::domain::AlwaysConfirm;
use roster_draw_engine::engine::{AnimationRules, DrawConfig, DrawStep, EngineError, GroupingConfig};
use roster_draw_engine::{Session, SessionConfig};

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== ROSTER DEMO CLI ===\n");

    let seed = std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok());
    let config = SessionConfig {
        // Короткий барабан, чтобы демо не тянулось.
        animation: AnimationRules::new(20, 10, 200),
        seed,
        ..SessionConfig::default()
    };
    let rules = config.animation.clone();
    let mut session = Session::from_config(config);

    // Ввод: текстовое поле + "таблица" из файла.
    session.append_names(roster_draw_engine::infra::names_from_text(
        "Аня\nБорис\n\n  Вика  \nГлеб\n",
    ));
    session.append_names(roster_draw_engine::infra::names_from_rows(vec![
        vec!["Дина", "", "Егор"],
        vec!["Жанна", "Зоя"],
    ]));
    session.append_names(["  ", ""]);

    println!("Список ({} чел.):", session.roster().len());
    for (i, name) in session.roster().names().iter().enumerate() {
        println!("  {:>2}. {}", i, name);
    }

    // === РОЗЫГРЫШ БЕЗ ПОВТОРОВ, С АНИМАЦИЕЙ ===

    println!(
        "\nРозыгрыш: 3 победителя, без повторов (барабан ~{} мс)",
        rules.draw_duration_ms()
    );
    if let Err(err) = session.begin_draw(DrawConfig::new(3, false)) {
        println!("  Ошибка: {}", err);
    }

    // Повторный запуск во время анимации должен отклоняться.
    match session.begin_draw(DrawConfig::new(1, false)) {
        Err(EngineError::DrawInProgress) => println!("  (второй запуск отклонён: барабан крутится)"),
        other => println!("  неожиданно: {:?}", other),
    }

    loop {
        thread::sleep(Duration::from_millis(u64::from(rules.tick_interval_ms)));
        match session.tick_draw(now_ms()) {
            Ok(DrawStep::Frame(frame)) => {
                let shown: Vec<String> = frame.iter().map(|n| n.to_string()).collect();
                println!("  ... {}", shown.join(" | "));
            }
            Ok(DrawStep::Finished(record)) => {
                let winners: Vec<String> = record.winners.iter().map(|n| n.to_string()).collect();
                println!("  Победители #{}: {}", record.id, winners.join(", "));
                break;
            }
            Err(err) => {
                println!("  Ошибка тика: {}", err);
                break;
            }
        }
    }
    println!("  Осталось в пуле: {}", session.draw().remaining().len());

    // === ЕЩЁ ДВА РОЗЫГРЫША: С ПОВТОРАМИ И "НЕ ХВАТАЕТ" ===

    println!("\nРозыгрыш: 10 победителей, с повторами (мгновенно)");
    match session.draw_now(DrawConfig::new(10, true), now_ms()) {
        Ok(record) => {
            let winners: Vec<String> = record.winners.iter().map(|n| n.to_string()).collect();
            println!("  Победители #{}: {}", record.id, winners.join(", "));
        }
        Err(err) => println!("  Ошибка: {}", err),
    }

    println!("\nРозыгрыш: {} победителей, с повторами", u32::MAX);
    if let Err(err) = session.draw_now(DrawConfig::new(u32::MAX, true), now_ms()) {
        println!("  Ошибка: {}", err);
    }

    println!("\nРозыгрыш: 6 победителей, без повторов");
    if let Err(err) = session.draw_now(DrawConfig::new(6, false), now_ms()) {
        println!("  Ошибка: {}", err);
    }

    println!("\nИстория (новые сверху):");
    for record in session.draw().history().records() {
        let winners: Vec<String> = record.winners.iter().map(|n| n.to_string()).collect();
        println!(
            "  #{} | repeat={} | {}",
            record.id,
            record.allow_repeat,
            winners.join(", ")
        );
    }

    match session.reset_draw_history(&mut AlwaysConfirm) {
        Ok(true) => println!(
            "История сброшена, в пуле снова {} чел.",
            session.draw().remaining().len()
        ),
        Ok(false) => println!("Сброс отменён"),
        Err(err) => println!("Ошибка сброса: {}", err),
    }

    // === ГРУППЫ ===

    thread::sleep(Duration::from_millis(u64::from(rules.grouping_delay_ms)));

    let defaults = session.config().default_grouping;
    for config in [defaults, GroupingConfig::by_group_size(3)] {
        println!("\nГруппы: {:?} = {}", config.mode, config.value);
        match session.generate_groups(config) {
            Ok(partition) => {
                for (i, group) in partition.groups.iter().enumerate() {
                    let members: Vec<String> = group.members.iter().map(|n| n.to_string()).collect();
                    println!("  {} ({} чел.): {}", i + 1, group.len(), members.join(", "));
                }
            }
            Err(err) => println!("  Ошибка: {}", err),
        }
    }

    if let Some(table) = session.export_partition() {
        println!("\nВыгрузка:\n{}", table);
    }

    println!("=== ROSTER DEMO CLI DONE ===");
}
