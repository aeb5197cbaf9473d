//! Сессия: список участников + оба движка + RNG.
//!
//! Единственное место, где мутация списка превращается в сброс
//! производного состояния. Никаких скрытых хуков: каждая успешная
//! мутация `RosterStore` явно прогоняется через `RosterObserver`-ов.

use std::sync::Arc;

use tracing::debug;

use crate::api::{
    build_defaults_view, build_draw_view, build_partition_view, build_roster_view, ApiError,
    Command, CommandResponse, DrawCommand, DrawRecordDto, DrawViewDto, GroupingCommand, Query,
    QueryResponse, RosterCommand,
};
use crate::config::SessionConfig;
use crate::domain::{ClearOutcome, Confirmation, RosterChange, RosterStore};
use crate::engine::{
    DrawConfig, DrawEngine, DrawRecord, DrawStep, EngineError, GroupingConfig, GroupingEngine,
    Partition, RandomSource, RosterObserver,
};
use crate::infra::{
    names_from_rows, names_from_text, partition_to_table, ConfiguredRng, DeterministicRng,
    IdGenerator, SystemRng,
};

/// Одна пользовательская сессия (вкладка браузера).
///
/// Два независимых потока случайности. `selection_rng` для итогового выбора
/// и перемешивания групп, `decoy_rng` только для барабана анимации.
#[derive(Debug)]
pub struct Session<R: RandomSource> {
    config: SessionConfig,
    roster: RosterStore,
    draw: DrawEngine,
    grouping: GroupingEngine,
    /// Режим последнего запущенного розыгрыша (для счётчика "осталось").
    last_draw: DrawConfig,
    selection_rng: R,
    decoy_rng: R,
}

impl Session<ConfiguredRng> {
    /// RNG выбирается по `config.seed`.
    pub fn from_config(config: SessionConfig) -> Self {
        let (selection_rng, decoy_rng) = ConfiguredRng::pair(config.seed);
        Self::new(config, selection_rng, decoy_rng)
    }
}

impl Session<SystemRng> {
    pub fn with_system_rng(config: SessionConfig) -> Self {
        Self::new(config, SystemRng, SystemRng)
    }
}

impl Session<DeterministicRng> {
    /// Воспроизводимая сессия (тесты, реплей).
    pub fn with_seed(config: SessionConfig, seed: u64) -> Self {
        let mut selection_rng = DeterministicRng::from_seed(seed);
        let decoy_rng = selection_rng.fork();
        Self::new(config, selection_rng, decoy_rng)
    }
}

impl<R: RandomSource> Session<R> {
    pub fn new(config: SessionConfig, selection_rng: R, decoy_rng: R) -> Self {
        let ids = Arc::new(IdGenerator::new());
        Self {
            draw: DrawEngine::new(config.animation.clone(), Arc::clone(&ids))
                .with_max_count(config.max_draw_count),
            grouping: GroupingEngine::new(ids),
            roster: RosterStore::new(),
            last_draw: config.default_draw,
            config,
            selection_rng,
            decoy_rng,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }

    pub fn draw(&self) -> &DrawEngine {
        &self.draw
    }

    pub fn grouping(&self) -> &GroupingEngine {
        &self.grouping
    }

    pub fn partition(&self) -> Option<&Partition> {
        self.grouping.partition()
    }

    // ---------------------------------------------------------------------
    // Список участников
    // ---------------------------------------------------------------------

    pub fn append_names<I, S>(&mut self, raw: I) -> Option<RosterChange>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let change = self.roster.append(raw);
        self.propagate(change)
    }

    pub fn remove_name(&mut self, index: usize) -> Option<RosterChange> {
        let change = self.roster.remove_at(index);
        self.propagate(change)
    }

    pub fn clear_roster(&mut self, confirm: &mut impl Confirmation) -> ClearOutcome {
        let outcome = self.roster.clear(confirm);
        self.propagate(outcome.change().cloned());
        outcome
    }

    /// Явный переход "список изменился → пул и группы сброшены".
    fn propagate(&mut self, change: Option<RosterChange>) -> Option<RosterChange> {
        if let Some(change) = &change {
            let names = self.roster.names();
            self.draw.roster_changed(names, change);
            self.grouping.roster_changed(names, change);
        }
        change
    }

    // ---------------------------------------------------------------------
    // Розыгрыш
    // ---------------------------------------------------------------------

    pub fn begin_draw(&mut self, config: DrawConfig) -> Result<(), EngineError> {
        self.draw.begin(config)?;
        self.last_draw = config;
        Ok(())
    }

    pub fn tick_draw(&mut self, now_ms: u64) -> Result<DrawStep, EngineError> {
        self.draw
            .tick(&mut self.decoy_rng, &mut self.selection_rng, now_ms)
    }

    /// Розыгрыш без пауз: барабан прокручивается до конца за один вызов.
    pub fn draw_now(&mut self, config: DrawConfig, now_ms: u64) -> Result<DrawRecord, EngineError> {
        let record = self
            .draw
            .draw_now(config, &mut self.decoy_rng, &mut self.selection_rng, now_ms)?;
        self.last_draw = config;
        Ok(record)
    }

    pub fn reset_draw_history(&mut self, confirm: &mut impl Confirmation) -> Result<bool, EngineError> {
        self.draw.reset_history(confirm)
    }

    // ---------------------------------------------------------------------
    // Группы
    // ---------------------------------------------------------------------

    pub fn generate_groups(&mut self, config: GroupingConfig) -> Result<&Partition, EngineError> {
        self.grouping.generate(config, &mut self.selection_rng)
    }

    /// Текущее разбиение в виде таблицы.
    pub fn export_partition(&self) -> Option<String> {
        self.grouping
            .partition()
            .map(|p| partition_to_table(p, &self.config.export))
    }

    // ---------------------------------------------------------------------
    // API
    // ---------------------------------------------------------------------

    pub fn handle_command(
        &mut self,
        command: Command,
        confirm: &mut impl Confirmation,
    ) -> Result<CommandResponse, ApiError> {
        debug!(?command, "handling command");

        match command {
            Command::Roster(cmd) => Ok(self.handle_roster_command(cmd, confirm)),
            Command::Draw(cmd) => self.handle_draw_command(cmd, confirm),
            Command::Grouping(GroupingCommand::Generate(config)) => {
                let partition = self.grouping.generate(config, &mut self.selection_rng)?;
                Ok(CommandResponse::PartitionGenerated(build_partition_view(
                    partition,
                    &self.config.export,
                )))
            }
        }
    }

    /// То же, что `handle_command`, но команда приходит JSON-строкой.
    pub fn handle_command_json(
        &mut self,
        raw: &str,
        confirm: &mut impl Confirmation,
    ) -> Result<CommandResponse, ApiError> {
        let command: Command = serde_json::from_str(raw)?;
        self.handle_command(command, confirm)
    }

    pub fn handle_query(&self, query: &Query) -> QueryResponse {
        match query {
            Query::GetRoster => QueryResponse::Roster(build_roster_view(&self.roster)),
            Query::GetDrawState { allow_repeat } => QueryResponse::Draw(build_draw_view(
                &self.draw,
                self.roster.len(),
                *allow_repeat,
            )),
            Query::GetPartition => QueryResponse::Partition(
                self.grouping
                    .partition()
                    .map(|p| build_partition_view(p, &self.config.export)),
            ),
            Query::ExportPartition => QueryResponse::Export(self.export_partition()),
            Query::GetDefaults => QueryResponse::Defaults(build_defaults_view(&self.config)),
        }
    }

    fn handle_roster_command(
        &mut self,
        cmd: RosterCommand,
        confirm: &mut impl Confirmation,
    ) -> CommandResponse {
        let change = match cmd {
            RosterCommand::AddNames { names } => self.append_names(names),
            RosterCommand::AddFromText { text } => self.append_names(names_from_text(&text)),
            RosterCommand::AddFromRows { rows } => self.append_names(names_from_rows(rows)),
            RosterCommand::RemoveAt { index } => self.remove_name(index),
            RosterCommand::Clear => match self.clear_roster(confirm) {
                ClearOutcome::Declined => return CommandResponse::Declined,
                outcome => outcome.into_change(),
            },
        };

        match change {
            Some(_) => CommandResponse::RosterUpdated(build_roster_view(&self.roster)),
            None => CommandResponse::Unchanged,
        }
    }

    fn handle_draw_command(
        &mut self,
        cmd: DrawCommand,
        confirm: &mut impl Confirmation,
    ) -> Result<CommandResponse, ApiError> {
        match cmd {
            DrawCommand::Start(config) => {
                self.begin_draw(config)?;
                Ok(CommandResponse::DrawState(self.draw_view()))
            }
            DrawCommand::Tick { now_ms } => match self.tick_draw(now_ms)? {
                DrawStep::Frame(_) => Ok(CommandResponse::DrawState(self.draw_view())),
                DrawStep::Finished(record) => Ok(CommandResponse::DrawFinished {
                    record: DrawRecordDto::from(&record),
                    state: self.draw_view(),
                }),
            },
            DrawCommand::ResetHistory => {
                if self.reset_draw_history(confirm)? {
                    Ok(CommandResponse::DrawState(self.draw_view()))
                } else {
                    Ok(CommandResponse::Declined)
                }
            }
        }
    }

    fn draw_view(&self) -> DrawViewDto {
        build_draw_view(&self.draw, self.roster.len(), self.last_draw.allow_repeat)
    }
}
