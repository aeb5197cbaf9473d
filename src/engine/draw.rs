//! Розыгрыш призов: `Idle → Animating → Idle`.
//!
//! Две независимые фазы:
//!   1. барабан (`DecoyReel`): только картинка, свой RNG, пул читает;
//!   2. финализация (`select_winners`): один атомарный шаг в конце.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::{Confirmation, DestructiveAction, Name, RosterChange, RosterChangeKind};
use crate::engine::animation::{AnimationRules, DecoyReel};
use crate::engine::draw_history::{DrawHistory, DrawRecord};
use crate::engine::errors::EngineError;
use crate::engine::observer::RosterObserver;
use crate::engine::RandomSource;
use crate::infra::ids::IdGenerator;

/// Потолок `count` по умолчанию. Табло и барабан держат по слоту на
/// победителя, а в режиме с повторами пул размер розыгрыша не ограничивает.
pub const DEFAULT_MAX_DRAW_COUNT: u32 = 1_000;

/// Настройки одного розыгрыша.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawConfig {
    /// Сколько победителей вытянуть (`1..=max_count`).
    pub count: u32,
    /// Может ли один и тот же участник выиграть повторно.
    pub allow_repeat: bool,
}

impl DrawConfig {
    pub const fn new(count: u32, allow_repeat: bool) -> Self {
        Self { count, allow_repeat }
    }

    /// Слишком большой `count` отклоняется, а не обрезается.
    pub fn validate(&self, max_count: u32) -> Result<(), EngineError> {
        if self.count == 0 || self.count > max_count {
            return Err(EngineError::InvalidValue {
                field: "count",
                value: self.count,
            });
        }
        Ok(())
    }
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self::new(1, false)
    }
}

/// Результат чистой функции выбора.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Победители в порядке выбора.
    pub winners: Vec<Name>,
    /// Что осталось в рабочей копии пула.
    /// В режиме с повторами совпадает с исходным пулом.
    pub remaining: Vec<Name>,
}

/// Итоговый выбор победителей.
///
/// `count` раз (или пока пул не опустел) берём равномерный индекс
/// по текущему размеру пула. Без повторов выбранное имя вынимается
/// из рабочей копии: получаем простую выборку без возвращения.
/// С повторами каждый победитель независим и равномерен по всему пулу.
pub fn select_winners<R: RandomSource>(pool: &[Name], config: &DrawConfig, rng: &mut R) -> Selection {
    let mut working = pool.to_vec();
    let mut winners = Vec::with_capacity((config.count as usize).min(pool.len()));

    for _ in 0..config.count {
        if working.is_empty() {
            break;
        }

        let idx = rng.index(working.len());
        if config.allow_repeat {
            winners.push(working[idx].clone());
        } else {
            winners.push(working.remove(idx));
        }
    }

    Selection {
        winners,
        remaining: working,
    }
}

/// Фаза движка розыгрыша.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DrawPhase {
    Idle,
    Animating { config: DrawConfig, reel: DecoyReel },
}

/// Что произошло на тике.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DrawStep {
    /// Барабан крутится: новый набор "обманок".
    Frame(Vec<Name>),
    /// Барабан остановился, розыгрыш записан в историю.
    Finished(DrawRecord),
}

/// Движок розыгрыша.
///
/// Держит копию списка (для режима с повторами), отдельный пул
/// оставшихся (для режима без повторов), историю и текущее табло.
#[derive(Debug)]
pub struct DrawEngine {
    rules: AnimationRules,
    max_count: u32,
    phase: DrawPhase,
    roster: Vec<Name>,
    remaining: Vec<Name>,
    history: DrawHistory,
    display: Vec<Option<Name>>,
    ids: Arc<IdGenerator>,
}

impl DrawEngine {
    pub fn new(rules: AnimationRules, ids: Arc<IdGenerator>) -> Self {
        Self {
            rules,
            max_count: DEFAULT_MAX_DRAW_COUNT,
            phase: DrawPhase::Idle,
            roster: Vec::new(),
            remaining: Vec::new(),
            history: DrawHistory::new(),
            display: Vec::new(),
            ids,
        }
    }

    /// Другой потолок `count` (из `SessionConfig::max_draw_count`).
    pub fn with_max_count(mut self, max_count: u32) -> Self {
        self.max_count = max_count;
        self
    }

    pub fn rules(&self) -> &AnimationRules {
        &self.rules
    }

    pub fn max_count(&self) -> u32 {
        self.max_count
    }

    pub fn phase(&self) -> &DrawPhase {
        &self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, DrawPhase::Animating { .. })
    }

    /// Пул для режима без повторов.
    pub fn remaining(&self) -> &[Name] {
        &self.remaining
    }

    /// Размер активного пула для выбранного режима.
    pub fn remaining_for(&self, allow_repeat: bool) -> usize {
        if allow_repeat {
            self.roster.len()
        } else {
            self.remaining.len()
        }
    }

    pub fn history(&self) -> &DrawHistory {
        &self.history
    }

    /// Табло; `None` значит пустой слот ("???").
    pub fn display(&self) -> &[Option<Name>] {
        &self.display
    }

    /// Запустить розыгрыш. Повторный запуск во время анимации отклоняется.
    pub fn begin(&mut self, config: DrawConfig) -> Result<(), EngineError> {
        if self.is_animating() {
            return Err(EngineError::DrawInProgress);
        }

        config.validate(self.max_count)?;

        if self.roster.is_empty() {
            return Err(EngineError::EmptyRoster);
        }

        if !config.allow_repeat && self.remaining.len() < config.count as usize {
            return Err(EngineError::InsufficientPool {
                requested: config.count,
                remaining: self.remaining.len(),
            });
        }

        let slots = config.count as usize;
        self.display = vec![None; slots];
        self.phase = DrawPhase::Animating {
            config,
            reel: DecoyReel::new(slots, self.rules.draw_ticks),
        };

        info!(
            count = config.count,
            allow_repeat = config.allow_repeat,
            pool = self.remaining_for(config.allow_repeat),
            "draw started"
        );
        Ok(())
    }

    /// Один тик таймера.
    ///
    /// Из `draw_ticks` тиков первые `draw_ticks - 1` крутят барабан,
    /// последний сразу показывает победителей.
    ///
    /// `decoy_rng` нужен только барабану, `selection_rng`: только финализации.
    pub fn tick<D, S>(
        &mut self,
        decoy_rng: &mut D,
        selection_rng: &mut S,
        now_ms: u64,
    ) -> Result<DrawStep, EngineError>
    where
        D: RandomSource,
        S: RandomSource,
    {
        let (config, frame) = match &mut self.phase {
            DrawPhase::Idle => return Err(EngineError::NoDrawInProgress),
            DrawPhase::Animating { config, reel } => {
                let frame = if reel.is_last_tick() {
                    None
                } else {
                    reel.advance();
                    let pool = if config.allow_repeat {
                        &self.roster
                    } else {
                        &self.remaining
                    };
                    Some(reel.spin(pool, decoy_rng))
                };
                (*config, frame)
            }
        };

        match frame {
            Some(frame) => {
                self.display = frame.iter().cloned().map(Some).collect();
                Ok(DrawStep::Frame(frame))
            }
            None => Ok(DrawStep::Finished(self.finalize(config, selection_rng, now_ms))),
        }
    }

    /// Розыгрыш целиком за один вызов (без пауз между тиками).
    pub fn draw_now<D, S>(
        &mut self,
        config: DrawConfig,
        decoy_rng: &mut D,
        selection_rng: &mut S,
        now_ms: u64,
    ) -> Result<DrawRecord, EngineError>
    where
        D: RandomSource,
        S: RandomSource,
    {
        self.begin(config)?;
        loop {
            if let DrawStep::Finished(record) = self.tick(decoy_rng, selection_rng, now_ms)? {
                return Ok(record);
            }
        }
    }

    /// Сбросить историю и вернуть всех в пул.
    ///
    /// `Ok(false)`: пользователь отказался, ничего не поменялось.
    pub fn reset_history(&mut self, confirm: &mut impl Confirmation) -> Result<bool, EngineError> {
        if self.is_animating() {
            return Err(EngineError::DrawInProgress);
        }

        if !confirm.confirm(DestructiveAction::ResetDrawHistory) {
            debug!("draw history reset declined");
            return Ok(false);
        }

        let dropped = self.history.len();
        self.history.clear();
        self.remaining = self.roster.clone();
        self.display.clear();

        info!(dropped, pool = self.remaining.len(), "draw history reset");
        Ok(true)
    }

    fn finalize<S: RandomSource>(&mut self, config: DrawConfig, rng: &mut S, now_ms: u64) -> DrawRecord {
        let pool = if config.allow_repeat {
            &self.roster
        } else {
            &self.remaining
        };
        let selection = select_winners(pool, &config, rng);

        if !config.allow_repeat {
            self.remaining = selection.remaining;
        }

        let record = DrawRecord {
            id: self.ids.next_draw_id(),
            winners: selection.winners,
            requested: config.count,
            allow_repeat: config.allow_repeat,
            timestamp_ms: now_ms,
        };

        if record.is_short() {
            warn!(
                draw_id = record.id,
                requested = record.requested,
                drawn = record.winners.len(),
                "pool exhausted mid-draw, fewer winners returned"
            );
        }

        self.display = record.winners.iter().cloned().map(Some).collect();
        self.history.push(record.clone());
        self.phase = DrawPhase::Idle;

        info!(
            draw_id = record.id,
            winners = record.winners.len(),
            pool_left = self.remaining.len(),
            "draw finished"
        );
        record
    }
}

impl RosterObserver for DrawEngine {
    fn roster_changed(&mut self, roster: &[Name], change: &RosterChange) {
        if self.is_animating() {
            warn!(revision = change.revision, "roster changed mid-draw, pending draw aborted");
            self.phase = DrawPhase::Idle;
            self.display.clear();
        }

        self.roster = roster.to_vec();
        self.remaining = roster.to_vec();

        if let RosterChangeKind::Cleared { .. } = change.kind {
            self.history.clear();
            self.display.clear();
        }

        debug!(
            revision = change.revision,
            pool = self.remaining.len(),
            "draw pool reset after roster change"
        );
    }
}
