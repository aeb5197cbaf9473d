//! Конфигурация сессии.
//!
//! Все поля необязательные: пустой JSON `{}` даёт стандартную сессию.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{AnimationRules, DrawConfig, GroupingConfig, DEFAULT_MAX_DRAW_COUNT};
use crate::infra::ExportOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Некорректный JSON конфигурации: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Недопустимое значение в конфигурации: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    pub animation: AnimationRules,
    pub export: ExportOptions,
    /// Потолок числа победителей в одном розыгрыше.
    pub max_draw_count: u32,
    /// Что подставить во фронт при открытии вкладки розыгрыша.
    pub default_draw: DrawConfig,
    /// Что подставить во фронт при открытии вкладки групп.
    pub default_grouping: GroupingConfig,
    /// Фиксированный seed делает розыгрыши воспроизводимыми, `None` значит системный RNG.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            animation: AnimationRules::default(),
            export: ExportOptions::default(),
            max_draw_count: DEFAULT_MAX_DRAW_COUNT,
            default_draw: DrawConfig::default(),
            default_grouping: GroupingConfig::default(),
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_draw_count == 0 {
            return Err(ConfigError::Invalid("max_draw_count = 0".to_string()));
        }
        if self.default_draw.validate(self.max_draw_count).is_err() {
            return Err(ConfigError::Invalid(format!(
                "default_draw.count = {} (допустимо 1..={})",
                self.default_draw.count, self.max_draw_count
            )));
        }
        if self.default_grouping.value == 0 {
            return Err(ConfigError::Invalid("default_grouping.value = 0".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GroupMode;

    #[test]
    fn empty_json_gives_standard_config() {
        let cfg = SessionConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, SessionConfig::default());
        assert_eq!(cfg.animation, AnimationRules::standard());
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.max_draw_count, DEFAULT_MAX_DRAW_COUNT);
    }

    #[test]
    fn partial_json_overrides_only_given_fields() {
        let cfg = SessionConfig::from_json_str(
            r#"{
                "animation": { "tick_interval_ms": 20, "draw_ticks": 5, "grouping_delay_ms": 0 },
                "default_grouping": { "mode": "ByGroupSize", "value": 4 },
                "seed": 42
            }"#,
        )
        .unwrap();

        assert_eq!(cfg.animation.draw_ticks, 5);
        assert_eq!(cfg.default_grouping.mode, GroupMode::ByGroupSize);
        assert_eq!(cfg.default_grouping.value, 4);
        assert_eq!(cfg.default_draw, DrawConfig::default());
        assert_eq!(cfg.seed, Some(42));
    }

    #[test]
    fn zero_defaults_are_rejected() {
        let err = SessionConfig::from_json_str(r#"{ "default_draw": { "count": 0, "allow_repeat": true } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SessionConfig::from_json_str(
            r#"{ "max_draw_count": 5, "default_draw": { "count": 6, "allow_repeat": true } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SessionConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
