use std::env;

use crate::level::Level;

const ENV_NDEBUG: &str = "ROTLOG_NDEBUG";
const ENV_NO_COLOR: &str = "NO_COLOR";

// ===== Настройки логгера =====

/// Флаги, задаваемые при создании логгера.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Если `false`, запрошенный уровень Debug повышается до Notice.
    pub debug_enabled: bool,
    /// Если `false`, ANSI-цвета не выводятся ни в один поток.
    pub color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            debug_enabled: true,
            color_enabled: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var(ENV_NDEBUG).ok().as_deref(),
            env::var(ENV_NO_COLOR).ok().as_deref(),
        )
    }

    fn from_vars(ndebug: Option<&str>, no_color: Option<&str>) -> Self {
        let ndebug = matches!(ndebug, Some(v) if !v.is_empty() && v != "0");
        let no_color = matches!(no_color, Some(v) if !v.is_empty());
        Config {
            debug_enabled: !ndebug,
            color_enabled: !no_color,
        }
    }

    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color_enabled = enabled;
        self
    }

    pub fn effective_level(&self, requested: Level) -> Level {
        if requested == Level::Debug && !self.debug_enabled {
            Level::Notice
        } else {
            requested
        }
    }
}

/// Режим открытия файла лога.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    /// Создать или обрезать
    #[default]
    Write,
    Append,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_upgraded_only_when_disabled() {
        let on = Config::default();
        let off = Config::default().with_debug(false);
        assert_eq!(on.effective_level(Level::Debug), Level::Debug);
        assert_eq!(off.effective_level(Level::Debug), Level::Notice);
        assert_eq!(off.effective_level(Level::Warning), Level::Warning);
    }

    #[test]
    fn reads_flags_from_vars() {
        assert_eq!(Config::from_vars(None, None), Config::default());
        assert_eq!(Config::from_vars(Some("0"), Some("")), Config::default());

        let cfg = Config::from_vars(Some("1"), Some("yes"));
        assert!(!cfg.debug_enabled);
        assert!(!cfg.color_enabled);
    }
}
