//! Process configuration resolved from the environment.
//!
//! Blank values are treated as unset so that an exported-but-empty variable
//! never points the core at the working directory.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "POTATO_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "POTATO_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "POTATO_LOG_DIR";

/// Settings needed to bootstrap logging and storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite database file. `None` means no database is configured.
    pub db_path: Option<PathBuf>,
    /// One of `trace|debug|info|warn|error`; validated by `init_logging`.
    pub log_level: String,
    /// Absolute directory for rolling log files. `None` disables file logs.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads `POTATO_DB_PATH`, `POTATO_LOG_LEVEL` and `POTATO_LOG_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: non_blank(DB_PATH_ENV).map(PathBuf::from),
            log_level: non_blank(LOG_LEVEL_ENV)
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: non_blank(LOG_DIR_ENV).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = CoreConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn values_are_trimmed_and_blank_values_ignored() {
        let config = CoreConfig::from_lookup(lookup_from(&[
            (DB_PATH_ENV, "  /var/lib/potato/demo.db "),
            (LOG_LEVEL_ENV, "   "),
            (LOG_DIR_ENV, "/var/log/potato"),
        ]));

        assert_eq!(
            config.db_path,
            Some(PathBuf::from("/var/lib/potato/demo.db"))
        );
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/potato")));
    }

    #[test]
    fn explicit_level_is_kept_verbatim() {
        let config = CoreConfig::from_lookup(lookup_from(&[(LOG_LEVEL_ENV, "WARN")]));
        assert_eq!(config.log_level, "WARN");
    }
}
