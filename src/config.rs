//! Support for configuration options
//!
//! Settings have defaults, and can be overridden by environment variables.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::store;
use crate::traits::TaskStore;

/// The environment variable that tells where tasks are stored.
/// Its extension picks the file format (`.json` for a [`JsonCache`](crate::store::JsonCache), anything else for a [`CsvFile`](crate::store::CsvFile))
pub const TASKS_FILE_VAR: &str = "MY_TASKS_FILE";
/// The environment variable that tells where log lines are written. Unset or empty means stderr
pub const LOG_FILE_VAR: &str = "MY_TASKS_LOG";

pub const DEFAULT_TASKS_FILE: &str = "tasks.csv";

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// The file tasks are loaded from and saved to
    pub tasks_file: PathBuf,
    /// Where to write log lines (stderr if `None`)
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tasks_file: PathBuf::from(DEFAULT_TASKS_FILE),
            log_file: None,
        }
    }
}

impl Settings {
    /// Default settings, overridden by the process environment
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var_os(TASKS_FILE_VAR),
            std::env::var_os(LOG_FILE_VAR),
        )
    }

    fn from_vars(tasks_file: Option<OsString>, log_file: Option<OsString>) -> Self {
        let mut settings = Self::default();
        if let Some(path) = tasks_file.filter(|p| p.is_empty() == false) {
            settings.tasks_file = PathBuf::from(path);
        }
        settings.log_file = log_file
            .filter(|p| p.is_empty() == false)
            .map(PathBuf::from);
        settings
    }

    /// The store for the configured task file
    pub fn store(&self) -> Box<dyn TaskStore> {
        store::open(&self.tasks_file)
    }

    /// The log level used when `RUST_LOG` is not set.
    /// Only warnings reach stderr, so that they do not clutter the menu
    pub fn default_log_level(&self) -> &'static str {
        match self.log_file {
            None => "warn",
            Some(_) => "info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::Path;

    #[test]
    fn defaults() {
        let settings = Settings::from_vars(None, None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.store().path(), Path::new("tasks.csv"));
    }

    #[test]
    fn overrides() {
        let settings = Settings::from_vars(Some("/tmp/list.json".into()), Some("todo_app.log".into()));
        assert_eq!(settings.tasks_file, PathBuf::from("/tmp/list.json"));
        assert_eq!(settings.log_file, Some(PathBuf::from("todo_app.log")));
    }

    #[test]
    fn empty_values_are_ignored() {
        let settings = Settings::from_vars(Some("".into()), Some("".into()));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn log_level_depends_on_the_log_file() {
        assert_eq!(Settings::default().default_log_level(), "warn");
        let settings = Settings::from_vars(None, Some("todo_app.log".into()));
        assert_eq!(settings.default_log_level(), "info");
    }
}
