use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_console: bool,
    pub storage_root: String,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    /// Loads `env_path` (if it exists) into the process environment and builds
    /// the configuration. Later calls return the instance built by the first one.
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();
        CONFIG.get_or_init(Self::from_env)
    }

    /// Returns the process configuration, building it from the environment
    /// if `init` was never called.
    pub fn get() -> &'static Self {
        CONFIG.get_or_init(Self::from_env)
    }

    pub fn from_env() -> Self {
        let project_name = env::var("PROJECT_NAME").unwrap_or_else(|_| "code-evaluator".into());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/evaluator.log".into());
        let log_to_console = env::var("LOG_TO_CONSOLE")
            .map(|v| v != "false")
            .unwrap_or(true);
        let storage_root =
            env::var("STORAGE_ROOT").unwrap_or_else(|_| "./data/exercises".into());

        Config {
            project_name,
            log_level,
            log_file,
            log_to_console,
            storage_root,
        }
    }
}
