use std::env;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_WEAPONS_FILE: &str = "data/weapons.json";
pub const DEFAULT_ALIENS_FILE: &str = "data/aliens.json";
pub const DEFAULT_LOADOUT_FILE: &str = "data/loadout.json";
pub const DEFAULT_OUTPUT_FILE: &str = "output.csv";

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub data: DataPaths,
    pub output: PathBuf,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let data = DataPaths {
            weapons: path_var("APP_WEAPONS_FILE", DEFAULT_WEAPONS_FILE)?,
            aliens: path_var("APP_ALIENS_FILE", DEFAULT_ALIENS_FILE)?,
            loadout: path_var("APP_LOADOUT_FILE", DEFAULT_LOADOUT_FILE)?,
        };
        let output = path_var("APP_OUTPUT_FILE", DEFAULT_OUTPUT_FILE)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            data,
            output,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn path_var(name: &'static str, default: &str) -> Result<PathBuf, ConfigError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyPath { variable: name }),
        Ok(value) => Ok(PathBuf::from(value.trim())),
        Err(_) => Ok(PathBuf::from(default)),
    }
}

/// Locations of the reference data documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub weapons: PathBuf,
    pub aliens: PathBuf,
    pub loadout: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            weapons: PathBuf::from(DEFAULT_WEAPONS_FILE),
            aliens: PathBuf::from(DEFAULT_ALIENS_FILE),
            loadout: PathBuf::from(DEFAULT_LOADOUT_FILE),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyPath { variable: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPath { variable } => {
                write!(f, "{variable} must not be empty when set")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_WEAPONS_FILE");
        env::remove_var("APP_ALIENS_FILE");
        env::remove_var("APP_LOADOUT_FILE");
        env::remove_var("APP_OUTPUT_FILE");
        env::remove_var("APP_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.data, DataPaths::default());
        assert_eq!(config.output, PathBuf::from("output.csv"));
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn environment_overrides_paths() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("APP_LOADOUT_FILE", " fleet/pvp.json ");
        env::set_var("APP_OUTPUT_FILE", "reports/bounties.csv");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.environment.label(), "test");
        assert_eq!(config.data.loadout, PathBuf::from("fleet/pvp.json"));
        assert_eq!(config.data.weapons, PathBuf::from(DEFAULT_WEAPONS_FILE));
        assert_eq!(config.output, PathBuf::from("reports/bounties.csv"));
    }

    #[test]
    fn production_aliases_are_recognized() {
        assert_eq!(AppEnvironment::from_str(" PROD "), AppEnvironment::Production);
        assert_eq!(AppEnvironment::from_str("production").label(), "production");
        assert_eq!(AppEnvironment::from_str("staging"), AppEnvironment::Development);
    }

    #[test]
    fn rejects_blank_path_variables() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ALIENS_FILE", "   ");
        let error = AppConfig::load().expect_err("blank path rejected");
        reset_env();

        assert_eq!(
            error.to_string(),
            "APP_ALIENS_FILE must not be empty when set"
        );
    }
}
