use std::env;
use std::fmt;

pub const DEFAULT_TITLE: &str = "Sweet Surrender";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

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
}

/// Top-level configuration for a console session.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub console: ConsoleConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("BAKERY_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level =
            env::var("BAKERY_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::EmptyLogLevel);
        }

        let title = env::var("BAKERY_NAME")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            console: ConsoleConfig { title },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Presentation settings for the menu loop.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub title: String,
}

impl ConsoleConfig {
    /// Heading printed above the menu, e.g. `Sweet Surrender Inventory`.
    pub fn menu_heading(&self) -> String {
        format!("{} Inventory", self.title)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyLogLevel,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyLogLevel => write!(f, "BAKERY_LOG_LEVEL must not be blank"),
        }
    }
}

impl std::error::Error for ConfigError {}
