mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

#[cfg(test)]
mod tests;

pub const CONFIG_DIR_ENV: &str = "VH_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".videohub";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_KEY: &str = "videoSaasUser";
const DEFAULT_SESSION_DIR: &str = "session";

const DEFAULT_AVATAR_BASE_URL: &str = "https://i.pravatar.cc/150";
const DEFAULT_SIMULATED_LATENCY_MS: u64 = 0;
const MAX_SIMULATED_LATENCY_MS: u64 = 10_000;
const DEFAULT_LOGIN_USER_ID: &str = "1";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
