use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::workflows::survey::{AcademicCalendar, DEFAULT_CUTOFF_MONTH};

/// Distinguishes runtime behavior for different stages of the service.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub survey: SurveyConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let cutoff_raw = env::var("APP_ACADEMIC_CUTOFF_MONTH")
            .unwrap_or_else(|_| DEFAULT_CUTOFF_MONTH.to_string());
        let academic_cutoff_month = cutoff_raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|month| (1..=12).contains(month))
            .ok_or_else(|| ConfigError::InvalidCutoffMonth {
                value: cutoff_raw.clone(),
            })?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            survey: SurveyConfig {
                academic_cutoff_month,
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Questionnaire settings shared by the sequencer and the classifier.
#[derive(Debug, Clone, Copy)]
pub struct SurveyConfig {
    pub academic_cutoff_month: u32,
}

impl SurveyConfig {
    pub fn calendar(&self) -> Result<AcademicCalendar, ConfigError> {
        AcademicCalendar::new(self.academic_cutoff_month).ok_or_else(|| {
            ConfigError::InvalidCutoffMonth {
                value: self.academic_cutoff_month.to_string(),
            }
        })
    }
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            academic_cutoff_month: DEFAULT_CUTOFF_MONTH,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidCutoffMonth { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidCutoffMonth { value } => write!(
                f,
                "APP_ACADEMIC_CUTOFF_MONTH must be a month number between 1 and 12, got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidCutoffMonth { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

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
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_ACADEMIC_CUTOFF_MONTH");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.survey.academic_cutoff_month, 7);
        assert_eq!(
            config.survey.calendar().expect("calendar builds"),
            AcademicCalendar::default()
        );
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn reads_cutoff_month_override() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ACADEMIC_CUTOFF_MONTH", "9");
        let config = AppConfig::load().expect("config loads");
        let calendar = config.survey.calendar().expect("calendar builds");
        assert_eq!(calendar.cutoff_month(), 9);
        reset_env();
    }

    #[test]
    fn rejects_out_of_range_cutoff_month() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ACADEMIC_CUTOFF_MONTH", "13");
        let err = AppConfig::load().expect_err("month 13 is rejected");
        assert!(matches!(err, ConfigError::InvalidCutoffMonth { ref value } if value == "13"));
        reset_env();
    }

    #[test]
    fn rejects_non_numeric_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PORT", "http");
        let err = AppConfig::load().expect_err("port must be numeric");
        assert!(matches!(err, ConfigError::InvalidPort));
        reset_env();
    }
}
