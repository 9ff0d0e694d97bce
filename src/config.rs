use std::env;
use std::fmt;

/// Port the service listens on when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8001;

/// Sender address used for SMTP probing when `VERIFIER_EMAIL` is not set.
pub const DEFAULT_VERIFIER_EMAIL: &str = "noreply@example.com";

/// # Service Settings
///
/// Process-wide configuration, built once at startup from environment
/// variables (a `.env` file is honored when present) and immutable
/// thereafter.
///
/// ## Recognized Variables
/// - `PORT`: TCP port to listen on (default `8001`)
/// - `VERIFIER_EMAIL`: sender address used when probing SMTP servers
///   (default `noreply@example.com`)
/// - `SMTP_SAFE_CHECK`: enables the stricter SMTP deliverability mode;
///   accepts `true`/`false`, `1`/`0`, `yes`/`no` (default off)
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub port: u16,
    pub verifier_email: String,
    pub smtp_safe_check: bool,
}

/// Rejected startup configuration. Any variant is fatal: the process must
/// not begin serving with a partially understood environment.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidFlag(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(value) => {
                write!(f, "PORT must be an integer between 1 and 65535, got {value:?}")
            }
            ConfigError::InvalidFlag(value) => {
                write!(f, "SMTP_SAFE_CHECK must be a boolean, got {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::build(
            env::var("PORT").ok(),
            env::var("VERIFIER_EMAIL").ok(),
            env::var("SMTP_SAFE_CHECK").ok(),
        )
    }

    fn build(
        port: Option<String>,
        verifier_email: Option<String>,
        smtp_safe_check: Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .ok()
                .filter(|p| *p != 0)
                .ok_or(ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let smtp_safe_check = match smtp_safe_check {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag(raw))?,
            None => false,
        };

        Ok(Self {
            port,
            verifier_email: verifier_email
                .unwrap_or_else(|| DEFAULT_VERIFIER_EMAIL.to_string()),
            smtp_safe_check,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
