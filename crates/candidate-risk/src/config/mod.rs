use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

const DEFAULT_EMAIL_REPUTATION_URL: &str = "https://emailvalidation.abstractapi.com/v1/";
const DEFAULT_PHONE_REPUTATION_URL: &str = "https://phonevalidation.abstractapi.com/v1/";
const DEFAULT_TEXT_GENERATION_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TEXT_GENERATION_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

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
    pub providers: ProviderConfig,
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

        let timeout_secs = match env::var("SCREENING_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout)?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let providers = ProviderConfig {
            email: EndpointConfig {
                base_url: env_or("EMAIL_REPUTATION_URL", DEFAULT_EMAIL_REPUTATION_URL),
                api_key: secret("EMAIL_REPUTATION_API_KEY"),
            },
            phone: EndpointConfig {
                base_url: env_or("PHONE_REPUTATION_URL", DEFAULT_PHONE_REPUTATION_URL),
                api_key: secret("PHONE_REPUTATION_API_KEY"),
            },
            text_generation: EndpointConfig {
                base_url: env_or("TEXT_GENERATION_URL", DEFAULT_TEXT_GENERATION_URL),
                api_key: secret("TEXT_GENERATION_API_KEY"),
            },
            text_generation_model: env_or("TEXT_GENERATION_MODEL", DEFAULT_TEXT_GENERATION_MODEL),
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            providers,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn secret(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
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

/// One upstream validation provider.
#[derive(Clone)]
pub struct EndpointConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Upstream providers consulted during a screening.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub email: EndpointConfig,
    pub phone: EndpointConfig,
    pub text_generation: EndpointConfig,
    pub text_generation_model: String,
    pub timeout: Duration,
}

impl ProviderConfig {
    /// Resolves all three credentials, failing if any of them is absent.
    pub fn credentials(&self) -> Result<ProviderCredentials, ConfigError> {
        match (
            &self.email.api_key,
            &self.phone.api_key,
            &self.text_generation.api_key,
        ) {
            (Some(email), Some(phone), Some(text_generation)) => Ok(ProviderCredentials {
                email: email.clone(),
                phone: phone.clone(),
                text_generation: text_generation.clone(),
            }),
            _ => Err(ConfigError::MissingCredentials),
        }
    }
}

#[derive(Clone)]
pub struct ProviderCredentials {
    pub email: String,
    pub phone: String,
    pub text_generation: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTimeout,
    MissingCredentials,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTimeout => {
                write!(f, "SCREENING_TIMEOUT_SECS must be a positive number of seconds")
            }
            ConfigError::MissingCredentials => write!(
                f,
                "EMAIL_REPUTATION_API_KEY, PHONE_REPUTATION_API_KEY and TEXT_GENERATION_API_KEY must all be set"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidTimeout
            | ConfigError::MissingCredentials => None,
        }
    }
}
