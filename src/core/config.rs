use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::features::alerts::models::Language;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub swagger: SwaggerConfig,
    pub sms: SmsConfig,
    pub outbreak: OutbreakConfig,
    pub alert: AlertConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Africa's Talking SMS gateway configuration
#[derive(Debug, Clone)]
pub struct SmsConfig {
    /// Account username; `sandbox` routes requests to the sandbox API
    pub username: String,
    pub api_key: String,
    /// Optional short code or alphanumeric sender id
    pub sender_id: Option<String>,
    pub request_timeout: Duration,
}

/// Thresholds for the two-window outbreak comparison
#[derive(Debug, Clone)]
pub struct OutbreakConfig {
    /// Length of each comparison window in days
    pub window_days: i64,
    /// Current-window count must be strictly greater than this
    pub min_cases: i64,
    /// Current-window count must be strictly greater than previous * factor
    pub growth_factor: f64,
}

/// A recipient used when a dispatch matches no subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackRecipient {
    pub phone_number: String,
    pub language: Language,
}

#[derive(Debug, Clone)]
pub struct AlertConfig {
    /// Send to `demo_recipients` when no subscriber matches the target districts.
    /// Demo scaffolding: production deployments should set this to false.
    pub demo_fallback_enabled: bool,
    pub demo_recipients: Vec<FallbackRecipient>,
    /// Maximum in-flight SMS sends per dispatch; 1 means strictly sequential
    pub send_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                tracing::warn!("Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            sms: SmsConfig::from_env()?,
            outbreak: OutbreakConfig::from_env()?,
            alert: AlertConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        Ok(Self {
            url,
            max_connections: parse_or("DB_MAX_CONNECTIONS", Self::DEFAULT_MAX_CONNECTIONS)?,
            min_connections: parse_or("DB_MIN_CONNECTIONS", Self::DEFAULT_MIN_CONNECTIONS)?,
            acquire_timeout_secs: parse_or(
                "DB_ACQUIRE_TIMEOUT_SECS",
                Self::DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?,
            idle_timeout_secs: parse_or("DB_IDLE_TIMEOUT_SECS", Self::DEFAULT_IDLE_TIMEOUT_SECS)?,
            max_lifetime_secs: parse_or("DB_MAX_LIFETIME_SECS", Self::DEFAULT_MAX_LIFETIME_SECS)?,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Malaria Surveillance API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Case reporting, outbreak detection and SMS alerting for malaria surveillance"
                .to_string()
        });

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl SmsConfig {
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

    pub fn from_env() -> Result<Self, String> {
        let username = env::var("AT_USERNAME")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "sandbox".to_string());
        let api_key = env::var("AT_API_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "sandbox".to_string());
        let sender_id = env::var("AT_SENDER_ID").ok().filter(|s| !s.is_empty());
        let timeout_secs = parse_or("AT_REQUEST_TIMEOUT_SECS", Self::DEFAULT_REQUEST_TIMEOUT_SECS)?;

        Ok(Self {
            username,
            api_key,
            sender_id,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn is_sandbox(&self) -> bool {
        self.username == "sandbox"
    }
}

impl OutbreakConfig {
    const DEFAULT_WINDOW_DAYS: i64 = 14;
    const DEFAULT_MIN_CASES: i64 = 5;
    const DEFAULT_GROWTH_FACTOR: f64 = 1.5;
    const MAX_WINDOW_DAYS: i64 = 3650;

    pub fn from_env() -> Result<Self, String> {
        let window_days = Self::checked_window_days(parse_or(
            "OUTBREAK_WINDOW_DAYS",
            Self::DEFAULT_WINDOW_DAYS,
        )?)?;

        let growth_factor = parse_or("OUTBREAK_GROWTH_FACTOR", Self::DEFAULT_GROWTH_FACTOR)?;
        if !growth_factor.is_finite() || growth_factor < 0.0 {
            return Err("OUTBREAK_GROWTH_FACTOR must be a non-negative number".to_string());
        }

        Ok(Self {
            window_days,
            min_cases: parse_or("OUTBREAK_MIN_CASES", Self::DEFAULT_MIN_CASES)?,
            growth_factor,
        })
    }

    fn checked_window_days(days: i64) -> Result<i64, String> {
        if !(1..=Self::MAX_WINDOW_DAYS).contains(&days) {
            return Err(format!(
                "OUTBREAK_WINDOW_DAYS must be between 1 and {}",
                Self::MAX_WINDOW_DAYS
            ));
        }
        Ok(days)
    }
}

impl Default for OutbreakConfig {
    fn default() -> Self {
        Self {
            window_days: Self::DEFAULT_WINDOW_DAYS,
            min_cases: Self::DEFAULT_MIN_CASES,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl AlertConfig {
    const DEFAULT_DEMO_RECIPIENTS: &'static str = "+260970000000:en,+260970000001:bem";
    const DEFAULT_SEND_CONCURRENCY: usize = 1;

    pub fn from_env() -> Result<Self, String> {
        let demo_fallback_enabled = parse_or("ALERT_DEMO_FALLBACK_ENABLED", true)?;
        let demo_recipients = parse_recipients(
            &env::var("ALERT_DEMO_RECIPIENTS")
                .unwrap_or_else(|_| Self::DEFAULT_DEMO_RECIPIENTS.to_string()),
        )?;
        let send_concurrency =
            parse_or("ALERT_SEND_CONCURRENCY", Self::DEFAULT_SEND_CONCURRENCY)?.max(1);

        if demo_fallback_enabled {
            tracing::warn!(
                "ALERT_DEMO_FALLBACK_ENABLED is on; alerts with no matching subscribers go to {} demo numbers",
                demo_recipients.len()
            );
        }

        Ok(Self {
            demo_fallback_enabled,
            demo_recipients,
            send_concurrency,
        })
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            demo_fallback_enabled: true,
            demo_recipients: parse_recipients(Self::DEFAULT_DEMO_RECIPIENTS).unwrap_or_default(),
            send_concurrency: Self::DEFAULT_SEND_CONCURRENCY,
        }
    }
}

/// Parse `phone:lang` pairs separated by commas
fn parse_recipients(raw: &str) -> Result<Vec<FallbackRecipient>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|entry| {
            let (phone, lang) = entry
                .rsplit_once(':')
                .ok_or_else(|| format!("Invalid ALERT_DEMO_RECIPIENTS entry '{}'", entry))?;
            let language = Language::from_str(lang.trim())
                .map_err(|e| format!("Invalid ALERT_DEMO_RECIPIENTS entry '{}': {}", entry, e))?;
            Ok(FallbackRecipient {
                phone_number: phone.trim().to_string(),
                language,
            })
        })
        .collect()
}

fn parse_or<T>(key: &str, default: T) -> Result<T, String>
where
    T: FromStr,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|_| format!("{} has an invalid value: {}", key, raw)),
        _ => Ok(default),
    }
}
