use chrono_tz::Tz;

use super::clock::SystemClock;

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | PRICING_TIMEZONE | UTC | Business timezone for promotion windows |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Example
///
/// ```ignore
/// PRICING_TIMEZONE=Europe/Madrid LOG_LEVEL=debug cargo test
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Timezone in which promotion date and daily windows are evaluated
    pub timezone: Tz,
    pub log_level: String,
    /// Log file directory, stdout only when unset
    pub log_dir: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Missing or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        let timezone = std::env::var("PRICING_TIMEZONE")
            .ok()
            .map(|raw| parse_timezone(&raw))
            .unwrap_or(Tz::UTC);

        Self {
            timezone,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the timezone, typically in tests
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Wall clock in the configured business timezone
    pub fn system_clock(&self) -> SystemClock {
        SystemClock::new(self.timezone)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            log_level: "info".into(),
            log_dir: None,
            environment: "development".into(),
        }
    }
}

/// Parse an IANA timezone name, falling back to UTC
pub fn parse_timezone(raw: &str) -> Tz {
    raw.trim().parse::<Tz>().unwrap_or_else(|e| {
        tracing::warn!(
            "Failed to parse PRICING_TIMEZONE '{}': {}, falling back to UTC",
            raw,
            e
        );
        Tz::UTC
    })
}
