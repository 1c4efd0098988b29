use std::env;
use std::time::Duration;
use thiserror::Error;

pub const LOG_LEVEL_VAR: &str = "FORM_INFER_LOG_LEVEL";
pub const ANALYSIS_DELAY_VAR: &str = "FORM_INFER_ANALYSIS_DELAY_MS";

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct InferConfig {
    pub telemetry: TelemetryConfig,
    /// Pause before analysis starts. Cosmetic; zero disables it.
    pub analysis_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl InferConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let log_level = env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "info".to_string());

        let analysis_delay = match env::var(ANALYSIS_DELAY_VAR) {
            Ok(raw) => {
                let millis = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidDelay { value: raw.clone() })?;
                Duration::from_millis(millis)
            }
            Err(_) => Duration::ZERO,
        };

        Ok(Self {
            telemetry: TelemetryConfig { log_level },
            analysis_delay,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("FORM_INFER_ANALYSIS_DELAY_MS must be a whole number of milliseconds, got '{value}'")]
    InvalidDelay { value: String },
}
