//! Configuration management for the server.

use folio_engine::{CarouselConfig, DEFAULT_SWIPE_THRESHOLD_PX};
use std::env;
use std::path::PathBuf;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// JSON file holding the portfolio content
    pub portfolio_path: PathBuf,
    /// Built site to serve for unmatched paths
    pub static_dir: Option<PathBuf>,
    /// Carousel options used by the carousel endpoints
    pub carousel: CarouselConfig,
    /// Where contact messages go
    pub delivery: DeliveryConfig,
}

/// Contact message delivery target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryConfig {
    /// Send through the EmailJS REST API
    EmailJs(EmailJsConfig),
    /// Only record messages in the server log
    Log,
}

/// EmailJS credentials and recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Access token for accounts that require it on server-side calls
    pub private_key: Option<String>,
    /// Address the template sends to
    pub to_email: String,
}

const EMAILJS_VARS: [&str; 4] = [
    "EMAILJS_SERVICE_ID",
    "EMAILJS_TEMPLATE_ID",
    "EMAILJS_PUBLIC_KEY",
    "CONTACT_TO_EMAIL",
];

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let portfolio_path = lookup("PORTFOLIO_PATH")
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingPortfolioPath)?;

        let static_dir = lookup("STATIC_DIR").map(PathBuf::from);

        let swipe_threshold_px = match lookup("SWIPE_THRESHOLD_PX") {
            Some(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|px| px.is_finite() && *px >= 0.0)
                .ok_or(ConfigError::InvalidSwipeThreshold)?,
            None => DEFAULT_SWIPE_THRESHOLD_PX,
        };
        let carousel = CarouselConfig::default().with_swipe_threshold(swipe_threshold_px);

        let delivery = Self::delivery_from_lookup(&lookup)?;

        Ok(Self {
            host,
            port,
            portfolio_path,
            static_dir,
            carousel,
            delivery,
        })
    }

    fn delivery_from_lookup(
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<DeliveryConfig, ConfigError> {
        let values = EMAILJS_VARS.map(|key| lookup(key).filter(|v| !v.is_empty()));

        match values {
            [Some(service_id), Some(template_id), Some(public_key), Some(to_email)] => {
                Ok(DeliveryConfig::EmailJs(EmailJsConfig {
                    service_id,
                    template_id,
                    public_key,
                    private_key: lookup("EMAILJS_PRIVATE_KEY").filter(|v| !v.is_empty()),
                    to_email,
                }))
            }
            [None, None, None, None] => Ok(DeliveryConfig::Log),
            values => {
                let missing: Vec<&str> = EMAILJS_VARS
                    .iter()
                    .zip(&values)
                    .filter(|(_, value)| value.is_none())
                    .map(|(key, _)| *key)
                    .collect();
                Err(ConfigError::PartialEmailJs(missing.join(", ")))
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORTFOLIO_PATH environment variable is required")]
    MissingPortfolioPath,

    #[error("Invalid PORT value")]
    InvalidPort,

    #[error("Invalid SWIPE_THRESHOLD_PX value")]
    InvalidSwipeThreshold,

    #[error("EmailJS delivery is partially configured, missing: {0}")]
    PartialEmailJs(String),
}
