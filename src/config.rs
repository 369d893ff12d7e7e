//! Configuration types.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;

use crate::error::ConfigError;

/// Default IFTTT Maker event the webhook calls are posted to.
pub const DEFAULT_EVENT_NAME: &str = "list-shopping-return";

/// Default minimum spacing between two outbound webhook requests.
pub const DEFAULT_DISPATCH_INTERVAL: Duration = Duration::from_millis(10_000);

/// One entry of the `API_USERS` table.
#[derive(Debug)]
pub struct ApiUser {
    pub username: String,
    pub key: SecretString,
    /// The user's IFTTT webhooks key, appended to the outbound URL.
    pub ifttt_key: SecretString,
}

#[derive(Deserialize)]
struct RawApiUser {
    username: String,
    key: String,
    #[serde(rename = "IFTTT_KEY")]
    ifttt_key: String,
}

impl From<RawApiUser> for ApiUser {
    fn from(raw: RawApiUser) -> Self {
        Self {
            username: raw.username,
            key: SecretString::from(raw.key),
            ifttt_key: SecretString::from(raw.ifttt_key),
        }
    }
}

/// Parse the `API_USERS` JSON array.
pub fn parse_api_users(json: &str) -> Result<Vec<ApiUser>, ConfigError> {
    let raw: Vec<RawApiUser> = serde_json::from_str(json).map_err(|e| ConfigError::Json {
        key: "API_USERS".into(),
        source: e,
    })?;
    Ok(raw.into_iter().map(ApiUser::from).collect())
}

/// Build the outbound URL base for an IFTTT Maker event.
pub fn ifttt_url_base(event_name: &str) -> String {
    format!("https://maker.ifttt.com/trigger/{event_name}/with/key/")
}

/// Relay configuration.
#[derive(Debug)]
pub struct RelayConfig {
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Known callers and their webhook keys.
    pub users: Vec<ApiUser>,
    /// Outbound URL prefix; the destination key is appended to it.
    pub webhook_url_base: String,
    /// Minimum spacing between two outbound sends.
    pub dispatch_interval: Duration,
    /// Directory of static front-end files, served as the router fallback.
    pub static_dir: Option<PathBuf>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            users: Vec::new(),
            webhook_url_base: ifttt_url_base(DEFAULT_EVENT_NAME),
            dispatch_interval: DEFAULT_DISPATCH_INTERVAL,
            static_dir: None,
        }
    }
}

impl RelayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = lookup("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);

        let users = match lookup("API_USERS") {
            Some(json) if !json.trim().is_empty() => parse_api_users(&json)?,
            _ => Vec::new(),
        };

        let webhook_url_base = lookup("WEBHOOK_URL_BASE").unwrap_or_else(|| {
            let event = lookup("IFTTT_EVENT_NAME").unwrap_or_else(|| DEFAULT_EVENT_NAME.into());
            ifttt_url_base(&event)
        });

        let dispatch_interval = match lookup("OUTGOING_REQUEST_DELAY_MS") {
            Some(raw) => {
                let ms: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    key: "OUTGOING_REQUEST_DELAY_MS".into(),
                    message: format!("expected milliseconds, got {raw:?}"),
                })?;
                if ms == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: "OUTGOING_REQUEST_DELAY_MS".into(),
                        message: "interval must be greater than zero".into(),
                    });
                }
                Duration::from_millis(ms)
            }
            None => DEFAULT_DISPATCH_INTERVAL,
        };

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .or_else(|| Some(PathBuf::from("dist")))
            .filter(|p| p.is_dir());

        Ok(Self {
            port,
            users,
            webhook_url_base,
            dispatch_interval,
            static_dir,
        })
    }
}
