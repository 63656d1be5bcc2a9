//! Pooler template resolution and the pooler port policy.
//!
//! The Supabase CLI caches the project's pooler connection template under
//! `supabase/.temp/pooler-url`. That cache is preferred; otherwise one
//! authenticated call to the management API fetches the pooler config.
//! Either path failing is soft: the pipeline just stays on the direct
//! connection.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::params::DEFAULT_PORT;

/// Default management API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.supabase.com";

/// Repository-relative path of the CLI's cached pooler template.
pub const TEMPLATE_CACHE_PATH: &str = "supabase/.temp/pooler-url";

/// Timeout for the single management API call.
const API_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("supadsn/", env!("CARGO_PKG_VERSION"));

/// Supavisor port used in transaction mode.
const TRANSACTION_PORT: u16 = 6543;

/// Pooling mode, selecting the Supavisor port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoolerMode {
    /// Session pooling on port 5432 (the default).
    #[default]
    Session,
    /// Transaction pooling on port 6543.
    Transaction,
}

impl PoolerMode {
    /// Port Supavisor listens on for this mode.
    pub fn port(self) -> u16 {
        match self {
            PoolerMode::Session => DEFAULT_PORT,
            PoolerMode::Transaction => TRANSACTION_PORT,
        }
    }
}

impl FromStr for PoolerMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "session" => Ok(PoolerMode::Session),
            "transaction" => Ok(PoolerMode::Transaction),
            other => Err(format!(
                "invalid pooler mode '{other}', expected 'session' or 'transaction'"
            )),
        }
    }
}

impl std::fmt::Display for PoolerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolerMode::Session => write!(f, "session"),
            PoolerMode::Transaction => write!(f, "transaction"),
        }
    }
}

/// Pick the pooler port: an explicit override beats the mode's port.
pub fn pooler_port(override_port: Option<u16>, mode: PoolerMode) -> u16 {
    override_port.unwrap_or_else(|| mode.port())
}

/// One entry of the management API's pooler config payload.
#[derive(Debug, Deserialize)]
struct PoolerConfig {
    #[serde(default)]
    database_type: String,
    #[serde(default)]
    connection_string: Option<String>,
}

/// Client for the management API's pooler config endpoint.
#[derive(Debug)]
pub struct PoolerApi {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl PoolerApi {
    /// Build a client with the bounded timeout. `None` if the underlying
    /// HTTP client cannot be constructed.
    pub fn new(base_url: &str, token: &str) -> Option<Self> {
        let http = match reqwest::Client::builder()
            .timeout(API_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
        {
            Ok(http) => http,
            Err(error) => {
                warn!(%error, "Could not build HTTP client for pooler lookup");
                return None;
            }
        };

        Some(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Fetch the primary pooler connection template for a project.
    ///
    /// Every failure mode (network, timeout, non-200, malformed JSON, no
    /// primary entry) yields `None`.
    pub async fn fetch_primary_template(&self, project: &str) -> Option<String> {
        let url = format!(
            "{}/v1/projects/{project}/config/database/pooler",
            self.base_url
        );
        debug!(url = %url, "Fetching pooler config");

        let response = match self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "Pooler config request failed");
                return None;
            }
        };

        if response.status() != StatusCode::OK {
            warn!(status = %response.status(), "Pooler config request rejected");
            return None;
        }

        let payload: Vec<serde_json::Value> = match response.json().await {
            Ok(payload) => payload,
            Err(error) => {
                warn!(%error, "Pooler config payload was not a JSON array");
                return None;
            }
        };

        primary_connection(payload)
    }
}

/// Scan the payload for the primary database's connection template.
fn primary_connection(payload: Vec<serde_json::Value>) -> Option<String> {
    payload
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<PoolerConfig>(entry).ok())
        .find_map(|config| match config.connection_string {
            Some(template) if config.database_type == "PRIMARY" && !template.is_empty() => {
                Some(template)
            }
            _ => None,
        })
}

/// Read the CLI's cached pooler template, if the file exists and is
/// non-blank.
pub fn read_cached_template(path: &Path) -> Option<String> {
    let text = std::fs::read_to_string(path).ok()?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        debug!(path = %path.display(), "Cached pooler template is blank");
        return None;
    }
    Some(trimmed.to_string())
}

/// Obtain the pooler template: cache first, then one API call when both a
/// token and a project ref are known.
pub async fn resolve_template(
    cache_path: &Path,
    token: Option<&str>,
    api_base: &str,
    project: Option<&str>,
) -> Option<String> {
    if let Some(cached) = read_cached_template(cache_path) {
        debug!(path = %cache_path.display(), "Using cached pooler template");
        return Some(cached);
    }

    let token = token.filter(|t| !t.is_empty())?;
    let project = project.filter(|p| !p.is_empty())?;
    let api = PoolerApi::new(api_base, token)?;
    api.fetch_primary_template(project).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn port_policy_override_wins() {
        assert_eq!(pooler_port(Some(7777), PoolerMode::Transaction), 7777);
    }

    #[test]
    fn port_policy_follows_mode() {
        assert_eq!(pooler_port(None, PoolerMode::Session), 5432);
        assert_eq!(pooler_port(None, PoolerMode::Transaction), 6543);
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("session".parse::<PoolerMode>(), Ok(PoolerMode::Session));
        assert_eq!(
            "Transaction".parse::<PoolerMode>(),
            Ok(PoolerMode::Transaction)
        );
        assert!("statement".parse::<PoolerMode>().is_err());
    }

    #[test]
    fn primary_connection_picks_primary_entry() {
        let payload = vec![
            json!({"database_type": "REPLICA", "connection_string": "postgresql://replica"}),
            json!({"database_type": "PRIMARY", "connection_string": "postgresql://primary"}),
        ];
        assert_eq!(
            primary_connection(payload),
            Some("postgresql://primary".to_string())
        );
    }

    #[test]
    fn primary_connection_skips_empty_and_malformed_entries() {
        let payload = vec![
            json!("not an object"),
            json!({"database_type": "PRIMARY", "connection_string": ""}),
            json!({"database_type": "PRIMARY"}),
        ];
        assert_eq!(primary_connection(payload), None);
    }

    #[test]
    fn cached_template_read_and_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pooler-url");
        std::fs::write(&path, "postgresql://t@h:6543/postgres\n").unwrap();
        assert_eq!(
            read_cached_template(&path),
            Some("postgresql://t@h:6543/postgres".to_string())
        );
    }

    #[test]
    fn cached_template_missing_or_blank_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_cached_template(&dir.path().join("absent")), None);

        let blank = dir.path().join("blank");
        std::fs::write(&blank, "  \n").unwrap();
        assert_eq!(read_cached_template(&blank), None);
    }
}
