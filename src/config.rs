//! Configuration handling
//!
//! Dispatch settings come from three layers, later ones winning:
//! values captured at build time, the optional `config.json` in the platform
//! config directory, and the process environment. Blank values count as
//! missing. The file is only ever read.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// EmailJS REST endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const ENV_SERVICE_ID: &str = "EMAILJS_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "EMAILJS_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "EMAILJS_PUBLIC_KEY";
pub const ENV_ENDPOINT: &str = "EMAILJS_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "EMAILJS_TIMEOUT_SECS";
pub const ENV_PROJECTS_PATH: &str = "PORTFOLIO_PROJECTS";

/// Dispatch configuration is incomplete
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing dispatch configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Validated settings for the notification service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
    pub request_timeout: Option<Duration>,
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Notification service identifier
    pub service_id: Option<String>,
    /// Message template identifier
    pub template_id: Option<String>,
    /// Public access key
    pub public_key: Option<String>,
    /// Override for the dispatch endpoint
    pub endpoint: Option<String>,
    /// Request timeout in seconds (unset = client default)
    pub request_timeout_secs: Option<u64>,
    /// Replacement for the bundled project list
    pub projects_path: Option<PathBuf>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "portfolio", "portfolio-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let config: TuiConfig = serde_json::from_str(&content)
                    .with_context(|| format!("Invalid config file {}", path.display()))?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Values baked in when the binary was compiled
    pub fn build_time() -> Self {
        Self {
            service_id: option_env!("EMAILJS_SERVICE_ID").map(str::to_string),
            template_id: option_env!("EMAILJS_TEMPLATE_ID").map(str::to_string),
            public_key: option_env!("EMAILJS_PUBLIC_KEY").map(str::to_string),
            endpoint: option_env!("EMAILJS_ENDPOINT").map(str::to_string),
            request_timeout_secs: None,
            projects_path: None,
        }
    }

    /// Read the environment layer through `lookup`
    pub fn from_env<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let request_timeout_secs = lookup(ENV_TIMEOUT_SECS).and_then(|raw| {
            raw.trim()
                .parse::<u64>()
                .map_err(|_| tracing::warn!("Ignoring invalid {ENV_TIMEOUT_SECS}={raw:?}"))
                .ok()
        });

        Self {
            service_id: lookup(ENV_SERVICE_ID),
            template_id: lookup(ENV_TEMPLATE_ID),
            public_key: lookup(ENV_PUBLIC_KEY),
            endpoint: lookup(ENV_ENDPOINT),
            request_timeout_secs,
            projects_path: lookup(ENV_PROJECTS_PATH).map(PathBuf::from),
        }
    }

    /// Overlay `other` on top of `self`; non-blank values in `other` win
    pub fn merge(self, other: TuiConfig) -> Self {
        Self {
            service_id: non_blank(other.service_id).or(non_blank(self.service_id)),
            template_id: non_blank(other.template_id).or(non_blank(self.template_id)),
            public_key: non_blank(other.public_key).or(non_blank(self.public_key)),
            endpoint: non_blank(other.endpoint).or(non_blank(self.endpoint)),
            request_timeout_secs: other.request_timeout_secs.or(self.request_timeout_secs),
            projects_path: other
                .projects_path
                .filter(|p| !p.as_os_str().is_empty())
                .or(self.projects_path),
        }
    }

    /// Build-time values, then the config file, then the process environment
    pub fn resolve() -> Result<Self> {
        let file = Self::load()?;
        Ok(Self::build_time()
            .merge(file)
            .merge(Self::from_env(|key| std::env::var(key).ok())))
    }

    /// Check that every dispatch value is present
    pub fn dispatch_config(&self) -> std::result::Result<DispatchConfig, ConfigError> {
        let service_id = non_blank(self.service_id.clone());
        let template_id = non_blank(self.template_id.clone());
        let public_key = non_blank(self.public_key.clone());

        match (service_id, template_id, public_key) {
            (Some(service_id), Some(template_id), Some(public_key)) => Ok(DispatchConfig {
                service_id,
                template_id,
                public_key,
                endpoint: non_blank(self.endpoint.clone())
                    .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
                request_timeout: self
                    .request_timeout_secs
                    .filter(|secs| *secs > 0)
                    .map(Duration::from_secs),
            }),
            (service_id, template_id, public_key) => {
                let mut missing = Vec::new();
                if service_id.is_none() {
                    missing.push(ENV_SERVICE_ID);
                }
                if template_id.is_none() {
                    missing.push(ENV_TEMPLATE_ID);
                }
                if public_key.is_none() {
                    missing.push(ENV_PUBLIC_KEY);
                }
                Err(ConfigError::Missing(missing))
            }
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn complete() -> TuiConfig {
        TuiConfig {
            service_id: Some("service_abc".to_string()),
            template_id: Some("template_xyz".to_string()),
            public_key: Some("pk_123".to_string()),
            ..Default::default()
        }
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.service_id.is_none());
        assert!(config.template_id.is_none());
        assert!(config.public_key.is_none());
        assert!(config.endpoint.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert!(config.projects_path.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TuiConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"service_id": "svc", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.service_id, Some("svc".to_string()));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }

    #[test]
    fn test_complete_config_validates() {
        let dispatch = complete().dispatch_config().unwrap();
        assert_eq!(dispatch.service_id, "service_abc");
        assert_eq!(dispatch.template_id, "template_xyz");
        assert_eq!(dispatch.public_key, "pk_123");
        assert_eq!(dispatch.endpoint, DEFAULT_ENDPOINT);
        assert!(dispatch.request_timeout.is_none());
    }

    #[test]
    fn test_missing_values_reported_together() {
        let config = TuiConfig {
            service_id: Some("svc".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.dispatch_config(),
            Err(ConfigError::Missing(vec![ENV_TEMPLATE_ID, ENV_PUBLIC_KEY]))
        );
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let config = TuiConfig {
            public_key: Some("   ".to_string()),
            ..complete()
        };
        assert_eq!(
            config.dispatch_config(),
            Err(ConfigError::Missing(vec![ENV_PUBLIC_KEY]))
        );
    }

    #[test]
    fn test_config_error_message_lists_keys() {
        let err = ConfigError::Missing(vec![ENV_SERVICE_ID, ENV_PUBLIC_KEY]);
        assert_eq!(
            err.to_string(),
            "missing dispatch configuration: EMAILJS_SERVICE_ID, EMAILJS_PUBLIC_KEY"
        );
    }

    #[test]
    fn test_endpoint_and_timeout_overrides() {
        let config = TuiConfig {
            endpoint: Some("http://localhost:9000/send".to_string()),
            request_timeout_secs: Some(15),
            ..complete()
        };
        let dispatch = config.dispatch_config().unwrap();
        assert_eq!(dispatch.endpoint, "http://localhost:9000/send");
        assert_eq!(dispatch.request_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_zero_timeout_means_client_default() {
        let config = TuiConfig {
            request_timeout_secs: Some(0),
            ..complete()
        };
        assert!(config.dispatch_config().unwrap().request_timeout.is_none());
    }

    #[test]
    fn test_from_env_reads_known_keys() {
        let config = TuiConfig::from_env(env_from(&[
            (ENV_SERVICE_ID, "svc"),
            (ENV_TEMPLATE_ID, "tpl"),
            (ENV_PUBLIC_KEY, "key"),
            (ENV_TIMEOUT_SECS, "30"),
            (ENV_PROJECTS_PATH, "/tmp/projects.json"),
        ]));
        assert_eq!(config.service_id, Some("svc".to_string()));
        assert_eq!(config.template_id, Some("tpl".to_string()));
        assert_eq!(config.public_key, Some("key".to_string()));
        assert_eq!(config.request_timeout_secs, Some(30));
        assert_eq!(
            config.projects_path,
            Some(PathBuf::from("/tmp/projects.json"))
        );
    }

    #[test]
    fn test_from_env_ignores_invalid_timeout() {
        let config = TuiConfig::from_env(env_from(&[(ENV_TIMEOUT_SECS, "soon")]));
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_merge_later_layer_wins() {
        let file = complete();
        let env = TuiConfig::from_env(env_from(&[(ENV_SERVICE_ID, "from_env")]));

        let merged = file.merge(env);
        assert_eq!(merged.service_id, Some("from_env".to_string()));
        assert_eq!(merged.template_id, Some("template_xyz".to_string()));
    }

    #[test]
    fn test_merge_blank_does_not_override() {
        let env = TuiConfig::from_env(env_from(&[(ENV_SERVICE_ID, "")]));
        let merged = complete().merge(env);
        assert_eq!(merged.service_id, Some("service_abc".to_string()));
    }
}
