//! Auth-backend and router configuration.
//!
//! The wasm bundle has no process environment, so values are baked in at
//! build time through `option_env!`. `from_vars` carries the parsing and
//! validation so it can be exercised with explicit inputs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use url::Url;

/// Prefix and suffix of the key the auth SDK persists its session under.
const STORAGE_KEY_PREFIX: &str = "sb-";
const STORAGE_KEY_SUFFIX: &str = "-auth-token";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid SUPABASE_URL {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("SUPABASE_ANON_KEY is required when SUPABASE_URL is set")]
    MissingAnonKey,
}

/// Where and how to reach the session backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub api_url: Url,
    pub anon_key: String,
    /// `localStorage` key holding the persisted session.
    pub storage_key: String,
}

impl BackendConfig {
    /// `GET` endpoint returning the user for a bearer token.
    pub fn user_endpoint(&self) -> String {
        format!("{}/auth/v1/user", self.api_url.as_str().trim_end_matches('/'))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthConfig {
    /// `None` means no backend is configured and nobody is ever signed in.
    pub backend: Option<BackendConfig>,
    /// Router base path, empty or `/segment[/segment]` without a trailing slash.
    pub base_path: String,
}

impl AuthConfig {
    /// Build config from build-time environment variables.
    ///
    /// Optional:
    /// - `SUPABASE_URL`: backend base URL; absent disables session lookups
    /// - `SUPABASE_ANON_KEY`: required alongside `SUPABASE_URL`
    /// - `APP_BASE_PATH`: router base path (default: empty)
    ///
    /// # Errors
    ///
    /// See [`AuthConfig::from_vars`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            option_env!("SUPABASE_URL"),
            option_env!("SUPABASE_ANON_KEY"),
            option_env!("APP_BASE_PATH"),
        )
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the URL does not parse or is not
    /// http(s), and `ConfigError::MissingAnonKey` if a URL is given without a
    /// key.
    pub fn from_vars(url: Option<&str>, anon_key: Option<&str>, base_path: Option<&str>) -> Result<Self, ConfigError> {
        let backend = match url.map(str::trim).filter(|u| !u.is_empty()) {
            None => None,
            Some(raw) => {
                let api_url = parse_api_url(raw)?;
                let anon_key = anon_key
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .ok_or(ConfigError::MissingAnonKey)?
                    .to_owned();
                let storage_key = storage_key_for(&api_url);
                Some(BackendConfig { api_url, anon_key, storage_key })
            }
        };
        Ok(Self { backend, base_path: normalize_base_path(base_path.unwrap_or_default()) })
    }
}

fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl { value: raw.to_owned(), reason };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_owned()));
    }
    Ok(url)
}

/// `sb-<project-ref>-auth-token`, where the project ref is the first label of
/// the backend host.
fn storage_key_for(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    let project_ref = host.split('.').next().unwrap_or(host);
    format!("{STORAGE_KEY_PREFIX}{project_ref}{STORAGE_KEY_SUFFIX}")
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
