//! Object storage settings.

use bandroom_core::env::{self, ConfigError};

/// Default public URL prefix for uploaded objects.
pub const DEFAULT_PUBLIC_BASE_URL: &str = "https://storage.googleapis.com";

/// Default upload limit (20 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Settings for the optional media bucket.
///
/// When `enabled` is false the media routes answer 503 and no client is
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub enabled: bool,
    pub bucket: String,
    pub region: String,
    /// Custom S3-compatible endpoint. Unset means AWS S3. Setting it also
    /// switches to path-style addressing.
    pub endpoint: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub public_base_url: String,
    pub max_upload_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            bucket: String::new(),
            region: "auto".to_string(),
            endpoint: None,
            access_key_id: None,
            secret_access_key: None,
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl StorageConfig {
    /// Load from a lookup function.
    ///
    /// | Env var                        | Default                          |
    /// |--------------------------------|----------------------------------|
    /// | `STORAGE_ENABLED`              | `false`                          |
    /// | `STORAGE_BUCKET`               | required when enabled            |
    /// | `STORAGE_REGION`               | `auto`                           |
    /// | `STORAGE_ENDPOINT`             | unset                            |
    /// | `STORAGE_ACCESS_KEY_ID`        | unset (default credential chain) |
    /// | `STORAGE_SECRET_ACCESS_KEY`    | unset                            |
    /// | `STORAGE_PUBLIC_BASE_URL`      | `https://storage.googleapis.com` |
    /// | `STORAGE_MAX_UPLOAD_BYTES`     | `20971520`                       |
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let enabled = env::flag(lookup, "STORAGE_ENABLED", defaults.enabled)?;
        let bucket = if enabled {
            env::required(lookup, "STORAGE_BUCKET")?
        } else {
            env::optional(lookup, "STORAGE_BUCKET").unwrap_or_default()
        };

        let access_key_id = env::optional(lookup, "STORAGE_ACCESS_KEY_ID");
        let secret_access_key = env::optional(lookup, "STORAGE_SECRET_ACCESS_KEY");
        if access_key_id.is_some() != secret_access_key.is_some() {
            return Err(ConfigError::Invalid {
                key: "STORAGE_ACCESS_KEY_ID",
                value: String::new(),
                reason: "STORAGE_ACCESS_KEY_ID and STORAGE_SECRET_ACCESS_KEY must be set together"
                    .to_string(),
            });
        }

        Ok(Self {
            enabled,
            bucket,
            region: env::optional(lookup, "STORAGE_REGION").unwrap_or(defaults.region),
            endpoint: env::optional(lookup, "STORAGE_ENDPOINT"),
            access_key_id,
            secret_access_key,
            public_base_url: env::optional(lookup, "STORAGE_PUBLIC_BASE_URL")
                .unwrap_or(defaults.public_base_url),
            max_upload_bytes: env::parse_or(
                lookup,
                "STORAGE_MAX_UPLOAD_BYTES",
                defaults.max_upload_bytes,
            )?,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env::process_env)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn disabled_by_default() {
        let config = StorageConfig::from_lookup(&lookup(&[])).unwrap();
        assert_eq!(config, StorageConfig::default());
        assert!(!config.enabled);
    }

    #[test]
    fn enabled_storage_needs_a_bucket() {
        let result = StorageConfig::from_lookup(&lookup(&[("STORAGE_ENABLED", "true")]));
        assert_matches!(result, Err(ConfigError::Missing("STORAGE_BUCKET")));
    }

    #[test]
    fn custom_endpoint_and_credentials_are_read() {
        let config = StorageConfig::from_lookup(&lookup(&[
            ("STORAGE_ENABLED", "1"),
            ("STORAGE_BUCKET", "bandroom-media"),
            ("STORAGE_ENDPOINT", "https://storage.googleapis.com"),
            ("STORAGE_ACCESS_KEY_ID", "GOOG1EXAMPLE"),
            ("STORAGE_SECRET_ACCESS_KEY", "secret"),
            ("STORAGE_MAX_UPLOAD_BYTES", "1024"),
        ]))
        .unwrap();
        assert!(config.enabled);
        assert_eq!(config.bucket, "bandroom-media");
        assert_eq!(config.endpoint.as_deref(), Some("https://storage.googleapis.com"));
        assert_eq!(config.access_key_id.as_deref(), Some("GOOG1EXAMPLE"));
        assert_eq!(config.max_upload_bytes, 1024);
    }

    #[test]
    fn half_a_credential_pair_is_rejected() {
        let result = StorageConfig::from_lookup(&lookup(&[("STORAGE_ACCESS_KEY_ID", "GOOG1")]));
        assert_matches!(result, Err(ConfigError::Invalid { .. }));
    }
}
