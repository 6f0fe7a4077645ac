use std::fmt;
use std::time::Duration;

const CLOUDINARY_CLOUD_NAME: &str = "CLOUDINARY_CLOUD_NAME";
const CLOUDINARY_API_KEY: &str = "CLOUDINARY_API_KEY";
const CLOUDINARY_API_SECRET: &str = "CLOUDINARY_API_SECRET";
const CLOUDINARY_FOLDER: &str = "CLOUDINARY_FOLDER"; // Optional, blank searches all uploads
const CLOUDINARY_API_BASE: &str = "CLOUDINARY_API_BASE"; // Optional override of the API origin
const GALLERY_UPSTREAM_TIMEOUT_SECS: &str = "GALLERY_UPSTREAM_TIMEOUT_SECS";

pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com";
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Settings read once at cold start and shared by every invocation
#[derive(Clone)]
pub struct GalleryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub folder: Option<String>,
    pub api_base: String,
    pub upstream_timeout: Duration,
}

impl GalleryConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from any variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let cloud_name = required(CLOUDINARY_CLOUD_NAME)?;
        let api_key = required(CLOUDINARY_API_KEY)?;
        let api_secret = required(CLOUDINARY_API_SECRET)?;

        let folder = lookup(CLOUDINARY_FOLDER)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let api_base = lookup(CLOUDINARY_API_BASE)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let upstream_timeout = match lookup(GALLERY_UPSTREAM_TIMEOUT_SECS) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        name: GALLERY_UPSTREAM_TIMEOUT_SECS,
                        value: raw,
                    })
                }
            },
            None => DEFAULT_UPSTREAM_TIMEOUT,
        };

        Ok(Self {
            cloud_name,
            api_key,
            api_secret,
            folder,
            api_base,
            upstream_timeout,
        })
    }

    pub fn search_endpoint(&self) -> String {
        format!("{}/v1_1/{}/resources/search", self.api_base, self.cloud_name)
    }
}

impl fmt::Debug for GalleryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &"[redacted]")
            .field("api_secret", &"[redacted]")
            .field("folder", &self.folder)
            .field("api_base", &self.api_base)
            .field("upstream_timeout", &self.upstream_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const CREDENTIALS: [(&str, &str); 3] = [
        ("CLOUDINARY_CLOUD_NAME", "demo"),
        ("CLOUDINARY_API_KEY", "123456789"),
        ("CLOUDINARY_API_SECRET", "s3cr3t-value"),
    ];

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::from_lookup(lookup(&CREDENTIALS)).unwrap();
        assert_eq!(config.cloud_name, "demo");
        assert_eq!(config.folder, None);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.upstream_timeout, DEFAULT_UPSTREAM_TIMEOUT);
        assert_eq!(
            config.search_endpoint(),
            "https://api.cloudinary.com/v1_1/demo/resources/search"
        );
    }

    #[test]
    fn test_optional_settings() {
        let mut vars = CREDENTIALS.to_vec();
        vars.push(("CLOUDINARY_FOLDER", "  Wedding Gallery "));
        vars.push(("CLOUDINARY_API_BASE", "http://127.0.0.1:8080/"));
        vars.push(("GALLERY_UPSTREAM_TIMEOUT_SECS", "3"));

        let config = GalleryConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.folder.as_deref(), Some("Wedding Gallery"));
        assert_eq!(
            config.search_endpoint(),
            "http://127.0.0.1:8080/v1_1/demo/resources/search"
        );
        assert_eq!(config.upstream_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_blank_folder_is_unset() {
        let mut vars = CREDENTIALS.to_vec();
        vars.push(("CLOUDINARY_FOLDER", "   "));
        let config = GalleryConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.folder, None);
    }

    #[test]
    fn test_missing_credentials() {
        let err = GalleryConfig::from_lookup(lookup(&CREDENTIALS[..2])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("CLOUDINARY_API_SECRET"));
        assert_eq!(err.to_string(), "CLOUDINARY_API_SECRET must be set");

        let mut vars = CREDENTIALS.to_vec();
        vars[0] = ("CLOUDINARY_CLOUD_NAME", "");
        let err = GalleryConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert_eq!(err, ConfigError::Missing("CLOUDINARY_CLOUD_NAME"));
    }

    #[test]
    fn test_invalid_timeout() {
        for raw in ["0", "ten", "-1"] {
            let mut vars = CREDENTIALS.to_vec();
            vars.push(("GALLERY_UPSTREAM_TIMEOUT_SECS", raw));
            let err = GalleryConfig::from_lookup(lookup(&vars)).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { name: "GALLERY_UPSTREAM_TIMEOUT_SECS", .. }));
        }
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let config = GalleryConfig::from_lookup(lookup(&CREDENTIALS)).unwrap();
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("demo"));
        assert!(!rendered.contains("s3cr3t-value"));
        assert!(!rendered.contains("123456789"));
    }
}
