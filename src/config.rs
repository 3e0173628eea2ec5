//! Endpoint configuration consumed by [`S3Uri`](crate::S3Uri).

use crate::constants::{DEFAULT_HOST_BASE, DEFAULT_HOST_BUCKET};

/// Endpoint settings needed to format public URLs and decide on
/// virtual-hosted addressing.
///
/// # Examples
///
/// ```
/// use storage_uri::S3Config;
///
/// let config = S3Config::default()
///     .with_host_base("storage.example.net")
///     .with_public_url_use_https(true);
/// assert_eq!(config.host_base, "storage.example.net");
/// assert_eq!(config.host_bucket, "%(bucket)s.s3.amazonaws.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct S3Config {
    /// Service endpoint, e.g. `s3.amazonaws.com`
    pub host_base: String,
    /// Virtual-host template containing `%(bucket)s`
    pub host_bucket: String,
    /// Format public URLs with `https` instead of `http`
    pub public_url_use_https: bool,
}

impl S3Config {
    /// Returns the config with `host_base` replaced.
    #[must_use]
    pub fn with_host_base(mut self, host_base: impl Into<String>) -> Self {
        self.host_base = host_base.into();
        self
    }

    /// Returns the config with `host_bucket` replaced.
    #[must_use]
    pub fn with_host_bucket(mut self, host_bucket: impl Into<String>) -> Self {
        self.host_bucket = host_bucket.into();
        self
    }

    /// Returns the config with the HTTPS preference replaced.
    #[must_use]
    pub fn with_public_url_use_https(mut self, use_https: bool) -> Self {
        self.public_url_use_https = use_https;
        self
    }

    /// URL scheme used for public URLs.
    #[must_use]
    pub const fn public_url_scheme(&self) -> &'static str {
        if self.public_url_use_https {
            "https"
        } else {
            "http"
        }
    }
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            host_base: DEFAULT_HOST_BASE.to_string(),
            host_bucket: DEFAULT_HOST_BUCKET.to_string(),
            public_url_use_https: false,
        }
    }
}
