//! Object-storage URIs: `s3://bucket/object`.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::config::S3Config;
use crate::constants::{AWS_S3_HOST, S3_SCHEME};
use crate::dns;
use crate::error::{UriError, UriErrorKind};
use crate::path::{split_label, strip_scheme_ignore_case};
use crate::uri::StorageUri;

/// Optional scheme, host, then the path after one optional slash.
const HTTP_URL_PATTERN: &str = r"(?i)^(?:https?://)?([^/]+)/?(.*)";

/// Optional bucket label, `s3`, optional `-region`/`-fips`/`-accelerate`
/// suffix, optional `.dualstack`, optional region segment, the AWS domain and
/// an optional China partition suffix.
///
/// Matches e.g. `my.website.com.s3-fips.dualstack.us-west-1.amazonaws.com.cn`.
const S3_HOST_PATTERN: &str =
    r"(?i)^(.*\.)?s3(?:-[^.]*)?(?:\.dualstack)?(?:\.[^.]*)?\.amazonaws\.com(?:\.cn)?$";

fn http_url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(HTTP_URL_PATTERN).expect("HTTP URL pattern is valid"))
}

fn s3_host_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(S3_HOST_PATTERN).expect("S3 host pattern is valid"))
}

/// A parsed `s3://` URI.
///
/// The scheme is matched case-insensitively and any run of slashes after it
/// is skipped. Both the bucket and the object may be empty; an object without
/// a bucket carries no meaning.
///
/// # Examples
///
/// ```
/// use storage_uri::S3Uri;
///
/// let uri = S3Uri::parse("s3://bucket/dir/object.txt").unwrap();
/// assert_eq!(uri.bucket(), "bucket");
/// assert_eq!(uri.object(), "dir/object.txt");
/// assert_eq!(uri.to_string(), "s3://bucket/dir/object.txt");
///
/// let uri = S3Uri::parse("s3://bucket").unwrap();
/// assert!(!uri.has_object());
/// assert_eq!(uri.to_string(), "s3://bucket/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct S3Uri {
    bucket: String,
    object: String,
}

impl S3Uri {
    /// Creates a URI from a bucket and an object key.
    #[must_use]
    pub fn new(bucket: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            object: object.into(),
        }
    }

    /// Parses an `s3://` URI, returning `None` for any other input.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let rest = strip_scheme_ignore_case(input, S3_SCHEME)?;
        let (bucket, object) = split_label(rest);
        Some(Self::new(bucket, object))
    }

    /// Returns the bucket name.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Returns the object key.
    #[must_use]
    pub fn object(&self) -> &str {
        &self.object
    }

    /// Returns true if the bucket is non-empty.
    #[must_use]
    pub fn has_bucket(&self) -> bool {
        !self.bucket.is_empty()
    }

    /// Returns true if the object key is non-empty.
    #[must_use]
    pub fn has_object(&self) -> bool {
        !self.object.is_empty()
    }

    /// Returns the canonical `s3://bucket/object` string.
    #[must_use]
    pub fn uri(&self) -> String {
        Self::compose(&self.bucket, &self.object)
    }

    /// Builds the canonical string for a bucket and object key.
    ///
    /// ```
    /// use storage_uri::S3Uri;
    ///
    /// assert_eq!(S3Uri::compose("bucket", ""), "s3://bucket/");
    /// ```
    #[must_use]
    pub fn compose(bucket: &str, object: &str) -> String {
        format!("{S3_SCHEME}://{bucket}/{object}")
    }

    /// Returns true if the bucket can be addressed as a subdomain of the
    /// configured virtual-host template.
    #[must_use]
    pub fn is_dns_compatible(&self, config: &S3Config) -> bool {
        dns::supports_virtual_host(&config.host_bucket, &self.bucket)
    }

    /// Returns the anonymous HTTP(S) URL of the object.
    ///
    /// DNS-compatible buckets use virtual-hosted form
    /// (`http://bucket.host_base/object`), all others path-style form
    /// (`http://host_base/bucket/object`).
    ///
    /// ```
    /// use storage_uri::{S3Config, S3Uri};
    ///
    /// let config = S3Config::default().with_public_url_use_https(true);
    /// let uri = S3Uri::new("bucket", "key");
    /// assert_eq!(uri.public_url(&config), "https://bucket.s3.amazonaws.com/key");
    ///
    /// let uri = S3Uri::new("Bucket_Name", "key");
    /// assert_eq!(uri.public_url(&config), "https://s3.amazonaws.com/Bucket_Name/key");
    /// ```
    #[must_use]
    pub fn public_url(&self, config: &S3Config) -> String {
        let scheme = config.public_url_scheme();
        let host_base = &config.host_base;
        let (bucket, object) = (&self.bucket, &self.object);
        if self.is_dns_compatible(config) {
            format!("{scheme}://{bucket}.{host_base}/{object}")
        } else {
            format!("{scheme}://{host_base}/{bucket}/{object}")
        }
    }

    /// Returns the host name on the fixed AWS endpoint.
    ///
    /// Unlike [`public_url`](Self::public_url) this always targets
    /// `s3.amazonaws.com` and ignores `host_base`; only the DNS decision
    /// consults the config.
    #[must_use]
    pub fn host_name(&self, config: &S3Config) -> String {
        if self.is_dns_compatible(config) {
            format!("{}.{AWS_S3_HOST}", self.bucket)
        } else {
            AWS_S3_HOST.to_string()
        }
    }

    /// Converts an S3 endpoint URL into a storage URI.
    ///
    /// Accepts virtual-hosted (`https://bucket.s3.amazonaws.com/key`) and
    /// path-style (`http://s3.amazonaws.com/bucket/key`) URLs, including
    /// regional, FIPS, dualstack and `.cn` endpoints. The leading `http://`
    /// or `https://` is optional. The result is produced by parsing the
    /// composed `s3://bucket/object` string through
    /// [`StorageUri::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`UriErrorKind::UnparseableUrl`] if the host is not an S3
    /// endpoint.
    pub fn from_http_url(url: &str) -> Result<StorageUri, UriError> {
        let (bucket, object) = Self::split_http_url(url)?;
        StorageUri::parse(&Self::compose(&bucket, &object))
    }

    fn split_http_url(url: &str) -> Result<(String, String), UriError> {
        let unparseable = || UriError::new(url, UriErrorKind::UnparseableUrl);

        let captures = http_url_pattern().captures(url).ok_or_else(unparseable)?;
        let host = captures.get(1).map_or("", |m| m.as_str()).to_lowercase();
        let path = captures.get(2).map_or("", |m| m.as_str());

        let host_captures = s3_host_pattern().captures(&host).ok_or_else(unparseable)?;
        match host_captures.get(1) {
            None => {
                debug!(url, "path-style S3 URL");
                match path.split_once('/') {
                    Some((bucket, object)) => Ok((bucket.to_string(), object.to_string())),
                    None => Ok((path.to_string(), String::new())),
                }
            }
            Some(label) => {
                debug!(url, "virtual-hosted-style S3 URL");
                let bucket = label.as_str().trim_end_matches('.');
                Ok((bucket.to_string(), path.to_string()))
            }
        }
    }
}

impl fmt::Display for S3Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{S3_SCHEME}://{}/{}", self.bucket, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s3(uri: &StorageUri) -> &S3Uri {
        uri.as_s3().expect("expected an s3 URI")
    }

    #[test]
    fn parse_bucket_and_object() {
        let uri = S3Uri::parse("s3://bucket/object").unwrap();
        assert_eq!(uri.bucket(), "bucket");
        assert_eq!(uri.object(), "object");
        assert_eq!(uri.uri(), "s3://bucket/object");
    }

    #[test]
    fn parse_bucket_only() {
        let uri = S3Uri::parse("s3://bucket").unwrap();
        assert!(uri.has_bucket());
        assert!(!uri.has_object());
        assert_eq!(uri.object(), "");
        assert_eq!(uri.uri(), "s3://bucket/");
    }

    #[test]
    fn parse_skips_extra_slashes_and_ignores_scheme_case() {
        let uri = S3Uri::parse("S3:////bucket/a/b/").unwrap();
        assert_eq!(uri.bucket(), "bucket");
        assert_eq!(uri.object(), "a/b/");
    }

    #[test]
    fn parse_empty_bucket() {
        let uri = S3Uri::parse("s3://").unwrap();
        assert!(!uri.has_bucket());
        assert_eq!(uri.uri(), "s3:///");
    }

    #[test]
    fn parse_rejects_other_schemes() {
        assert!(S3Uri::parse("s3fs://fs/path").is_none());
        assert!(S3Uri::parse("s3:/bucket").is_none());
        assert!(S3Uri::parse("/local/path").is_none());
    }

    #[test]
    fn public_url_virtual_hosted() {
        let config = S3Config::default();
        let uri = S3Uri::new("bucket", "dir/key");
        assert_eq!(uri.public_url(&config), "http://bucket.s3.amazonaws.com/dir/key");
    }

    #[test]
    fn public_url_path_style_for_incompatible_bucket() {
        let config = S3Config::default().with_host_base("storage.example.net");
        let uri = S3Uri::new("Bucket", "key");
        assert_eq!(uri.public_url(&config), "http://storage.example.net/Bucket/key");
    }

    #[test]
    fn public_url_path_style_without_placeholder() {
        let config = S3Config::default()
            .with_host_base("minio.local")
            .with_host_bucket("minio.local")
            .with_public_url_use_https(true);
        let uri = S3Uri::new("bucket", "key");
        assert_eq!(uri.public_url(&config), "https://minio.local/bucket/key");
    }

    #[test]
    fn host_name_ignores_host_base() {
        let config = S3Config::default().with_host_base("storage.example.net");
        assert_eq!(
            S3Uri::new("bucket", "key").host_name(&config),
            "bucket.s3.amazonaws.com"
        );
        assert_eq!(S3Uri::new("Bucket", "key").host_name(&config), "s3.amazonaws.com");
    }

    #[test]
    fn http_url_virtual_hosted() {
        let uri = S3Uri::from_http_url("https://bucket.s3.amazonaws.com/key").unwrap();
        assert_eq!(s3(&uri).bucket(), "bucket");
        assert_eq!(s3(&uri).object(), "key");
    }

    #[test]
    fn http_url_path_style() {
        let uri = S3Uri::from_http_url("http://s3.amazonaws.com/bucket/key").unwrap();
        assert_eq!(s3(&uri).bucket(), "bucket");
        assert_eq!(s3(&uri).object(), "key");
    }

    #[test]
    fn http_url_path_style_bucket_only() {
        let uri = S3Uri::from_http_url("http://s3.amazonaws.com/bucketonly").unwrap();
        assert_eq!(s3(&uri).bucket(), "bucketonly");
        assert_eq!(s3(&uri).object(), "");
    }

    #[test]
    fn http_url_path_style_skips_empty_leading_segment() {
        let uri = S3Uri::from_http_url("http://s3.amazonaws.com//bucket/key").unwrap();
        assert_eq!(uri.to_string(), "s3://bucket/key");

        let uri = S3Uri::from_http_url("s3.amazonaws.com").unwrap();
        assert!(!s3(&uri).has_bucket());
        assert_eq!(uri.to_string(), "s3:///");
    }

    #[test]
    fn http_url_dotted_bucket_and_uppercase_host() {
        let uri = S3Uri::from_http_url("HTTPS://My.Bucket.S3.AmazonAWS.com/Dir/Key").unwrap();
        assert_eq!(s3(&uri).bucket(), "my.bucket");
        assert_eq!(s3(&uri).object(), "Dir/Key");
    }

    #[test]
    fn http_url_regional_endpoints() {
        let cases = [
            "https://bucket.s3-us-west-2.amazonaws.com/key",
            "https://bucket.s3.us-west-2.amazonaws.com/key",
            "https://bucket.s3.dualstack.eu-west-1.amazonaws.com/key",
            "https://bucket.s3-fips.dualstack.us-west-1.amazonaws.com.cn/key",
            "https://bucket.s3-accelerate.amazonaws.com/key",
            "bucket.s3.cn-north-1.amazonaws.com.cn/key",
        ];
        for url in cases {
            let uri = S3Uri::from_http_url(url).unwrap();
            assert_eq!(s3(&uri).bucket(), "bucket", "{url}");
            assert_eq!(s3(&uri).object(), "key", "{url}");
        }
    }

    #[test]
    fn http_url_regional_path_style() {
        let uri = S3Uri::from_http_url("https://s3.eu-central-1.amazonaws.com/bucket/a/b").unwrap();
        assert_eq!(s3(&uri).bucket(), "bucket");
        assert_eq!(s3(&uri).object(), "a/b");
    }

    #[test]
    fn http_url_rejects_foreign_hosts() {
        for url in [
            "https://example.com/bucket/key",
            "https://bucket.s3.amazonaws.com.evil.net/key",
            "https://s3.amazonaws.org/bucket",
            "",
        ] {
            let err = S3Uri::from_http_url(url).unwrap_err();
            assert_eq!(err.kind, UriErrorKind::UnparseableUrl, "{url}");
            assert_eq!(err.input, url);
        }
    }

    #[test]
    fn display_matches_uri() {
        let uri = S3Uri::new("bucket", "a/b");
        assert_eq!(uri.to_string(), uri.uri());
    }
}
