//! The tagged storage URI type and the dispatcher that classifies input.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::cloudfront::CloudFrontUri;
use crate::config::S3Config;
use crate::constants::{CLOUDFRONT_SCHEME, FILE_SCHEME, S3_SCHEME, S3FS_SCHEME};
use crate::error::{UriError, UriErrorKind};
use crate::file::FileUri;
use crate::s3::S3Uri;
use crate::s3fs::S3FsUri;

/// The order in which [`StorageUri::parse`] tries the variant grammars.
///
/// The local-file grammar accepts any input without a scheme, so it must
/// come after every schemed grammar.
pub const PARSE_ORDER: [UriKind; 4] = [
    UriKind::S3,
    UriKind::S3Fs,
    UriKind::CloudFront,
    UriKind::File,
];

/// Names a [`StorageUri`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UriKind {
    /// `s3://bucket/object`
    S3,
    /// `s3fs://fsname/path`
    S3Fs,
    /// A local path or `file://path`
    File,
    /// `cf://dist_id/request_id`
    CloudFront,
}

impl UriKind {
    /// Returns the scheme token of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S3 => S3_SCHEME,
            Self::S3Fs => S3FS_SCHEME,
            Self::File => FILE_SCHEME,
            Self::CloudFront => CLOUDFRONT_SCHEME,
        }
    }

    fn try_parse(self, input: &str) -> Option<StorageUri> {
        match self {
            Self::S3 => S3Uri::parse(input).map(StorageUri::S3),
            Self::S3Fs => S3FsUri::parse(input).map(StorageUri::S3Fs),
            Self::File => FileUri::parse(input).map(StorageUri::File),
            Self::CloudFront => CloudFrontUri::parse(input).map(StorageUri::CloudFront),
        }
    }
}

impl fmt::Display for UriKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified storage URI.
///
/// # Examples
///
/// ```
/// use storage_uri::{StorageUri, UriKind};
///
/// let uri: StorageUri = "s3://bucket/object".parse().unwrap();
/// assert_eq!(uri.kind(), UriKind::S3);
/// assert_eq!(uri.as_s3().map(|s3| s3.bucket()), Some("bucket"));
///
/// let uri = StorageUri::parse("cf://1234567890ABCD/").unwrap();
/// assert_eq!(uri.kind(), UriKind::CloudFront);
///
/// assert!(StorageUri::parse("ftp://host/path").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StorageUri {
    /// An object-storage URI
    S3(S3Uri),
    /// An object-storage filesystem URI
    S3Fs(S3FsUri),
    /// A local path
    File(FileUri),
    /// A CloudFront distribution URI
    CloudFront(CloudFrontUri),
}

impl StorageUri {
    /// Classifies and parses `input`.
    ///
    /// Each grammar in [`PARSE_ORDER`] is tried in turn and the first match
    /// wins.
    ///
    /// # Errors
    ///
    /// Returns [`UriErrorKind::NotRecognized`] if no grammar accepts the
    /// input.
    pub fn parse(input: &str) -> Result<Self, UriError> {
        for kind in PARSE_ORDER {
            trace!(%kind, input, "trying URI grammar");
            if let Some(uri) = kind.try_parse(input) {
                debug!(%kind, input, "recognized URI");
                return Ok(uri);
            }
        }
        debug!(input, "URI not recognized");
        Err(UriError::new(input, UriErrorKind::NotRecognized))
    }

    /// Parses `input` with the grammar of `kind` only.
    ///
    /// # Errors
    ///
    /// Returns [`UriErrorKind::NotRecognized`] if that grammar rejects the
    /// input.
    pub fn parse_as(kind: UriKind, input: &str) -> Result<Self, UriError> {
        kind.try_parse(input)
            .ok_or_else(|| UriError::new(input, UriErrorKind::NotRecognized))
    }

    /// Converts an S3 endpoint URL into a storage URI.
    ///
    /// See [`S3Uri::from_http_url`].
    ///
    /// # Errors
    ///
    /// Returns [`UriErrorKind::UnparseableUrl`] if the host is not an S3
    /// endpoint.
    pub fn from_http_url(url: &str) -> Result<Self, UriError> {
        S3Uri::from_http_url(url)
    }

    /// Returns the variant kind.
    #[must_use]
    pub const fn kind(&self) -> UriKind {
        match self {
            Self::S3(_) => UriKind::S3,
            Self::S3Fs(_) => UriKind::S3Fs,
            Self::File(_) => UriKind::File,
            Self::CloudFront(_) => UriKind::CloudFront,
        }
    }

    /// Returns the canonical string.
    #[must_use]
    pub fn uri(&self) -> String {
        self.to_string()
    }

    /// Returns the object-storage URI, if this is one.
    #[must_use]
    pub const fn as_s3(&self) -> Option<&S3Uri> {
        match self {
            Self::S3(uri) => Some(uri),
            _ => None,
        }
    }

    /// Returns the object-storage filesystem URI, if this is one.
    #[must_use]
    pub const fn as_s3fs(&self) -> Option<&S3FsUri> {
        match self {
            Self::S3Fs(uri) => Some(uri),
            _ => None,
        }
    }

    /// Returns the local-file URI, if this is one.
    #[must_use]
    pub const fn as_file(&self) -> Option<&FileUri> {
        match self {
            Self::File(uri) => Some(uri),
            _ => None,
        }
    }

    /// Returns the CloudFront URI, if this is one.
    #[must_use]
    pub const fn as_cloudfront(&self) -> Option<&CloudFrontUri> {
        match self {
            Self::CloudFront(uri) => Some(uri),
            _ => None,
        }
    }

    /// Returns the anonymous HTTP(S) URL of an object-storage URI.
    ///
    /// # Errors
    ///
    /// Returns [`UriErrorKind::Unsupported`] for every other kind.
    pub fn public_url(&self, config: &S3Config) -> Result<String, UriError> {
        self.require_s3("public_url").map(|uri| uri.public_url(config))
    }

    /// Returns the fixed-endpoint host name of an object-storage URI.
    ///
    /// # Errors
    ///
    /// Returns [`UriErrorKind::Unsupported`] for every other kind.
    pub fn host_name(&self, config: &S3Config) -> Result<String, UriError> {
        self.require_s3("host_name").map(|uri| uri.host_name(config))
    }

    /// Returns the last component of the URI.
    ///
    /// Local paths use host path rules; other kinds take whatever follows
    /// the last `/` of the canonical string.
    #[must_use]
    pub fn basename(&self) -> String {
        match self {
            Self::File(uri) => uri.basename(),
            other => other
                .uri()
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }

    fn require_s3(&self, operation: &'static str) -> Result<&S3Uri, UriError> {
        self.as_s3().ok_or_else(|| {
            UriError::new(
                self.uri(),
                UriErrorKind::Unsupported {
                    kind: self.kind(),
                    operation,
                },
            )
        })
    }
}

impl fmt::Display for StorageUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::S3(uri) => fmt::Display::fmt(uri, f),
            Self::S3Fs(uri) => fmt::Display::fmt(uri, f),
            Self::File(uri) => fmt::Display::fmt(uri, f),
            Self::CloudFront(uri) => fmt::Display::fmt(uri, f),
        }
    }
}

impl FromStr for StorageUri {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for StorageUri {
    type Error = UriError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<S3Uri> for StorageUri {
    fn from(uri: S3Uri) -> Self {
        Self::S3(uri)
    }
}

impl From<S3FsUri> for StorageUri {
    fn from(uri: S3FsUri) -> Self {
        Self::S3Fs(uri)
    }
}

impl From<FileUri> for StorageUri {
    fn from(uri: FileUri) -> Self {
        Self::File(uri)
    }
}

impl From<CloudFrontUri> for StorageUri {
    fn from(uri: CloudFrontUri) -> Self {
        Self::CloudFront(uri)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StorageUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StorageUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
