//! Object-storage filesystem URIs: `s3fs://fsname/path`.

use std::fmt;

use crate::constants::S3FS_SCHEME;
use crate::path::{split_label, split_segments, strip_scheme_ignore_case};

/// A parsed `s3fs://` URI.
///
/// The path is kept as its `/`-separated segments, empty ones included, so
/// rejoining them always reproduces the parsed path.
///
/// # Examples
///
/// ```
/// use storage_uri::S3FsUri;
///
/// let uri = S3FsUri::parse("s3fs://filesystem1/path/to/remote/file.txt").unwrap();
/// assert_eq!(uri.fsname(), "filesystem1");
/// assert_eq!(uri.path(), "path/to/remote/file.txt");
/// assert_eq!(uri.segments().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct S3FsUri {
    fsname: String,
    segments: Vec<String>,
}

impl S3FsUri {
    /// Parses an `s3fs://` URI, returning `None` for any other input.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let rest = strip_scheme_ignore_case(input, S3FS_SCHEME)?;
        let (fsname, path) = split_label(rest);
        Some(Self {
            fsname: fsname.to_string(),
            segments: split_segments(path, '/'),
        })
    }

    /// Returns the filesystem name.
    #[must_use]
    pub fn fsname(&self) -> &str {
        &self.fsname
    }

    /// Returns the path inside the filesystem.
    #[must_use]
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    /// Returns the path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the canonical `s3fs://fsname/path` string.
    #[must_use]
    pub fn uri(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for S3FsUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{S3FS_SCHEME}://{}/{}", self.fsname, self.path())
    }
}
