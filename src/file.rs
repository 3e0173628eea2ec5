//! Local filesystem paths, bare or as `file://` URIs.

use std::fmt;
use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR, Path};

use crate::constants::FILE_SCHEME;
use crate::path::{host_basename, host_dirname, split_scheme, split_segments};

/// A local path.
///
/// Bare paths are split on the host separator, `file://` paths on `/`, so
/// the canonical `file://` form is the same on every platform. Any other
/// `scheme://` prefix is rejected, which is why the dispatcher tries this
/// parser last.
///
/// # Examples
///
/// ```
/// use storage_uri::FileUri;
///
/// let uri = FileUri::parse("file:///tmp/report.csv").unwrap();
/// assert_eq!(uri.segments(), ["", "tmp", "report.csv"]);
/// assert_eq!(uri.to_string(), "file:///tmp/report.csv");
///
/// assert!(FileUri::parse("ftp://host/report.csv").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileUri {
    segments: Vec<String>,
}

impl FileUri {
    /// Parses a bare local path or a `file://` URI.
    ///
    /// Returns `None` for empty input and for inputs carrying any scheme
    /// other than `file://`. The scheme match is case-sensitive.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        if input.is_empty() {
            return None;
        }
        let segments = match split_scheme(input) {
            Some((FILE_SCHEME, rest)) => split_segments(rest, '/'),
            Some(_) => return None,
            None => split_segments(input, MAIN_SEPARATOR),
        };
        Some(Self { segments })
    }

    /// Returns the path joined with the host separator.
    #[must_use]
    pub fn path(&self) -> String {
        self.segments.join(MAIN_SEPARATOR_STR)
    }

    /// Returns the path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns true if the path names an existing directory.
    ///
    /// This is the only operation in the crate that touches the filesystem.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        Path::new(&self.path()).is_dir()
    }

    /// Returns the directory part of the path.
    #[must_use]
    pub fn dirname(&self) -> String {
        host_dirname(&self.path()).to_string()
    }

    /// Returns the final component of the path; empty if it ends in a
    /// separator.
    #[must_use]
    pub fn basename(&self) -> String {
        host_basename(&self.path()).to_string()
    }

    /// Returns the canonical `file://` string.
    #[must_use]
    pub fn uri(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FileUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{FILE_SCHEME}://{}", self.segments.join("/"))
    }
}
