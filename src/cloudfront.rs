//! CloudFront distribution URIs: `cf://dist_id[/request_id]`.

use std::fmt;

use crate::constants::CLOUDFRONT_SCHEME;
use crate::path::strip_scheme_ignore_case;

/// A parsed `cf://` URI naming a distribution and, optionally, an
/// invalidation request.
///
/// # Examples
///
/// ```
/// use storage_uri::CloudFrontUri;
///
/// let uri = CloudFrontUri::parse("cf://1234567890ABCD/").unwrap();
/// assert_eq!(uri.dist_id(), "1234567890ABCD");
/// assert_eq!(uri.request_id(), None);
/// assert_eq!(uri.to_string(), "cf://1234567890ABCD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CloudFrontUri {
    dist_id: String,
    request_id: Option<String>,
}

impl CloudFrontUri {
    /// Parses a `cf://` URI, returning `None` for any other input.
    ///
    /// Slashes between the distribution id and the request id are collapsed.
    /// A missing or slash-only request portion yields no request id.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let rest = strip_scheme_ignore_case(input, CLOUDFRONT_SCHEME)?;
        let (dist_id, remainder) = rest.split_once('/').unwrap_or((rest, ""));
        let request_id = Some(remainder.trim_start_matches('/'))
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        Some(Self {
            dist_id: dist_id.to_string(),
            request_id,
        })
    }

    /// Returns the distribution id.
    #[must_use]
    pub fn dist_id(&self) -> &str {
        &self.dist_id
    }

    /// Returns the request id, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Returns the canonical `cf://` string.
    #[must_use]
    pub fn uri(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CloudFrontUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CLOUDFRONT_SCHEME}://{}", self.dist_id)?;
        if let Some(request_id) = &self.request_id {
            write!(f, "/{request_id}")?;
        }
        Ok(())
    }
}
