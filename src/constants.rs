//! Constants for storage URI parsing and formatting.

/// Scheme token of object-storage URIs.
pub const S3_SCHEME: &str = "s3";

/// Scheme token of object-storage filesystem URIs.
pub const S3FS_SCHEME: &str = "s3fs";

/// Scheme token of local file URIs. Matched case-sensitively.
pub const FILE_SCHEME: &str = "file";

/// Scheme token of CloudFront distribution URIs.
pub const CLOUDFRONT_SCHEME: &str = "cf";

/// Separator between a scheme token and the rest of a URI.
pub const SCHEME_SEPARATOR: &str = "://";

/// Default service endpoint used for public URLs.
pub const DEFAULT_HOST_BASE: &str = "s3.amazonaws.com";

/// Default virtual-host template.
pub const DEFAULT_HOST_BUCKET: &str = "%(bucket)s.s3.amazonaws.com";

/// Placeholder a host template must carry to address buckets by subdomain.
pub const BUCKET_PLACEHOLDER: &str = "%(bucket)s";

/// Fixed AWS endpoint returned by [`S3Uri::host_name`](crate::S3Uri::host_name).
pub const AWS_S3_HOST: &str = "s3.amazonaws.com";

/// Minimum bucket name length.
pub const MIN_BUCKET_NAME_LENGTH: usize = 3;

/// Maximum bucket name length under DNS-strict rules.
pub const MAX_DNS_BUCKET_NAME_LENGTH: usize = 63;

/// Maximum bucket name length under relaxed rules.
pub const MAX_BUCKET_NAME_LENGTH: usize = 255;
