//! Classifier and parser for the storage URIs of an S3 command-line tool.
//!
//! Any string a user passes as a source or destination is turned into one of
//! four typed URIs:
//!
//! | Kind | Form |
//! |------|------|
//! | [`S3Uri`] | `s3://bucket/object` |
//! | [`S3FsUri`] | `s3fs://fsname/path` |
//! | [`CloudFrontUri`] | `cf://dist_id[/request_id]` |
//! | [`FileUri`] | `/local/path` or `file:///local/path` |
//!
//! # Quick Start
//!
//! ```rust
//! use storage_uri::{S3Config, StorageUri, UriKind};
//!
//! let uri = StorageUri::parse("s3://bucket/photos/cat.jpg").unwrap();
//! assert_eq!(uri.kind(), UriKind::S3);
//!
//! let s3 = uri.as_s3().unwrap();
//! assert_eq!(s3.bucket(), "bucket");
//! assert_eq!(s3.object(), "photos/cat.jpg");
//!
//! let config = S3Config::default();
//! assert_eq!(
//!     uri.public_url(&config).unwrap(),
//!     "http://bucket.s3.amazonaws.com/photos/cat.jpg"
//! );
//!
//! // Anything without a scheme is a local path.
//! let uri = StorageUri::parse("/tmp/cat.jpg").unwrap();
//! assert_eq!(uri.kind(), UriKind::File);
//! ```
//!
//! # Endpoint URLs
//!
//! Virtual-hosted and path-style S3 URLs normalize to the same URI:
//!
//! ```rust
//! use storage_uri::StorageUri;
//!
//! let a = StorageUri::from_http_url("https://bucket.s3.amazonaws.com/key").unwrap();
//! let b = StorageUri::from_http_url("http://s3.amazonaws.com/bucket/key").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.to_string(), "s3://bucket/key");
//! ```
//!
//! # Dispatch Order
//!
//! [`StorageUri::parse`] tries the grammars in [`PARSE_ORDER`]: `s3`,
//! `s3fs`, `cf`, then local file. The local-file grammar accepts every
//! string without a scheme, so it always runs last.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

mod cloudfront;
mod config;
mod constants;
pub mod dns;
mod error;
mod file;
mod path;
pub mod prelude;
mod s3;
mod s3fs;
mod uri;

pub use cloudfront::CloudFrontUri;
pub use config::S3Config;
pub use constants::{
    AWS_S3_HOST, BUCKET_PLACEHOLDER, CLOUDFRONT_SCHEME, DEFAULT_HOST_BASE, DEFAULT_HOST_BUCKET,
    FILE_SCHEME, MAX_BUCKET_NAME_LENGTH, MAX_DNS_BUCKET_NAME_LENGTH, MIN_BUCKET_NAME_LENGTH,
    S3_SCHEME, S3FS_SCHEME, SCHEME_SEPARATOR,
};
pub use error::{BucketNameError, UriError, UriErrorKind};
pub use file::FileUri;
pub use s3::S3Uri;
pub use s3fs::S3FsUri;
pub use uri::{PARSE_ORDER, StorageUri, UriKind};
