//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use storage_uri::prelude::*;
//!
//! let uri = StorageUri::parse("s3fs://fs/dir/file").unwrap();
//! assert_eq!(uri.kind(), UriKind::S3Fs);
//! ```

pub use crate::{
    // Core types
    CloudFrontUri, FileUri, PARSE_ORDER, S3FsUri, S3Uri, StorageUri, UriKind,
    // Configuration
    S3Config,
    // Errors
    BucketNameError, UriError, UriErrorKind,
};
