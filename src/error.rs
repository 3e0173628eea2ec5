//! Error types for storage URI parsing.

use crate::uri::UriKind;

/// Errors surfaced by the dispatcher, the HTTP URL converter and the
/// variant-specific capabilities.
///
/// The offending input is always preserved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{input}: {kind}")]
pub struct UriError {
    /// The input that could not be handled
    pub input: String,
    /// The specific error that occurred
    pub kind: UriErrorKind,
}

impl UriError {
    pub(crate) fn new(input: impl Into<String>, kind: UriErrorKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }

    /// Returns the error kind.
    #[must_use]
    pub const fn kind(&self) -> &UriErrorKind {
        &self.kind
    }
}

/// Specific storage URI error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UriErrorKind {
    /// No known URI grammar accepted the input
    #[error("not a recognized URI")]
    NotRecognized,
    /// The HTTP(S) host is not an S3 endpoint
    #[error("unable to parse URL as an S3 endpoint")]
    UnparseableUrl,
    /// The operation is only defined for another URI kind
    #[error("{operation} is not supported for {kind} URIs")]
    Unsupported {
        /// Kind of the URI the operation was requested on
        kind: UriKind,
        /// Name of the requested operation
        operation: &'static str,
    },
}

/// Errors for bucket name validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BucketNameError {
    /// Character not allowed under the active rule set
    #[error("invalid character '{char}' at position {position}")]
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// Name is shorter than the minimum
    #[error("bucket name length {actual} is below minimum {min}")]
    TooShort {
        /// Minimum allowed length
        min: usize,
        /// Actual length
        actual: usize,
    },
    /// Name is longer than the maximum
    #[error("bucket name length {actual} exceeds maximum {max}")]
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Name contains a forbidden character sequence
    #[error("bucket name must not contain '{sequence}'")]
    ForbiddenSequence {
        /// The forbidden sequence
        sequence: &'static str,
    },
    /// First character is not a lowercase letter or digit
    #[error("bucket name must start with a lowercase letter or digit, found '{found}'")]
    MustStartWithAlphanumeric {
        /// The character found
        found: char,
    },
    /// Last character is not a lowercase letter or digit
    #[error("bucket name must end with a lowercase letter or digit, found '{found}'")]
    MustEndWithAlphanumeric {
        /// The character found
        found: char,
    },
}
