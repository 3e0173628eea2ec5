//! Bucket naming rules and virtual-host compatibility.
//!
//! Two rule sets exist. The strict set produces names that are valid DNS
//! labels and can therefore be addressed as `bucket.host`. The relaxed set
//! is what legacy path-style endpoints accept.

use crate::constants::{
    BUCKET_PLACEHOLDER, MAX_BUCKET_NAME_LENGTH, MAX_DNS_BUCKET_NAME_LENGTH, MIN_BUCKET_NAME_LENGTH,
};
use crate::error::BucketNameError;

const STRICT_FORBIDDEN_SEQUENCES: [&str; 2] = ["-.", ".."];

/// Validates a bucket name.
///
/// With `dns_strict` set, only lowercase letters, digits, dots and hyphens
/// are allowed, the name is at most 63 characters, must start and end with a
/// letter or digit, and must not contain `-.` or `..`. Otherwise uppercase
/// letters and underscores are also allowed and the limit is 255.
///
/// # Errors
///
/// Returns the first [`BucketNameError`] the name violates.
///
/// # Examples
///
/// ```
/// use storage_uri::dns::check_bucket_name;
///
/// assert!(check_bucket_name("my-bucket.logs", true).is_ok());
/// assert!(check_bucket_name("My_Bucket", true).is_err());
/// assert!(check_bucket_name("My_Bucket", false).is_ok());
/// ```
pub fn check_bucket_name(name: &str, dns_strict: bool) -> Result<(), BucketNameError> {
    let allowed: fn(char) -> bool = if dns_strict {
        is_strict_char
    } else {
        is_relaxed_char
    };
    if let Some((position, char)) = name.chars().enumerate().find(|&(_, c)| !allowed(c)) {
        return Err(BucketNameError::InvalidChar { char, position });
    }

    // All remaining characters are ASCII, so byte length equals char count.
    let len = name.len();
    if len < MIN_BUCKET_NAME_LENGTH {
        return Err(BucketNameError::TooShort {
            min: MIN_BUCKET_NAME_LENGTH,
            actual: len,
        });
    }
    if len > MAX_BUCKET_NAME_LENGTH {
        return Err(BucketNameError::TooLong {
            max: MAX_BUCKET_NAME_LENGTH,
            actual: len,
        });
    }

    if !dns_strict {
        return Ok(());
    }

    if len > MAX_DNS_BUCKET_NAME_LENGTH {
        return Err(BucketNameError::TooLong {
            max: MAX_DNS_BUCKET_NAME_LENGTH,
            actual: len,
        });
    }
    if let Some(sequence) = STRICT_FORBIDDEN_SEQUENCES
        .into_iter()
        .find(|seq| name.contains(seq))
    {
        return Err(BucketNameError::ForbiddenSequence { sequence });
    }
    if let Some(found) = name.chars().next().filter(|&c| !is_dns_boundary_char(c)) {
        return Err(BucketNameError::MustStartWithAlphanumeric { found });
    }
    if let Some(found) = name.chars().last().filter(|&c| !is_dns_boundary_char(c)) {
        return Err(BucketNameError::MustEndWithAlphanumeric { found });
    }

    Ok(())
}

/// Returns true if `name` satisfies the DNS-strict bucket rules.
#[must_use]
pub fn is_dns_conformant(name: &str) -> bool {
    check_bucket_name(name, true).is_ok()
}

/// Returns true if `name` can be addressed through the virtual-host
/// template `host_bucket`.
///
/// A template without the `%(bucket)s` placeholder never addresses buckets
/// by subdomain, whatever the name.
#[must_use]
pub fn supports_virtual_host(host_bucket: &str, name: &str) -> bool {
    host_bucket.contains(BUCKET_PLACEHOLDER) && is_dns_conformant(name)
}

const fn is_strict_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-'
}

const fn is_relaxed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-'
}

const fn is_dns_boundary_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_HOST_BUCKET;

    #[test]
    fn strict_accepts_plain_names() {
        assert!(check_bucket_name("bucket", true).is_ok());
        assert!(check_bucket_name("my.dotted-bucket01", true).is_ok());
        assert!(check_bucket_name("abc", true).is_ok());
    }

    #[test]
    fn strict_rejects_uppercase() {
        assert_eq!(
            check_bucket_name("Bucket", true),
            Err(BucketNameError::InvalidChar {
                char: 'B',
                position: 0,
            })
        );
    }

    #[test]
    fn relaxed_accepts_uppercase_and_underscore() {
        assert!(check_bucket_name("Legacy_Bucket", false).is_ok());
        assert!(matches!(
            check_bucket_name("bad/name", false),
            Err(BucketNameError::InvalidChar {
                char: '/',
                position: 3,
            })
        ));
    }

    #[test]
    fn length_limits() {
        assert_eq!(
            check_bucket_name("ab", true),
            Err(BucketNameError::TooShort { min: 3, actual: 2 })
        );
        let long = "a".repeat(64);
        assert_eq!(
            check_bucket_name(&long, true),
            Err(BucketNameError::TooLong {
                max: 63,
                actual: 64,
            })
        );
        assert!(check_bucket_name(&long, false).is_ok());
        let longer = "a".repeat(256);
        assert_eq!(
            check_bucket_name(&longer, false),
            Err(BucketNameError::TooLong {
                max: 255,
                actual: 256,
            })
        );
    }

    #[test]
    fn strict_rejects_forbidden_sequences() {
        assert_eq!(
            check_bucket_name("a-.b", true),
            Err(BucketNameError::ForbiddenSequence { sequence: "-." })
        );
        assert_eq!(
            check_bucket_name("a..b", true),
            Err(BucketNameError::ForbiddenSequence { sequence: ".." })
        );
    }

    #[test]
    fn strict_boundaries() {
        assert_eq!(
            check_bucket_name("-abc", true),
            Err(BucketNameError::MustStartWithAlphanumeric { found: '-' })
        );
        assert_eq!(
            check_bucket_name("abc.", true),
            Err(BucketNameError::MustEndWithAlphanumeric { found: '.' })
        );
    }

    #[test]
    fn virtual_host_needs_placeholder() {
        assert!(supports_virtual_host(DEFAULT_HOST_BUCKET, "bucket"));
        assert!(!supports_virtual_host("s3.example.com", "bucket"));
        assert!(!supports_virtual_host(DEFAULT_HOST_BUCKET, "Bucket"));
        assert!(!supports_virtual_host(DEFAULT_HOST_BUCKET, ""));
    }
}
