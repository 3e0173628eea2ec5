//! String and path helpers shared by the variant parsers.

use std::path::MAIN_SEPARATOR;

use crate::constants::SCHEME_SEPARATOR;

/// Strips `{scheme}://` from the front of `input`, ignoring ASCII case.
pub(crate) fn strip_scheme_ignore_case<'a>(input: &'a str, scheme: &str) -> Option<&'a str> {
    let name = input.get(..scheme.len())?;
    if !name.eq_ignore_ascii_case(scheme) {
        return None;
    }
    input[scheme.len()..].strip_prefix(SCHEME_SEPARATOR)
}

/// Splits a leading `word://` scheme token off `input`.
///
/// Word characters are alphanumerics and `_`. Returns the scheme name
/// (without `://`) and the remainder, or `None` when no such token leads the
/// input.
pub(crate) fn split_scheme(input: &str) -> Option<(&str, &str)> {
    let end = input
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(input.len());
    if end == 0 {
        return None;
    }
    let rest = input[end..].strip_prefix(SCHEME_SEPARATOR)?;
    Some((&input[..end], rest))
}

/// Splits `[/]*label[/rest]` into `(label, rest)`.
///
/// Any run of leading slashes is skipped, the label runs to the next slash
/// and exactly one slash after it is consumed.
pub(crate) fn split_label(input: &str) -> (&str, &str) {
    let input = input.trim_start_matches('/');
    match input.split_once('/') {
        Some((label, rest)) => (label, rest),
        None => (input, ""),
    }
}

/// Splits `input` on `separator`, keeping empty segments.
pub(crate) fn split_segments(input: &str, separator: char) -> Vec<String> {
    input.split(separator).map(str::to_string).collect()
}

/// Directory part of a host path, with trailing separators removed unless
/// the directory is the root.
pub(crate) fn host_dirname(path: &str) -> &str {
    let head = path.rfind(MAIN_SEPARATOR).map_or("", |i| &path[..=i]);
    let trimmed = head.trim_end_matches(MAIN_SEPARATOR);
    if trimmed.is_empty() { head } else { trimmed }
}

/// Final component of a host path; empty when the path ends in a separator.
pub(crate) fn host_basename(path: &str) -> &str {
    path.rfind(MAIN_SEPARATOR)
        .map_or(path, |i| &path[i + MAIN_SEPARATOR.len_utf8()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_scheme_is_case_insensitive() {
        assert_eq!(strip_scheme_ignore_case("s3://b/o", "s3"), Some("b/o"));
        assert_eq!(strip_scheme_ignore_case("S3://b/o", "s3"), Some("b/o"));
        assert_eq!(strip_scheme_ignore_case("s3:/b/o", "s3"), None);
        assert_eq!(strip_scheme_ignore_case("s3fs://x", "s3"), None);
        assert_eq!(strip_scheme_ignore_case("s", "s3"), None);
    }

    #[test]
    fn strip_scheme_handles_multibyte_input() {
        assert_eq!(strip_scheme_ignore_case("é://x", "s3"), None);
        assert_eq!(strip_scheme_ignore_case("aé://x", "s3"), None);
    }

    #[test]
    fn split_scheme_requires_word_chars() {
        assert_eq!(split_scheme("file:///tmp"), Some(("file", "/tmp")));
        assert_eq!(split_scheme("ftp://host/path"), Some(("ftp", "host/path")));
        assert_eq!(split_scheme("/tmp/file"), None);
        assert_eq!(split_scheme("a-b://x"), None);
        assert_eq!(split_scheme("://x"), None);
        assert_eq!(split_scheme("C:\\dir"), None);
    }

    #[test]
    fn split_label_skips_leading_slashes() {
        assert_eq!(split_label("bucket/a/b"), ("bucket", "a/b"));
        assert_eq!(split_label("///bucket/a"), ("bucket", "a"));
        assert_eq!(split_label("bucket"), ("bucket", ""));
        assert_eq!(split_label("bucket//a"), ("bucket", "/a"));
        assert_eq!(split_label(""), ("", ""));
    }

    #[test]
    fn split_segments_keeps_empty_parts() {
        assert_eq!(split_segments("/a//b/", '/'), vec!["", "a", "", "b", ""]);
        assert_eq!(split_segments("", '/'), vec![""]);
    }

    #[cfg(unix)]
    #[test]
    fn dirname_and_basename() {
        assert_eq!(host_dirname("/a/b/c.txt"), "/a/b");
        assert_eq!(host_basename("/a/b/c.txt"), "c.txt");
        assert_eq!(host_dirname("/c.txt"), "/");
        assert_eq!(host_dirname("c.txt"), "");
        assert_eq!(host_basename("c.txt"), "c.txt");
        assert_eq!(host_dirname("/a/b/"), "/a/b");
        assert_eq!(host_basename("/a/b/"), "");
        assert_eq!(host_dirname("a//b"), "a");
    }
}
