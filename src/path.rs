//! Path normalization.
//!
//! Every path that enters the navigator — the initial host location, a
//! `navigate` destination, a host back/forward target — is normalized before
//! anything else looks at it. Guards therefore always see normalized
//! destinations, and location comparisons are plain string equality.
//!
//! Normalization is **total**: any input string produces a valid path. There
//! is no "invalid path" error class; garbage input degrades to a path.
//!
//! # Rules
//!
//! - empty input becomes `/`
//! - the result begins with exactly one `/`: a missing leading `/` is
//!   added, repeated ones collapse
//! - trailing `/` characters are removed (except the root path itself)
//! - the result is idempotent: `normalize_path(normalize_path(s)) == normalize_path(s)`

use std::borrow::Cow;

/// Normalize a path to the canonical location form.
///
/// Already-normalized input is returned borrowed.
///
/// # Examples
///
/// ```
/// use gpui_waypoint::normalize_path;
///
/// assert_eq!(normalize_path("home"), "/home");
/// assert_eq!(normalize_path("/home/"), "/home");
/// assert_eq!(normalize_path("//home"), "/home");
/// assert_eq!(normalize_path(""), "/");
/// assert_eq!(normalize_path("/"), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    let trimmed = path.trim_matches('/');

    if trimmed.is_empty() {
        return Cow::Borrowed("/");
    }

    // Already exactly one leading '/' and nothing trailing
    if path.len() == trimmed.len() + 1 && path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{trimmed}"))
    }
}

/// Check whether two paths name the same location once normalized.
pub fn same_location(a: &str, b: &str) -> bool {
    normalize_path(a) == normalize_path(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_already_normalized() {
        // Already-normalized paths come back borrowed and unchanged
        assert_eq!(normalize_path("/resolutions"), "/resolutions");
        assert_eq!(normalize_path("/speechrepo/archive"), "/speechrepo/archive");
        assert_eq!(normalize_path("/"), "/");
        assert!(matches!(normalize_path("/home"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalize_missing_leading_slash() {
        assert_eq!(normalize_path("home"), "/home");
        assert_eq!(normalize_path("messages/inbox"), "/messages/inbox");
    }

    #[test]
    fn test_normalize_collapses_leading_slashes() {
        assert_eq!(normalize_path("//home"), "/home");
        assert_eq!(normalize_path("///messages/inbox/"), "/messages/inbox");
        assert!(same_location("//home", "/home"));
    }

    #[test]
    fn test_normalize_trailing_slash() {
        assert_eq!(normalize_path("/home/"), "/home");
        assert_eq!(normalize_path("/messages/inbox/"), "/messages/inbox");
        assert_eq!(normalize_path("/home///"), "/home");
    }

    #[test]
    fn test_normalize_both_missing_and_trailing() {
        assert_eq!(normalize_path("home/"), "/home");
        assert_eq!(normalize_path("messages/inbox/"), "/messages/inbox");
    }

    #[test]
    fn test_normalize_empty_path() {
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn test_normalize_root_variations() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("//"), "/");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = [
            "", "/", "//", "home", "/home", "home/", "/home/", "//home", "a/b/c///",
            "weird path with spaces", "/already/fine",
        ];
        for input in inputs {
            let once = normalize_path(input).into_owned();
            let twice = normalize_path(&once).into_owned();
            assert_eq!(once, twice, "normalization not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_normalize_single_leading_slash() {
        let inputs = ["/home", "//home", "///home//", "home", ""];
        for input in inputs {
            let normalized = normalize_path(input);
            assert!(normalized.starts_with('/'), "missing slash for {input:?}");
            assert!(
                normalized == "/" || !normalized.starts_with("//"),
                "more than one leading slash for {input:?}: {normalized:?}"
            );
        }
    }

    #[test]
    fn test_same_location() {
        assert!(same_location("home/", "/home"));
        assert!(same_location("", "/"));
        assert!(!same_location("/home", "/away"));
    }
}
