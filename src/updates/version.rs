//! Version normalization and comparison.

use std::cmp::Ordering;

/// Current version of this package, used as the running version by default.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Strip the leading `v` from a release tag (`"v2.3.0"` becomes `"2.3.0"`).
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().trim_start_matches('v').to_string()
}

/// A version split into numeric components and an optional pre-release tag.
#[derive(Debug, PartialEq, Eq)]
struct ParsedVersion {
    components: Vec<u64>,
    pre_release: Option<String>,
}

fn parse_version(version: &str) -> ParsedVersion {
    let version = version.trim().trim_start_matches('v');
    let version = version.split('+').next().unwrap_or_default();

    let (core, pre_release) = match version.split_once('-') {
        Some((core, pre)) => (core, Some(pre.to_string())),
        None => (version, None),
    };

    let components = core
        .split('.')
        .map(|part| {
            let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() {
                0
            } else {
                // Only overflow can fail here
                digits.parse().unwrap_or(u64::MAX)
            }
        })
        .collect();

    ParsedVersion {
        components,
        pre_release,
    }
}

/// Compare two dotted version strings numerically.
///
/// Components are compared as integers, so `1.0.10` sorts after `1.0.3`.
/// Missing components count as zero. When the numeric parts are equal, a
/// release sorts after any pre-release of the same version.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let a = parse_version(a);
    let b = parse_version(b);

    let len = a.components.len().max(b.components.len());
    for i in 0..len {
        let left = a.components.get(i).copied().unwrap_or(0);
        let right = b.components.get(i).copied().unwrap_or(0);
        match left.cmp(&right) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    match (&a.pre_release, &b.pre_release) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(left), Some(right)) => left.cmp(right),
    }
}

/// Check if `latest` is strictly newer than `current`.
pub fn is_newer_version(latest: &str, current: &str) -> bool {
    compare_versions(latest, current) == Ordering::Greater
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_constant_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn normalize_strips_leading_v() {
        assert_eq!(normalize_tag("v2.3.0"), "2.3.0");
        assert_eq!(normalize_tag("2.3.0"), "2.3.0");
        assert_eq!(normalize_tag(" v1.0.0 "), "1.0.0");
    }

    #[test]
    fn is_newer_version_basic() {
        assert!(is_newer_version("1.0.4", "1.0.3"));
        assert!(is_newer_version("2.0.0", "1.9.9"));
        assert!(is_newer_version("1.1.0", "1.0.99"));
    }

    #[test]
    fn is_newer_version_same() {
        assert!(!is_newer_version("1.0.3", "1.0.3"));
    }

    #[test]
    fn is_newer_version_older() {
        assert!(!is_newer_version("0.9.9", "1.0.3"));
        assert!(!is_newer_version("1.0.2", "1.0.3"));
    }

    #[test]
    fn comparison_is_numeric_not_lexicographic() {
        assert!(is_newer_version("1.0.10", "1.0.3"));
        assert!(is_newer_version("10.0.0", "9.99.99"));
        assert!(!is_newer_version("1.0.3", "1.0.10"));
    }

    #[test]
    fn missing_components_count_as_zero() {
        assert_eq!(compare_versions("1.0", "1.0.0"), Ordering::Equal);
        assert!(is_newer_version("1.1", "1.0.9"));
        assert!(is_newer_version("2", "1.9"));
    }

    #[test]
    fn leading_v_is_ignored_when_comparing() {
        assert_eq!(compare_versions("v1.2.3", "1.2.3"), Ordering::Equal);
    }

    #[test]
    fn release_is_newer_than_its_pre_release() {
        assert!(is_newer_version("1.0.0", "1.0.0-beta.1"));
        assert!(!is_newer_version("1.0.0-rc.1", "1.0.0"));
        assert!(is_newer_version("1.0.0-rc.1", "1.0.0-beta.2"));
    }

    #[test]
    fn build_metadata_is_ignored() {
        assert_eq!(compare_versions("1.0.0+build.5", "1.0.0"), Ordering::Equal);
    }

    #[test]
    fn garbage_parses_as_zero() {
        assert!(!is_newer_version("abc", "0.1.0"));
        assert!(is_newer_version("0.1.0", "abc"));
        assert!(!is_newer_version("", ""));
    }

    #[test]
    fn oversized_component_saturates() {
        assert!(is_newer_version("1.99999999999999999999.0", "1.5.0"));
        assert!(!is_newer_version("1.0.0", "1.99999999999999999999.0"));
        assert_eq!(
            compare_versions("1.99999999999999999999", "1.18446744073709551615"),
            Ordering::Equal
        );
    }
}
