//! Protocol version strings.
//!
//! Versions are calendar-style identifiers of the shape `YYYY-MM`, optionally
//! suffixed with a single letter (`2017-10b`). Wherever the protocol has to
//! pick between versions it uses plain descending string order, so that
//! newer-looking versions sort first. That policy breaks down if a future
//! version string stops sorting consistently with chronological order (a
//! two-digit year rollover, say); this is a property of the published
//! protocol, not something to redesign here.

use std::cmp::Ordering;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, WireError};

lazy_static! {
    static ref VERSION_RE: Regex = Regex::new(r"^\d{4}-\d{2}\w?$").expect("static regex");
}

/// Check that a version string has the `YYYY-MM[letter]` shape.
pub fn validate_version_string(s: &str) -> Result<()> {
    if !VERSION_RE.is_match(s) {
        return Err(WireError::InvalidVersion(s.to_string()));
    }
    Ok(())
}

/// Comparator placing higher (newer-looking) version strings first.
pub fn compare_versions_descending(a: &str, b: &str) -> Ordering {
    b.cmp(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_version_string() {
        let cases = [
            ("2017-10b", true),
            ("2018-10", true),
            ("2020-10", true),
            ("2018_10", false),
            ("2017-AB", false),
            ("abcd-ef", false),
            ("2018-b10", false),
            ("202010", false),
        ];

        for (version, is_valid) in cases {
            assert_eq!(
                validate_version_string(version).is_ok(),
                is_valid,
                "version {version}"
            );
        }
    }

    #[test]
    fn test_descending_order() {
        let mut versions = vec!["2018-10", "2024-10", "2020-10"];
        versions.sort_by(|a, b| compare_versions_descending(a, b));
        assert_eq!(versions, vec!["2024-10", "2020-10", "2018-10"]);
    }
}
