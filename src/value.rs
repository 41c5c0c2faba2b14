//! Numeric field parsing for harness CSV output
//!
//! The benchmark harness is not consistent about how it writes numbers:
//! some columns carry units (`"42.5 ms"`, `"695.2MB/s"`), failed runs are
//! written as `N/A`, and older harness versions leave cells empty. Every
//! such field goes through [`parse_value`] before it reaches the statistics
//! engine.

use serde::{Deserialize, Serialize};

/// Tokens the harness writes for "no measurement" (exact, case-sensitive)
pub const MISSING_TOKENS: &[&str] = &["", "N/A", "NA", "null", "None"];

/// Unit suffixes stripped before numeric conversion
///
/// Order matters: the first suffix that matches is stripped and no other.
pub const UNIT_SUFFIXES: &[&str] = &[
    "ms", "MB/s", "GB/s", "KB/s", "MiB", "GiB", "KiB", "MB", "GB", "KB", "%",
];

/// Parse a raw CSV token into a finite value
///
/// Returns `None` for missing-data sentinels, for anything that is not a
/// base-10 number once the unit suffix is gone, and for non-finite results.
///
/// # Example
/// ```
/// use dockbench::value::parse_value;
///
/// assert_eq!(parse_value("42.5 ms"), Some(42.5));
/// assert_eq!(parse_value("695.2MB/s"), Some(695.2));
/// assert_eq!(parse_value("N/A"), None);
/// assert_eq!(parse_value("garbage"), None);
/// ```
pub fn parse_value(raw: &str) -> Option<f64> {
    let token = raw.trim();
    if MISSING_TOKENS.contains(&token) {
        return None;
    }

    let number = strip_unit(token).trim();
    let value = number.parse::<f64>().ok()?;

    value.is_finite().then_some(value)
}

/// Strip the first matching unit suffix, if any
fn strip_unit(token: &str) -> &str {
    UNIT_SUFFIXES
        .iter()
        .find_map(|suffix| token.strip_suffix(suffix))
        .unwrap_or(token)
}

/// Post-parse transformation applied to a column's values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    /// Use the value as parsed
    #[default]
    None,
    /// Use the absolute value (signed deviations analysed as magnitudes)
    Abs,
}

impl Transform {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::None => value,
            Self::Abs => value.abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_value("100"), Some(100.0));
        assert_eq!(parse_value("-3.25"), Some(-3.25));
        assert_eq!(parse_value("1e3"), Some(1000.0));
    }

    #[test]
    fn test_parse_with_units() {
        assert_eq!(parse_value("42.5 ms"), Some(42.5));
        assert_eq!(parse_value("42.5ms"), Some(42.5));
        assert_eq!(parse_value("695.2MB/s"), Some(695.2));
        assert_eq!(parse_value("1.2 GB/s"), Some(1.2));
        assert_eq!(parse_value("512MiB"), Some(512.0));
        assert_eq!(parse_value("48.7%"), Some(48.7));
    }

    #[test]
    fn test_only_first_suffix_is_stripped() {
        // "%" is never reached once "ms" matched, so the leftover "%" fails
        assert_eq!(parse_value("5%ms"), None);
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        assert_eq!(parse_value("  7.5  "), Some(7.5));
        assert_eq!(parse_value(" 12 ms "), Some(12.0));
    }

    #[test]
    fn test_missing_sentinels() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("   "), None);
        assert_eq!(parse_value("N/A"), None);
        assert_eq!(parse_value("NA"), None);
        assert_eq!(parse_value("null"), None);
        assert_eq!(parse_value("None"), None);
    }

    #[test]
    fn test_sentinels_are_case_sensitive_but_still_rejected() {
        // Not a sentinel, but not a number either
        assert_eq!(parse_value("n/a"), None);
        assert_eq!(parse_value("NULL"), None);
    }

    #[test]
    fn test_garbage_is_no_value() {
        assert_eq!(parse_value("garbage"), None);
        assert_eq!(parse_value("12 seconds"), None);
        assert_eq!(parse_value("ms"), None);
        assert_eq!(parse_value("1,5"), None);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(parse_value("inf"), None);
        assert_eq!(parse_value("-inf"), None);
        assert_eq!(parse_value("NaN"), None);
    }

    #[test]
    fn test_transform_abs() {
        assert_eq!(Transform::Abs.apply(-2.5), 2.5);
        assert_eq!(Transform::None.apply(-2.5), -2.5);
        assert_eq!(Transform::default(), Transform::None);
    }
}
