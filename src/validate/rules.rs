//! Rules shared by every message validator.

use std::collections::HashMap;
use std::hash::Hash;

use super::ValidationError;
use crate::types::{DateRange, DateRanged, Description};

/// How two adjacent date ranges are compared for overlap.
///
/// The message families disagree on boundary semantics and the difference is
/// contractual: availability and inventory spans treat a shared day as an
/// overlap, rate plan spans treat it as adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// `end == next.start` counts as overlap.
    ClosedInterval,
    /// `end == next.start` is adjacency, only `end > next.start` overlaps.
    HalfOpen,
}

impl OverlapPolicy {
    fn overlaps(self, first: DateRange, second: DateRange) -> bool {
        match self {
            Self::ClosedInterval => first.end >= second.start,
            Self::HalfOpen => first.end > second.start,
        }
    }
}

/// Verify no two ranges in the collection overlap under the given policy.
///
/// Ranges are sorted by start; only adjacent pairs need comparing after
/// that.
pub fn validate_overlaps<T: DateRanged>(
    items: &[T],
    policy: OverlapPolicy,
) -> Result<(), ValidationError> {
    if items.len() <= 1 {
        return Ok(());
    }

    let mut ranges: Vec<DateRange> = items.iter().map(DateRanged::date_range).collect();
    ranges.sort_by_key(|r| r.start);

    for pair in ranges.windows(2) {
        if policy.overlaps(pair[0], pair[1]) {
            return Err(ValidationError::new(format!(
                "date range [{} - {}] overlaps with [{} - {}]",
                pair[0].start, pair[0].end, pair[1].start, pair[1].end
            )));
        }
    }

    Ok(())
}

/// Group items by a key, preserving per-group insertion order.
pub fn group_by<T, K, F>(items: &[T], key_of: F) -> HashMap<K, Vec<&T>>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut groups: HashMap<K, Vec<&T>> = HashMap::new();
    for item in items {
        groups.entry(key_of(item)).or_default().push(item);
    }
    groups
}

/// The hotel code must be present and non-blank.
pub fn validate_hotel_code(hotel_code: &str) -> Result<(), ValidationError> {
    if hotel_code.trim().is_empty() {
        return Err(ValidationError::missing_attribute("HotelCode"));
    }
    Ok(())
}

/// Whether a string is empty or whitespace only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// No two descriptions may share the same language and text format.
pub fn validate_language_uniqueness(descriptions: &[Description]) -> Result<(), ValidationError> {
    let mut seen = std::collections::HashSet::new();
    for description in descriptions {
        let key = (description.language.trim(), description.text_format);
        if !seen.insert(key) {
            return Err(ValidationError::new(
                "duplicate language found for element Description",
            ));
        }
    }
    Ok(())
}

/// Canonical free-night discount pattern: one character per required night,
/// `0` for full-price nights followed by `1` for each discounted night.
pub fn discount_pattern(nights_required: u32, nights_discounted: u32) -> String {
    let full_price = nights_required.saturating_sub(nights_discounted) as usize;
    let mut pattern = String::with_capacity(nights_required as usize);
    pattern.extend(std::iter::repeat('0').take(full_price));
    pattern.extend(std::iter::repeat('1').take(nights_discounted as usize));
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap()
    }

    struct Span(DateRange);

    impl DateRanged for Span {
        fn date_range(&self) -> DateRange {
            self.0
        }
    }

    fn spans(pairs: &[(u32, u32)]) -> Vec<Span> {
        pairs
            .iter()
            .map(|&(s, e)| Span(DateRange::new(date(s), date(e))))
            .collect()
    }

    #[test]
    fn test_closed_interval_rejects_touching_ranges() {
        let items = spans(&[(1, 10), (10, 20)]);
        assert!(validate_overlaps(&items, OverlapPolicy::ClosedInterval).is_err());
        assert!(validate_overlaps(&items, OverlapPolicy::HalfOpen).is_ok());
    }

    #[test]
    fn test_unsorted_input_is_sorted_before_comparing() {
        let items = spans(&[(14, 20), (1, 10), (9, 20)]);
        assert!(validate_overlaps(&items, OverlapPolicy::ClosedInterval).is_err());
    }

    #[test]
    fn test_disjoint_ranges_pass() {
        let items = spans(&[(1, 10), (11, 20)]);
        assert!(validate_overlaps(&items, OverlapPolicy::ClosedInterval).is_ok());
    }

    #[test]
    fn test_hotel_code_must_not_be_blank() {
        assert!(validate_hotel_code("123").is_ok());
        assert!(validate_hotel_code("  ").is_err());
        assert!(validate_hotel_code("").is_err());
    }

    #[test]
    fn test_language_uniqueness_keyed_by_language_and_format() {
        use crate::types::TextFormat;
        let descs = vec![
            Description {
                text_format: TextFormat::PlainText,
                language: "de".into(),
                value: "Doppelzimmer".into(),
            },
            Description {
                text_format: TextFormat::Html,
                language: "de".into(),
                value: "<b>Doppelzimmer</b>".into(),
            },
        ];
        assert!(validate_language_uniqueness(&descs).is_ok());

        let mut duplicated = descs.clone();
        duplicated.push(descs[0].clone());
        assert!(validate_language_uniqueness(&duplicated).is_err());
    }

    #[test]
    fn test_discount_pattern_derivation() {
        assert_eq!(discount_pattern(5, 2), "00011");
        assert_eq!(discount_pattern(3, 0), "000");
        assert_eq!(discount_pattern(7, 1), "0000001");
    }

    proptest! {
        #[test]
        fn prop_discount_pattern_length_equals_required_nights(
            required in 0u32..30,
            discounted in 0u32..30,
        ) {
            let discounted = discounted.min(required);
            let pattern = discount_pattern(required, discounted);
            prop_assert_eq!(pattern.len(), required as usize);
            prop_assert_eq!(
                pattern.bytes().filter(|&b| b == b'1').count(),
                discounted as usize
            );
        }
    }
}
