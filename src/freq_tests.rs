//! Tests for frequency aggregation

use super::*;
use proptest::prelude::*;

#[test]
fn test_counts_and_missing() {
    let table =
        FrequencyTable::from_values(vec![Some("A"), Some("A"), Some("B"), None, Some("B"), Some("B")]);

    let sorted = table.sorted();
    assert_eq!(sorted, vec![("B", 3), ("A", 2)]);
    assert_eq!(table.missing(), 1);
    assert_eq!(table.total(), 5);
}

#[test]
fn test_first_distinct_preserves_appearance_order() {
    let table =
        FrequencyTable::from_values(vec![Some("A"), Some("A"), Some("B"), None, Some("B"), Some("B")]);

    assert_eq!(table.first_distinct(10), vec!["A", "B"]);
    assert_eq!(table.first_distinct(1), vec!["A"]);
}

#[test]
fn test_ties_broken_by_first_appearance() {
    let table = FrequencyTable::from_values(vec![
        Some("washer"),
        Some("bolt"),
        Some("washer"),
        Some("bolt"),
        Some("nut"),
    ]);

    let sorted = table.sorted();
    assert_eq!(sorted, vec![("washer", 2), ("bolt", 2), ("nut", 1)]);
}

#[test]
fn test_empty_string_is_a_real_value() {
    let table = FrequencyTable::from_values(vec![Some(""), None, Some("")]);

    assert_eq!(table.sorted(), vec![("", 2)]);
    assert_eq!(table.missing(), 1);
}

#[test]
fn test_empty_table() {
    let table = FrequencyTable::new();
    assert_eq!(table.total(), 0);
    assert_eq!(table.missing(), 0);
    assert_eq!(table.distinct(), 0);
    assert!(table.sorted().is_empty());
    assert!(table.first_distinct(10).is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Every observation lands in exactly one bucket: a value count or missing
    #[test]
    fn prop_observation_count_is_conserved(
        values in proptest::collection::vec(
            proptest::option::of("[a-c]{1,2}"), 0..50
        )
    ) {
        let expected_missing = values.iter().filter(|v| v.is_none()).count();
        let expected_total = values.len() - expected_missing;

        let table = FrequencyTable::from_values(values);

        prop_assert_eq!(table.missing(), expected_missing);
        prop_assert_eq!(table.total(), expected_total);
        let sum: usize = table.sorted().iter().map(|(_, c)| c).sum();
        prop_assert_eq!(sum, expected_total);
    }

    // Sorted output is non-increasing in count
    #[test]
    fn prop_sorted_is_non_increasing(
        values in proptest::collection::vec("[a-e]{1,2}", 0..50)
    ) {
        let table = FrequencyTable::from_values(values.into_iter().map(Some));
        let sorted = table.sorted();
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }

    // first_distinct(n) is a prefix of first_distinct(m) for n <= m
    #[test]
    fn prop_first_distinct_is_prefix_stable(
        values in proptest::collection::vec("[a-e]{1,2}", 0..50),
        n in 0usize..10,
    ) {
        let table = FrequencyTable::from_values(values.into_iter().map(Some));
        let shorter = table.first_distinct(n);
        let longer = table.first_distinct(n + 5);
        prop_assert_eq!(&longer[..shorter.len()], &shorter[..]);
    }
}
