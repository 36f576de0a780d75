//! Uniqueness guarantees for reference numbering

use chrono::{Duration, TimeZone, Utc};
use core_kernel::{ClaimNumber, PolicyNumberSequence, QuoteNumber};
use std::collections::HashSet;

#[test]
fn quote_numbers_do_not_collide_across_ten_thousand_mints() {
    let mut seen = HashSet::new();
    for _ in 0..10_000 {
        assert!(seen.insert(QuoteNumber::generate()));
    }
}

#[test]
fn claim_numbers_do_not_collide_across_ten_thousand_mints() {
    let mut seen = HashSet::new();
    for _ in 0..10_000 {
        assert!(seen.insert(ClaimNumber::generate()));
    }
}

#[test]
fn policy_numbers_do_not_collide_even_when_the_clock_stalls() {
    let seq = PolicyNumberSequence::new();
    let frozen = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let mut seen = HashSet::new();
    for _ in 0..10_000 {
        assert!(seen.insert(seq.next(frozen)));
    }
}

#[test]
fn policy_numbers_are_strictly_increasing() {
    let seq = PolicyNumberSequence::new();
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let mut previous: Option<i64> = None;
    for step in 0..1_000 {
        // Alternate between advancing and repeating instants
        let now = start + Duration::milliseconds(step / 2);
        let number = seq.next(now);
        let value: i64 = number
            .as_str()
            .strip_prefix("MER-POL-")
            .unwrap()
            .parse()
            .unwrap();
        if let Some(prev) = previous {
            assert!(value > prev, "{value} did not advance past {prev}");
        }
        previous = Some(value);
    }
}

#[test]
fn namespaces_are_disjoint() {
    let quote = QuoteNumber::generate();
    let claim = ClaimNumber::generate();

    assert!(quote.as_str().parse::<ClaimNumber>().is_err());
    assert!(claim.as_str().parse::<QuoteNumber>().is_err());
}
