//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use chrono::NaiveDate;
use chrono_tz::Europe::London;
use domain::value_objects::{RouteId, TimeOfDay, TravelMode};
use proptest::prelude::*;

// ============================================================================
// TimeOfDay Property Tests
// ============================================================================

mod time_of_day_tests {
    use super::*;

    proptest! {
        #[test]
        fn display_parses_back(hour in 0u32..24, minute in 0u32..60) {
            let time = TimeOfDay::from_hm(hour, minute).unwrap();
            let parsed: TimeOfDay = time.to_string().parse().unwrap();
            prop_assert_eq!(parsed, time);
        }

        #[test]
        fn out_of_range_rejected(hour in 24u32..100, minute in 0u32..60) {
            prop_assert!(TimeOfDay::from_hm(hour, minute).is_err());
        }

        #[test]
        fn ordering_matches_minutes(
            h1 in 0u32..24, m1 in 0u32..60,
            h2 in 0u32..24, m2 in 0u32..60
        ) {
            let a = TimeOfDay::from_hm(h1, m1).unwrap();
            let b = TimeOfDay::from_hm(h2, m2).unwrap();
            prop_assert_eq!(a.cmp(&b), (h1 * 60 + m1).cmp(&(h2 * 60 + m2)));
        }

        #[test]
        fn anchored_instants_preserve_order_outside_dst_changes(
            h1 in 3u32..24, m1 in 0u32..60,
            h2 in 3u32..24, m2 in 0u32..60,
            day in 1u32..28
        ) {
            let date = NaiveDate::from_ymd_opt(2026, 6, day).unwrap();
            let a = TimeOfDay::from_hm(h1, m1).unwrap();
            let b = TimeOfDay::from_hm(h2, m2).unwrap();
            let ia = a.on(date, London).unwrap();
            let ib = b.on(date, London).unwrap();
            prop_assert_eq!(a.cmp(&b), ia.cmp(&ib));
        }
    }
}

// ============================================================================
// RouteId Property Tests
// ============================================================================

mod route_id_tests {
    use super::*;

    proptest! {
        #[test]
        fn surrounding_whitespace_is_ignored(name in "[A-Z0-9]{1,4}", pad in " {0,3}") {
            let padded = format!("{pad}{name}{pad}");
            let route = RouteId::new(&padded).unwrap();
            prop_assert_eq!(route.as_str(), name.as_str());
            prop_assert!(route.matches(&name));
        }

        #[test]
        fn never_matches_a_different_name(a in "[0-9]{1,3}", b in "[0-9]{1,3}") {
            let route = RouteId::new(&a).unwrap();
            prop_assert_eq!(route.matches(&b), a == b);
        }
    }
}

// ============================================================================
// TravelMode Property Tests
// ============================================================================

mod travel_mode_tests {
    use super::*;

    proptest! {
        #[test]
        fn only_transit_strings_are_transit(s in "[A-Za-z_]{0,12}") {
            let mode = TravelMode::from_provider(&s);
            prop_assert_eq!(mode.is_transit(), s.eq_ignore_ascii_case("TRANSIT"));
        }
    }
}
