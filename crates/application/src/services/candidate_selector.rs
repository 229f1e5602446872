//! Candidate selection
//!
//! Applies the departure/arrival window to the matched legs and picks the
//! earliest suitable bus. Rejections are returned alongside the winner so
//! that failure notifications can explain themselves.

use domain::entities::{BoundViolation, ItineraryLeg, SelectionCriteria};
use tracing::info;

/// A leg that failed the time window, with the bound(s) it broke
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// The rejected leg
    pub leg: ItineraryLeg,
    /// Which bound(s) were violated
    pub violation: BoundViolation,
}

/// Aggregate counts over all rejections
///
/// A leg violating both bounds is counted in both fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViolationSummary {
    /// Legs departing before the minimum departure
    pub too_early: usize,
    /// Legs arriving after the maximum arrival
    pub too_late: usize,
}

/// Result of one selection pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionOutcome {
    /// Earliest-departing leg satisfying both bounds
    pub selected: Option<ItineraryLeg>,
    /// Number of legs satisfying both bounds
    pub suitable_count: usize,
    /// Every leg that failed, in input order
    pub rejections: Vec<Rejection>,
}

impl SelectionOutcome {
    /// Whether there were no legs to choose from at all
    #[must_use]
    pub fn had_no_candidates(&self) -> bool {
        self.selected.is_none() && self.rejections.is_empty()
    }

    /// Count rejections per violated bound
    #[must_use]
    pub fn summary(&self) -> ViolationSummary {
        self.rejections
            .iter()
            .fold(ViolationSummary::default(), |mut acc, r| {
                if r.violation.is_too_early() {
                    acc.too_early += 1;
                }
                if r.violation.is_too_late() {
                    acc.too_late += 1;
                }
                acc
            })
    }
}

/// Evaluate both bounds for a single leg; `None` means it fits the window
#[must_use]
pub fn check_bounds(leg: &ItineraryLeg, criteria: &SelectionCriteria) -> Option<BoundViolation> {
    BoundViolation::from_checks(
        leg.departure < criteria.min_departure(),
        leg.arrival > criteria.max_arrival(),
    )
}

/// Pick the earliest-departing leg inside the window
///
/// Ties on departure keep the first leg in input order.
#[must_use]
pub fn select_candidate(legs: &[ItineraryLeg], criteria: &SelectionCriteria) -> SelectionOutcome {
    let mut outcome = SelectionOutcome::default();

    for leg in legs {
        match check_bounds(leg, criteria) {
            None => {
                info!(
                    departure = %leg.departure_hhmm(),
                    arrival = %leg.arrival_hhmm(),
                    "Suitable bus"
                );
                outcome.suitable_count += 1;
                let is_earlier = outcome
                    .selected
                    .as_ref()
                    .is_none_or(|best| leg.departure < best.departure);
                if is_earlier {
                    outcome.selected = Some(leg.clone());
                }
            },
            Some(violation) => {
                info!(
                    departure = %leg.departure_hhmm(),
                    arrival = %leg.arrival_hhmm(),
                    %violation,
                    "Rejected bus"
                );
                outcome.rejections.push(Rejection {
                    leg: leg.clone(),
                    violation,
                });
            },
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};
    use chrono_tz::Europe::London;
    use domain::value_objects::{RouteId, TravelMode};

    use super::*;

    fn leg(dep: (u32, u32), arr: (u32, u32), stop: &str) -> ItineraryLeg {
        ItineraryLeg {
            mode: TravelMode::Transit,
            route_short_name: "48".to_string(),
            route_long_name: None,
            departure_stop: stop.to_string(),
            arrival_stop: "Bevendean School".to_string(),
            departure: London
                .with_ymd_and_hms(2026, 1, 12, dep.0, dep.1, 0)
                .unwrap(),
            arrival: London
                .with_ymd_and_hms(2026, 1, 12, arr.0, arr.1, 0)
                .unwrap(),
            duration_minutes: 18,
        }
    }

    fn criteria() -> SelectionCriteria {
        SelectionCriteria::for_day(
            RouteId::new("48").unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            "08:20".parse().unwrap(),
            "08:45".parse().unwrap(),
            London,
        )
        .unwrap()
    }

    #[test]
    fn empty_input_has_no_candidate() {
        let outcome = select_candidate(&[], &criteria());
        assert!(outcome.selected.is_none());
        assert!(outcome.had_no_candidates());
        assert_eq!(outcome.summary(), ViolationSummary::default());
    }

    #[test]
    fn selects_single_fitting_leg() {
        let outcome = select_candidate(&[leg((8, 22), (8, 40), "A")], &criteria());
        assert_eq!(outcome.selected.unwrap().departure_hhmm(), "08:22");
        assert_eq!(outcome.suitable_count, 1);
        assert!(outcome.rejections.is_empty());
    }

    #[test]
    fn picks_earliest_departure() {
        let legs = [leg((8, 30), (8, 44), "A"), leg((8, 22), (8, 40), "B")];
        let outcome = select_candidate(&legs, &criteria());
        assert_eq!(outcome.selected.unwrap().departure_stop, "B");
        assert_eq!(outcome.suitable_count, 2);
    }

    #[test]
    fn ties_keep_first_in_input_order() {
        let legs = [leg((8, 22), (8, 40), "first"), leg((8, 22), (8, 41), "second")];
        let outcome = select_candidate(&legs, &criteria());
        assert_eq!(outcome.selected.unwrap().departure_stop, "first");
    }

    #[test]
    fn bounds_are_inclusive() {
        let outcome = select_candidate(&[leg((8, 20), (8, 45), "edge")], &criteria());
        assert!(outcome.selected.is_some());
    }

    #[test]
    fn reports_each_violation() {
        let legs = [
            leg((8, 10), (8, 30), "early"),
            leg((8, 30), (8, 50), "late"),
            leg((8, 5), (8, 50), "both"),
        ];
        let outcome = select_candidate(&legs, &criteria());

        assert!(outcome.selected.is_none());
        assert!(!outcome.had_no_candidates());
        let violations: Vec<_> = outcome.rejections.iter().map(|r| r.violation).collect();
        assert_eq!(
            violations,
            vec![
                BoundViolation::DepartsTooEarly,
                BoundViolation::ArrivesTooLate,
                BoundViolation::Both,
            ]
        );
        assert_eq!(
            outcome.summary(),
            ViolationSummary {
                too_early: 2,
                too_late: 2,
            }
        );
    }

    #[test]
    fn rejections_do_not_block_selection() {
        let legs = [leg((8, 10), (8, 30), "early"), leg((8, 25), (8, 43), "ok")];
        let outcome = select_candidate(&legs, &criteria());
        assert_eq!(outcome.selected.unwrap().departure_stop, "ok");
        assert_eq!(outcome.rejections.len(), 1);
    }

    #[test]
    fn check_bounds_single_leg() {
        assert_eq!(check_bounds(&leg((8, 22), (8, 40), "A"), &criteria()), None);
        assert_eq!(
            check_bounds(&leg((8, 19), (8, 40), "A"), &criteria()),
            Some(BoundViolation::DepartsTooEarly)
        );
        assert_eq!(
            check_bounds(&leg((8, 22), (8, 46), "A"), &criteria()),
            Some(BoundViolation::ArrivesTooLate)
        );
    }
}
