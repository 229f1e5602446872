//! Route filter
//!
//! Reduces the provider's raw itinerary to the transit legs of one route.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use domain::entities::{Itinerary, ItineraryLeg, ItineraryStep, TransitDetails};
use domain::value_objects::RouteId;
use tracing::{debug, warn};

/// Extract the transit legs whose short name equals `route`
///
/// Legs are returned in route → leg → step order. A matching step with a
/// missing or unrepresentable timestamp is dropped on its own; the rest of
/// the itinerary is still processed. Absent data yields an empty list.
#[must_use]
pub fn filter_route_legs(
    itinerary: Option<&Itinerary>,
    route: &RouteId,
    tz: Tz,
) -> Vec<ItineraryLeg> {
    let Some(itinerary) = itinerary else {
        debug!("No itinerary data to filter");
        return Vec::new();
    };

    itinerary
        .steps()
        .filter(|step| step.travel_mode.is_transit())
        .filter_map(|step| {
            let details = step.transit.as_ref()?;
            let short_name = details.line_short_name.as_deref()?;
            route.matches(short_name).then(|| to_leg(step, details, tz))?
        })
        .collect()
}

fn to_leg(step: &ItineraryStep, details: &TransitDetails, tz: Tz) -> Option<ItineraryLeg> {
    let route_short_name = details.line_short_name.clone().unwrap_or_default();

    let (Some(departure), Some(arrival)) = (
        epoch_in(details.departure_epoch, tz),
        epoch_in(details.arrival_epoch, tz),
    ) else {
        warn!(route = %route_short_name, "Skipping leg with missing timestamps");
        return None;
    };

    if arrival < departure {
        warn!(
            route = %route_short_name,
            %departure,
            %arrival,
            "Skipping leg that arrives before it departs"
        );
        return None;
    }

    let duration_minutes = step
        .duration_secs
        .map_or(0, |secs| u32::try_from(secs.max(0) / 60).unwrap_or(u32::MAX));

    Some(ItineraryLeg {
        mode: step.travel_mode,
        route_short_name,
        route_long_name: details.line_name.clone(),
        departure_stop: details.departure_stop.clone().unwrap_or_default(),
        arrival_stop: details.arrival_stop.clone().unwrap_or_default(),
        departure,
        arrival,
        duration_minutes,
    })
}

fn epoch_in(epoch: Option<i64>, tz: Tz) -> Option<DateTime<Tz>> {
    tz.timestamp_opt(epoch?, 0).single()
}

#[cfg(test)]
mod tests {
    use chrono_tz::Europe::London;
    use domain::entities::{ItineraryRoute, RouteSegment};
    use domain::value_objects::TravelMode;

    use super::*;

    // 2026-01-12 08:22:00 GMT
    const DEP: i64 = 1_768_206_120;

    fn details(line: &str, dep: Option<i64>, arr: Option<i64>) -> TransitDetails {
        TransitDetails {
            line_short_name: Some(line.to_string()),
            line_name: Some("Brighton Station - Bevendean".to_string()),
            headsign: Some("Bevendean".to_string()),
            departure_stop: Some("Saunders Park View".to_string()),
            arrival_stop: Some("Bevendean School".to_string()),
            departure_epoch: dep,
            arrival_epoch: arr,
        }
    }

    fn itinerary(steps: Vec<ItineraryStep>) -> Itinerary {
        Itinerary::new(vec![ItineraryRoute {
            summary: None,
            legs: vec![RouteSegment { steps }],
        }])
    }

    fn route(id: &str) -> RouteId {
        RouteId::new(id).unwrap()
    }

    #[test]
    fn absent_itinerary_yields_nothing() {
        assert!(filter_route_legs(None, &route("48"), London).is_empty());
    }

    #[test]
    fn empty_itinerary_yields_nothing() {
        let empty = Itinerary::default();
        assert!(filter_route_legs(Some(&empty), &route("48"), London).is_empty());
    }

    #[test]
    fn keeps_matching_transit_leg() {
        let data = itinerary(vec![
            ItineraryStep::walking(240),
            ItineraryStep::transit(Some(1080), details("48", Some(DEP), Some(DEP + 1080))),
        ]);

        let legs = filter_route_legs(Some(&data), &route("48"), London);

        assert_eq!(legs.len(), 1);
        let leg = &legs[0];
        assert_eq!(leg.mode, TravelMode::Transit);
        assert_eq!(leg.route_short_name, "48");
        assert_eq!(leg.departure_hhmm(), "08:22");
        assert_eq!(leg.arrival_hhmm(), "08:40");
        assert_eq!(leg.duration_minutes, 18);
        assert_eq!(leg.departure_stop, "Saunders Park View");
        assert_eq!(leg.arrival_stop, "Bevendean School");
        assert_eq!(leg.departure.timezone(), London);
    }

    #[test]
    fn drops_other_routes() {
        let data = itinerary(vec![
            ItineraryStep::transit(Some(600), details("23", Some(DEP), Some(DEP + 600))),
            ItineraryStep::transit(Some(600), details("48", Some(DEP), Some(DEP + 600))),
        ]);

        let legs = filter_route_legs(Some(&data), &route("48"), London);
        assert_eq!(legs.len(), 1);
        assert_eq!(legs[0].route_short_name, "48");
    }

    #[test]
    fn drops_non_transit_steps_even_with_details() {
        let mut step = ItineraryStep::transit(Some(600), details("48", Some(DEP), Some(DEP + 600)));
        step.travel_mode = TravelMode::Walking;

        let legs = filter_route_legs(Some(&itinerary(vec![step])), &route("48"), London);
        assert!(legs.is_empty());
    }

    #[test]
    fn skips_leg_without_departure_time() {
        let data = itinerary(vec![
            ItineraryStep::transit(Some(600), details("48", None, Some(DEP + 600))),
            ItineraryStep::transit(Some(600), details("48", Some(DEP + 480), Some(DEP + 1080))),
        ]);

        let legs = filter_route_legs(Some(&data), &route("48"), London);
        assert_eq!(legs.len(), 1);
        assert_eq!(legs[0].departure_hhmm(), "08:30");
    }

    #[test]
    fn skips_leg_without_arrival_time() {
        let data = itinerary(vec![ItineraryStep::transit(
            Some(600),
            details("48", Some(DEP), None),
        )]);
        assert!(filter_route_legs(Some(&data), &route("48"), London).is_empty());
    }

    #[test]
    fn skips_leg_arriving_before_departure() {
        let data = itinerary(vec![ItineraryStep::transit(
            Some(600),
            details("48", Some(DEP), Some(DEP - 60)),
        )]);
        assert!(filter_route_legs(Some(&data), &route("48"), London).is_empty());
    }

    #[test]
    fn preserves_traversal_order() {
        let later = ItineraryStep::transit(Some(600), details("48", Some(DEP + 480), Some(DEP + 1080)));
        let earlier = ItineraryStep::transit(Some(600), details("48", Some(DEP), Some(DEP + 600)));
        let data = Itinerary::new(vec![
            ItineraryRoute {
                summary: Some("via Lewes Rd".to_string()),
                legs: vec![RouteSegment { steps: vec![later] }],
            },
            ItineraryRoute {
                summary: Some("via Hollingdean".to_string()),
                legs: vec![RouteSegment {
                    steps: vec![earlier],
                }],
            },
        ]);

        let legs = filter_route_legs(Some(&data), &route("48"), London);
        let times: Vec<_> = legs.iter().map(ItineraryLeg::departure_hhmm).collect();
        assert_eq!(times, vec!["08:30", "08:22"]);
    }

    #[test]
    fn duration_floors_to_whole_minutes() {
        let data = itinerary(vec![ItineraryStep::transit(
            Some(1139),
            details("48", Some(DEP), Some(DEP + 1139)),
        )]);
        let legs = filter_route_legs(Some(&data), &route("48"), London);
        assert_eq!(legs[0].duration_minutes, 18);
    }

    #[test]
    fn missing_duration_is_zero() {
        let data = itinerary(vec![ItineraryStep::transit(
            None,
            details("48", Some(DEP), Some(DEP + 600)),
        )]);
        let legs = filter_route_legs(Some(&data), &route("48"), London);
        assert_eq!(legs[0].duration_minutes, 0);
    }

    #[test]
    fn missing_stop_names_become_empty() {
        let mut d = details("48", Some(DEP), Some(DEP + 600));
        d.departure_stop = None;
        d.line_name = None;
        let data = itinerary(vec![ItineraryStep::transit(Some(600), d)]);

        let legs = filter_route_legs(Some(&data), &route("48"), London);
        assert_eq!(legs[0].departure_stop, "");
        assert!(legs[0].route_long_name.is_none());
    }
}
