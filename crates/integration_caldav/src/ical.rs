//! iCalendar (RFC 5545) serialisation of [`CalendarEvent`]
//!
//! Escaping of TEXT values and folding of long content lines are left to
//! the `icalendar` crate.

use chrono::{DateTime, Duration, Utc};
use icalendar::{Alarm, Calendar, Component, Event, EventLike};

use crate::client::CalendarEvent;

/// Build a VCALENDAR holding one VEVENT with a display VALARM
///
/// `dtstamp` is the creation instant written to `DTSTAMP`.
#[must_use]
pub fn build_vevent(event: &CalendarEvent, dtstamp: DateTime<Utc>) -> String {
    let trigger = -Duration::minutes(i64::from(event.alarm_minutes_before));

    let mut vevent = Event::new();
    vevent
        .uid(&event.uid)
        .timestamp(dtstamp)
        .summary(&event.summary)
        .starts(event.start)
        .ends(event.end)
        .alarm(Alarm::display(&event.summary, trigger));

    if let Some(desc) = &event.description {
        vevent.description(desc);
    }

    let mut calendar = Calendar::new();
    calendar.push(vevent.done());
    calendar.to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use icalendar::{CalendarComponent, parser};

    use super::*;

    fn event() -> CalendarEvent {
        CalendarEvent {
            uid: "b1f4c2".to_string(),
            summary: "🚌 Bus 48 to School".to_string(),
            description: Some("From: Saunders Park View, Brighton\nDeparture: 08:22".to_string()),
            start: Utc.with_ymd_and_hms(2026, 1, 12, 8, 22, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 1, 12, 8, 27, 0).unwrap(),
            alarm_minutes_before: 12,
        }
    }

    fn parse_event(ical: &str) -> Event {
        let unfolded = parser::unfold(ical);
        let parsed = parser::read_calendar(&unfolded).unwrap();
        parsed
            .components
            .into_iter()
            .find_map(|c| match CalendarComponent::from(c) {
                CalendarComponent::Event(event) => Some(event),
                _ => None,
            })
            .unwrap()
    }

    fn trigger_line(ical: &str) -> &str {
        ical.split("\r\n")
            .find(|line| line.starts_with("TRIGGER"))
            .unwrap()
    }

    #[test]
    fn test_vevent_structure() {
        let dtstamp = Utc.with_ymd_and_hms(2026, 1, 12, 7, 0, 0).unwrap();
        let ical = build_vevent(&event(), dtstamp);

        assert!(ical.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ical.trim_end().ends_with("END:VCALENDAR"));
        assert!(ical.contains("BEGIN:VALARM\r\n"));
        assert!(ical.contains("ACTION:DISPLAY\r\n"));
        assert!(trigger_line(&ical).contains(":-P"));

        let vevent = parse_event(&ical);
        assert_eq!(vevent.property_value("UID"), Some("b1f4c2"));
        assert_eq!(vevent.property_value("DTSTAMP"), Some("20260112T070000Z"));
        assert_eq!(vevent.property_value("DTSTART"), Some("20260112T082200Z"));
        assert_eq!(vevent.property_value("DTEND"), Some("20260112T082700Z"));
        assert_eq!(vevent.get_summary(), Some("🚌 Bus 48 to School"));
    }

    #[test]
    fn test_description_newlines_stay_in_one_property() {
        let ical = build_vevent(&event(), Utc::now());
        assert!(!ical.contains("\nDeparture"));
        assert!(ical.contains("Departure: 08:22"));
    }

    #[test]
    fn test_vevent_without_description() {
        let mut event = event();
        event.description = None;
        event.alarm_minutes_before = 0;
        let ical = build_vevent(&event, Utc::now());

        // Only the alarm carries a DESCRIPTION
        assert_eq!(ical.matches("\r\nDESCRIPTION:").count(), 1);
        assert!(!trigger_line(&ical).contains(":-P"));
    }

    #[test]
    fn test_long_lines_are_folded() {
        let mut event = event();
        event.description = Some("⏰ Leave now to catch the bus! ".repeat(6));
        let ical = build_vevent(&event, Utc::now());

        for line in ical.split("\r\n") {
            assert!(line.len() <= 75, "line too long: {line}");
        }
        let vevent = parse_event(&ical);
        assert!(vevent.get_description().unwrap().starts_with("⏰ Leave now"));
    }
}
