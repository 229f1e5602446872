//! Bus reminder service - one complete reminder run
//!
//! Fetches today's itinerary, picks the bus, and hands exactly one payload
//! to the notification sink. Every failure ends in an alert payload and a
//! failed [`RunReport`]; nothing is returned as an error.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use domain::entities::{ItineraryLeg, NotificationPayload, ReminderPlan, SelectionCriteria};
use domain::value_objects::{RouteId, TimeOfDay};
use tracing::{debug, error, info, instrument, warn};

use super::candidate_selector::select_candidate;
use super::notification_composer::{AlertReason, compose_alert, compose_reminder};
use super::reminder_scheduler::plan_reminder;
use super::route_filter::filter_route_legs;
use crate::ports::{DeliveryReceipt, ItineraryPort, ItineraryQuery, NotificationSinkPort};

/// Everything a run needs to know, passed in explicitly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusReminderConfig {
    /// Route to catch
    pub route: RouteId,
    /// Home address
    pub origin: String,
    /// School address
    pub destination: String,
    /// Earliest acceptable departure (wall clock)
    pub min_departure: TimeOfDay,
    /// Latest acceptable arrival (wall clock)
    pub max_arrival: TimeOfDay,
    /// Desired reminder lead time
    pub reminder_lead_minutes: u32,
    /// Timezone the wall-clock bounds refer to
    pub timezone: Tz,
    /// Timetable page quoted when the provider is unavailable
    pub fallback_schedule_url: Option<String>,
}

/// What a run decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// A bus was selected and a reminder composed
    Scheduled {
        /// The selected bus
        bus: ItineraryLeg,
        /// When the reminder fires
        plan: ReminderPlan,
    },
    /// No reminder; an alert was composed instead
    Alerted(AlertReason),
}

/// Result of one run: the decision, the payload, and what the sink said
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Decision taken
    pub outcome: RunOutcome,
    /// Payload handed to the sink
    pub payload: NotificationPayload,
    /// Sink receipt, or the sink error text
    pub delivery: Result<DeliveryReceipt, String>,
}

impl RunReport {
    /// A run succeeds only if a reminder was scheduled and the sink took it
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, RunOutcome::Scheduled { .. }) && self.delivery.is_ok()
    }

    /// The selected bus, if any
    #[must_use]
    pub const fn selected_bus(&self) -> Option<&ItineraryLeg> {
        match &self.outcome {
            RunOutcome::Scheduled { bus, .. } => Some(bus),
            RunOutcome::Alerted(_) => None,
        }
    }

    /// The alert reason, if the run ended in an alert
    #[must_use]
    pub const fn alert_reason(&self) -> Option<&AlertReason> {
        match &self.outcome {
            RunOutcome::Alerted(reason) => Some(reason),
            RunOutcome::Scheduled { .. } => None,
        }
    }
}

/// Orchestrates a single reminder run
pub struct BusReminderService {
    itinerary: Arc<dyn ItineraryPort>,
    sink: Arc<dyn NotificationSinkPort>,
    config: BusReminderConfig,
}

impl fmt::Debug for BusReminderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BusReminderService")
            .field("route", &self.config.route)
            .field("timezone", &self.config.timezone)
            .finish_non_exhaustive()
    }
}

impl BusReminderService {
    /// Create a new service
    pub fn new(
        itinerary: Arc<dyn ItineraryPort>,
        sink: Arc<dyn NotificationSinkPort>,
        config: BusReminderConfig,
    ) -> Self {
        Self {
            itinerary,
            sink,
            config,
        }
    }

    /// Run configuration
    #[must_use]
    pub const fn config(&self) -> &BusReminderConfig {
        &self.config
    }

    /// Run once against the wall clock
    pub async fn run(&self) -> RunReport {
        self.run_at(Utc::now()).await
    }

    /// Run once as if the current instant were `now`
    #[instrument(skip(self), fields(route = %self.config.route))]
    pub async fn run_at(&self, now: DateTime<Utc>) -> RunReport {
        let tz = self.config.timezone;
        let now_local = now.with_timezone(&tz);
        let outcome = self.decide(now, now_local).await;

        let payload = match &outcome {
            RunOutcome::Scheduled { bus, plan } => {
                info!(
                    departure = %bus.departure_hhmm(),
                    arrival = %bus.arrival_hhmm(),
                    reminder_at = %plan.reminder_at,
                    minutes_before = plan.minutes_before,
                    clamped = plan.clamped,
                    "Scheduling bus reminder"
                );
                compose_reminder(bus, plan)
            },
            RunOutcome::Alerted(reason) => {
                warn!(reason = reason.kind(), "Sending bus alert");
                compose_alert(&reason.to_string(), now_local)
            },
        };

        let delivery = match self.sink.deliver(&payload).await {
            Ok(receipt) => {
                info!(
                    kind = payload.kind(),
                    reference = %receipt.reference,
                    link = receipt.link.as_deref().unwrap_or("-"),
                    "Notification delivered"
                );
                Ok(receipt)
            },
            Err(e) => {
                error!(kind = payload.kind(), error = %e, "Notification sink failed");
                Err(e.to_string())
            },
        };

        RunReport {
            outcome,
            payload,
            delivery,
        }
    }

    async fn decide(&self, now: DateTime<Utc>, now_local: DateTime<Tz>) -> RunOutcome {
        let cfg = &self.config;

        let criteria = match SelectionCriteria::for_day(
            cfg.route.clone(),
            now_local.date_naive(),
            cfg.min_departure,
            cfg.max_arrival,
            cfg.timezone,
        ) {
            Ok(criteria) => criteria,
            Err(e) => {
                error!(error = %e, "Cannot build selection criteria");
                return RunOutcome::Alerted(AlertReason::InvalidCriteria {
                    detail: e.to_string(),
                });
            },
        };

        let query = ItineraryQuery {
            origin: cfg.origin.clone(),
            destination: cfg.destination.clone(),
            departure: now,
        };

        let itinerary = match self.itinerary.fetch_itinerary(&query).await {
            Ok(itinerary) => itinerary,
            Err(e) => {
                error!(error = %e, "Itinerary provider unavailable");
                return RunOutcome::Alerted(AlertReason::ProviderUnavailable {
                    detail: e.to_string(),
                    fallback_url: cfg.fallback_schedule_url.clone(),
                });
            },
        };
        debug!(routes = itinerary.routes.len(), "Itinerary received");

        let legs = filter_route_legs(Some(&itinerary), &cfg.route, cfg.timezone);
        info!(count = legs.len(), "Matched route legs");

        let selection = select_candidate(&legs, &criteria);
        let Some(bus) = selection.selected else {
            if legs.is_empty() {
                return RunOutcome::Alerted(AlertReason::NoMatchingRoute {
                    route: cfg.route.clone(),
                    min_departure: cfg.min_departure,
                    max_arrival: cfg.max_arrival,
                });
            }
            let summary = selection.summary();
            return RunOutcome::Alerted(AlertReason::NoSuitableCandidate {
                route: cfg.route.clone(),
                min_departure: cfg.min_departure,
                max_arrival: cfg.max_arrival,
                rejections: selection.rejections,
                summary,
            });
        };

        match plan_reminder(bus.departure, cfg.reminder_lead_minutes, now_local) {
            Some(plan) => RunOutcome::Scheduled { bus, plan },
            None => RunOutcome::Alerted(AlertReason::AlreadyDeparted {
                route: cfg.route.clone(),
                departure: bus.departure,
            }),
        }
    }
}
