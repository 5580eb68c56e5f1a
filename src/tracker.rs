//! Core service tying the event logs, the guard and reporting together

use crate::config::Config;
use crate::elevator::ElevatorId;
use crate::errors::Result;
use crate::event_log::EventLogStore;
use crate::guard::needs_confirmation;
use crate::query::StatusQuery;
use crate::status::{Clock, Reporter, Status, StatusEvent, SystemClock};
use crate::uptime::{ReportPeriod, ReportWindow, UptimeTotals, aggregate, render_report};

use chrono::NaiveDateTime;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Statuses the guard inspects before a new report
const GUARD_HISTORY: usize = 2;

/// Result of a status report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    Recorded(StatusEvent),
    /// Nothing was written; the change must be confirmed first
    NeedsConfirmation,
}

/// Entry point for the presentation layer
#[derive(Clone)]
pub struct StatusTracker {
    store: EventLogStore,
    query: StatusQuery,
    clock: Arc<dyn Clock>,
}

impl StatusTracker {
    pub fn new(config: &Config) -> Self {
        Self::with_clock(EventLogStore::new(&config.log_dir), Arc::new(SystemClock))
    }

    pub fn with_clock(store: EventLogStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            query: StatusQuery::new(store.clone()),
            store,
            clock,
        }
    }

    pub fn store(&self) -> &EventLogStore {
        &self.store
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Record `status` unless the transition guard asks for confirmation
    #[instrument(skip(self, reporter))]
    pub async fn report_status(
        &self,
        elevator: ElevatorId,
        status: Status,
        reporter: Reporter,
    ) -> Result<ReportOutcome> {
        let recent = self.query.last_n_statuses(elevator, GUARD_HISTORY).await?;

        if needs_confirmation(&recent, status) {
            info!(
                "Status {} for elevator {} changes group after {:?}, confirmation required",
                status, elevator, recent
            );
            return Ok(ReportOutcome::NeedsConfirmation);
        }

        let event = self
            .store
            .append(elevator, status, reporter, self.clock.now())
            .await?;
        Ok(ReportOutcome::Recorded(event))
    }

    /// Record `status` without consulting the guard
    #[instrument(skip(self, reporter))]
    pub async fn confirm_status(
        &self,
        elevator: ElevatorId,
        status: Status,
        reporter: Reporter,
    ) -> Result<StatusEvent> {
        self.store
            .append(elevator, status, reporter, self.clock.now())
            .await
    }

    /// Last known status of each elevator, in the given order
    pub async fn get_menu_state(
        &self,
        elevators: &[ElevatorId],
    ) -> Result<Vec<(ElevatorId, Option<Status>)>> {
        let mut state = Vec::with_capacity(elevators.len());
        for elevator in elevators {
            state.push((*elevator, self.query.last_status(*elevator).await?));
        }
        Ok(state)
    }

    /// Menu state for every elevator in menu order
    pub async fn menu_state(&self) -> Result<Vec<(ElevatorId, Option<Status>)>> {
        let elevators: Vec<ElevatorId> = ElevatorId::menu_order().collect();
        self.get_menu_state(&elevators).await
    }

    /// Seconds per status for `elevator` over `window`
    pub async fn get_report(&self, elevator: ElevatorId, window: ReportWindow) -> Result<UptimeTotals> {
        let events = self.store.read_all(elevator).await?;
        let totals = aggregate(&events, window);
        debug!(
            "Aggregated {} events for elevator {}: {:?}",
            events.len(),
            elevator,
            totals
        );
        Ok(totals)
    }

    /// Window for `period` ending now.
    ///
    /// The all-time window starts at the earliest event of any elevator,
    /// so elevators first reported later show unknown time up front.
    pub async fn report_window(&self, period: ReportPeriod) -> Result<ReportWindow> {
        let earliest = match period {
            ReportPeriod::AllTime => self.earliest_event().await?,
            _ => None,
        };
        Ok(period.window(self.clock.now(), earliest))
    }

    /// Aggregate and render a report in one go
    pub async fn report_text(&self, elevator: ElevatorId, period: ReportPeriod) -> Result<String> {
        let window = self.report_window(period).await?;
        let totals = self.get_report(elevator, window).await?;
        Ok(render_report(elevator, period, &totals))
    }

    async fn earliest_event(&self) -> Result<Option<NaiveDateTime>> {
        let mut earliest: Option<NaiveDateTime> = None;
        for elevator in ElevatorId::all() {
            let first = self
                .store
                .read_all(elevator)
                .await?
                .iter()
                .map(|e| e.timestamp)
                .min();
            earliest = match (earliest, first) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            };
        }
        Ok(earliest)
    }
}
