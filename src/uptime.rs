//! Time-in-status aggregation over report windows

use chrono::{Duration, NaiveDateTime};

use crate::elevator::ElevatorId;
use crate::errors::{Result, TrackerError};
use crate::status::{Status, StatusEvent};

/// Text shown when a window holds no known status time
pub const NO_DATA: &str = "нет данных";

/// Selectable report periods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    Day,
    Week,
    Month,
    AllTime,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 4] = [
        ReportPeriod::Day,
        ReportPeriod::Week,
        ReportPeriod::Month,
        ReportPeriod::AllTime,
    ];

    pub fn from_key(key: &str) -> Result<Self> {
        match key {
            "24h" => Ok(ReportPeriod::Day),
            "7d" => Ok(ReportPeriod::Week),
            "30d" => Ok(ReportPeriod::Month),
            "all" => Ok(ReportPeriod::AllTime),
            other => Err(TrackerError::UnknownPeriod(other.to_string())),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ReportPeriod::Day => "24h",
            ReportPeriod::Week => "7d",
            ReportPeriod::Month => "30d",
            ReportPeriod::AllTime => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportPeriod::Day => "за 24 часа",
            ReportPeriod::Week => "за 7 дней",
            ReportPeriod::Month => "за 30 дней",
            ReportPeriod::AllTime => "за всё время",
        }
    }

    /// Fixed length, `None` for the all-time period
    pub fn length(self) -> Option<Duration> {
        match self {
            ReportPeriod::Day => Some(Duration::hours(24)),
            ReportPeriod::Week => Some(Duration::days(7)),
            ReportPeriod::Month => Some(Duration::days(30)),
            ReportPeriod::AllTime => None,
        }
    }

    /// Window ending at `now`. The all-time window starts at `earliest`,
    /// the first event across every elevator, and is empty without one.
    pub fn window(self, now: NaiveDateTime, earliest: Option<NaiveDateTime>) -> ReportWindow {
        let start = match self.length() {
            Some(length) => now - length,
            None => earliest.map(|e| e.min(now)).unwrap_or(now),
        };
        ReportWindow { start, end: now }
    }
}

/// Half-open interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ReportWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Length in whole seconds, zero for empty or inverted windows
    pub fn seconds(&self) -> i64 {
        (self.end - self.start).num_seconds().max(0)
    }

    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.start <= ts && ts < self.end
    }
}

/// Seconds spent in each status inside one window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UptimeTotals {
    pub ok: i64,
    pub warn: i64,
    pub bad: i64,
    pub unknown: i64,
}

impl UptimeTotals {
    /// Seconds for a status, `None` meaning unknown
    pub fn get(&self, status: Option<Status>) -> i64 {
        match status {
            Some(Status::Ok) => self.ok,
            Some(Status::Warn) => self.warn,
            Some(Status::Bad) => self.bad,
            None => self.unknown,
        }
    }

    fn add(&mut self, status: Option<Status>, seconds: i64) {
        let slot = match status {
            Some(Status::Ok) => &mut self.ok,
            Some(Status::Warn) => &mut self.warn,
            Some(Status::Bad) => &mut self.bad,
            None => &mut self.unknown,
        };
        *slot += seconds;
    }

    pub fn known(&self) -> i64 {
        self.ok + self.warn + self.bad
    }

    pub fn total(&self) -> i64 {
        self.known() + self.unknown
    }
}

/// Reconstruct the status timeline of `events` and sum it over `window`.
///
/// Time before the first event is `unknown`. Events may arrive in any
/// order; they are sorted by timestamp, ties keeping log order.
pub fn aggregate(events: &[StatusEvent], window: ReportWindow) -> UptimeTotals {
    let mut totals = UptimeTotals::default();
    if window.start >= window.end {
        return totals;
    }

    let mut sorted: Vec<&StatusEvent> = events.iter().collect();
    sorted.sort_by_key(|e| e.timestamp);

    let mut current: Option<Status> = sorted
        .iter()
        .take_while(|e| e.timestamp < window.start)
        .last()
        .map(|e| e.status);
    let mut boundary = window.start;

    for event in sorted.iter().filter(|e| window.contains(e.timestamp)) {
        totals.add(current, (event.timestamp - boundary).num_seconds());
        current = Some(event.status);
        boundary = event.timestamp;
    }

    totals.add(current, (window.end - boundary).num_seconds());
    totals
}

/// Integer percentage of `part` in `whole`, rounding halves up
pub fn percent(part: i64, whole: i64) -> i64 {
    if whole <= 0 {
        return 0;
    }
    (200 * part + whole) / (2 * whole)
}

/// Whole minutes, as `"{h}ч {m}м"` from one hour up, else `"{m}м"`
pub fn format_duration(seconds: i64) -> String {
    let minutes = seconds.max(0) / 60;
    if minutes >= 60 {
        format!("{}ч {}м", minutes / 60, minutes % 60)
    } else {
        format!("{}м", minutes)
    }
}

/// Render a report message for one elevator
pub fn render_report(elevator: ElevatorId, period: ReportPeriod, totals: &UptimeTotals) -> String {
    let mut text = format!("Лифт {} {}:\n", elevator, period.label());

    if totals.known() == 0 {
        text.push_str(NO_DATA);
        return text;
    }

    // Unknown time, when present, counts towards the denominator.
    let whole = if totals.unknown > 0 {
        totals.total()
    } else {
        totals.known()
    };

    let mut lines: Vec<String> = Status::ALL
        .iter()
        .map(|status| {
            let seconds = totals.get(Some(*status));
            format!(
                "{}: {} ({}%)",
                status.label(),
                format_duration(seconds),
                percent(seconds, whole)
            )
        })
        .collect();

    if totals.unknown > 0 {
        lines.push(format!(
            "❔ Нет данных: {} ({}%)",
            format_duration(totals.unknown),
            percent(totals.unknown, whole)
        ));
    }

    text.push_str(&lines.join("\n"));
    text
}
