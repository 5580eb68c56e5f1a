//! Status data structures and timestamp utilities

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::elevator::ElevatorId;
use crate::errors::{Result, TrackerError};

/// Operating status reported for an elevator
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Warn,
    Bad,
}

/// Coarse grouping used by the transition guard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusGroup {
    Working,
    Broken,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Ok, Status::Warn, Status::Bad];

    /// Parse a status key as it appears in callback data and log records
    pub fn from_key(key: &str) -> Result<Self> {
        match key {
            "ok" => Ok(Status::Ok),
            "warn" => Ok(Status::Warn),
            "bad" => Ok(Status::Bad),
            other => Err(TrackerError::UnknownStatus(other.to_string())),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::Warn => "warn",
            Status::Bad => "bad",
        }
    }

    pub fn group(self) -> StatusGroup {
        match self {
            Status::Ok | Status::Warn => StatusGroup::Working,
            Status::Bad => StatusGroup::Broken,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Status::Ok => "✅",
            Status::Warn => "🟡",
            Status::Bad => "❌",
        }
    }

    /// Button label shown in the status keyboard
    pub fn label(self) -> &'static str {
        match self {
            Status::Ok => "✅ Отлично работает",
            Status::Warn => "🟡 Работает, но с оговорками",
            Status::Bad => "❌ Не работает",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Chat user that submitted a report
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reporter {
    pub id: i64,
    pub username: Option<String>,
    pub display_name: Option<String>,
}

impl Reporter {
    /// Build a reporter from raw chat identity fields, dropping blank names
    pub fn new(id: i64, username: Option<String>, display_name: Option<String>) -> Self {
        let clean = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            id,
            username: clean(username),
            display_name: clean(display_name),
        }
    }
}

/// One immutable status report for an elevator
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusEvent {
    pub timestamp: NaiveDateTime,
    pub elevator: ElevatorId,
    pub status: Status,
    pub reporter: Reporter,
}

/// Local wall-clock time truncated to whole seconds
pub fn now_local() -> NaiveDateTime {
    truncate_to_second(Local::now().naive_local())
}

pub fn truncate_to_second(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_nanosecond(0).unwrap_or(ts)
}

/// Source of the current time, swappable in tests
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the machine's local time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        now_local()
    }
}
