//! Line codec for status log files
//!
//! Every record is a single JSON object on its own line:
//! `{"ts": "2025-01-01T10:30:45", "elevator": "8240", "status": "ok",
//!   "user_id": 1, "username": "ivan", "first_name": "Ivan"}`

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::elevator::ElevatorId;
use crate::errors::{Result, TrackerError};
use crate::status::{Reporter, Status, StatusEvent, truncate_to_second};

/// Timestamp layout written to `ts`
pub const TS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Serialize)]
struct RecordOut<'a> {
    ts: String,
    elevator: ElevatorId,
    status: Status,
    user_id: i64,
    username: Option<&'a str>,
    first_name: Option<&'a str>,
}

#[derive(Deserialize)]
struct RecordIn {
    ts: String,
    elevator: String,
    status: Status,
    #[serde(default)]
    user_id: i64,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
}

/// Serialize an event as one log line, newline included
pub fn encode_line(event: &StatusEvent) -> Result<String> {
    let record = RecordOut {
        ts: event.timestamp.format(TS_FORMAT).to_string(),
        elevator: event.elevator,
        status: event.status,
        user_id: event.reporter.id,
        username: event.reporter.username.as_deref(),
        first_name: event.reporter.display_name.as_deref(),
    };

    let mut line = serde_json::to_string(&record)?;
    line.push('\n');
    Ok(line)
}

/// Parse a single log line.
///
/// `Ok(None)` for blank lines, `Err` for anything that is not a valid
/// record. Callers reading whole files treat both as "skip".
pub fn parse_line(line: &str) -> Result<Option<StatusEvent>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let record: RecordIn = serde_json::from_str(line)?;
    let timestamp = parse_timestamp(&record.ts)
        .ok_or_else(|| TrackerError::Malformed(format!("bad timestamp '{}'", record.ts)))?;
    let elevator = ElevatorId::parse(&record.elevator)?;

    Ok(Some(StatusEvent {
        timestamp,
        elevator,
        status: record.status,
        reporter: Reporter {
            id: record.user_id,
            username: record.username,
            display_name: record.first_name,
        },
    }))
}

/// Parse the `ts` field; fractional seconds are accepted and dropped
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TS_FORMAT)
        .ok()
        .or_else(|| raw.parse::<NaiveDateTime>().ok())
        .map(truncate_to_second)
}
