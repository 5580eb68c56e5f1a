//! Append-only per-elevator status logs

use crate::elevator::ElevatorId;
use crate::errors::Result;
use crate::record::{encode_line, parse_line};
use crate::status::{Reporter, Status, StatusEvent};

use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::io::{ErrorKind, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// File-backed event store, one `<elevator>.log` per elevator.
///
/// Appends for the same elevator are serialised through a per-elevator
/// lock and written as a single buffer, so a record is either fully
/// present or absent. Reads take no lock.
#[derive(Debug, Clone)]
pub struct EventLogStore {
    log_dir: PathBuf,
    write_locks: Arc<HashMap<ElevatorId, Mutex<()>>>,
}

impl EventLogStore {
    /// Create a store rooted at `log_dir`. The directory is created lazily.
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        let write_locks: HashMap<ElevatorId, Mutex<()>> = ElevatorId::all()
            .map(|id| (id, Mutex::new(())))
            .collect();

        Self {
            log_dir: log_dir.into(),
            write_locks: Arc::new(write_locks),
        }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn log_path(&self, elevator: ElevatorId) -> PathBuf {
        self.log_dir.join(format!("{}.log", elevator))
    }

    /// Durably append one event. On error nothing may be assumed recorded.
    #[instrument(skip(self, reporter), fields(user_id = reporter.id))]
    pub async fn append(
        &self,
        elevator: ElevatorId,
        status: Status,
        reporter: Reporter,
        timestamp: NaiveDateTime,
    ) -> Result<StatusEvent> {
        let event = StatusEvent {
            timestamp,
            elevator,
            status,
            reporter,
        };
        let line = encode_line(&event)?;

        let _guard = match self.write_locks.get(&elevator) {
            Some(lock) => Some(lock.lock().await),
            None => None,
        };

        tokio::fs::create_dir_all(&self.log_dir).await?;

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(self.log_path(elevator))
            .await?;

        // A torn last line must not swallow the new record.
        let mut buf = Vec::with_capacity(line.len() + 1);
        if ends_mid_line(&mut file).await? {
            warn!("Log for elevator {} ends mid-line, terminating it", elevator);
            buf.push(b'\n');
        }
        buf.extend_from_slice(line.as_bytes());

        file.write_all(&buf).await?;
        file.flush().await?;
        file.sync_data().await?;

        info!(
            "Recorded status {} for elevator {} by user {}",
            status, elevator, event.reporter.id
        );

        Ok(event)
    }

    /// All valid events in file order. A missing log is an empty log.
    pub async fn read_all(&self, elevator: ElevatorId) -> Result<Vec<StatusEvent>> {
        let lines = self.read_lines(elevator).await?;

        Ok(lines
            .iter()
            .filter_map(|line| parse_valid(elevator, line))
            .collect())
    }

    /// Up to `n` most recent valid events, oldest first
    pub async fn read_last_n(&self, elevator: ElevatorId, n: usize) -> Result<Vec<StatusEvent>> {
        if n == 0 {
            return Ok(Vec::new());
        }

        let lines = self.read_lines(elevator).await?;

        let mut events: Vec<StatusEvent> = lines
            .iter()
            .rev()
            .filter_map(|line| parse_valid(elevator, line))
            .take(n)
            .collect();
        events.reverse();

        Ok(events)
    }

    async fn read_lines(&self, elevator: ElevatorId) -> Result<Vec<String>> {
        let content = match tokio::fs::read(self.log_path(elevator)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        // Lossy decoding keeps one damaged line from hiding the rest of the file.
        Ok(String::from_utf8_lossy(&content)
            .lines()
            .map(str::to_string)
            .collect())
    }
}

async fn ends_mid_line(file: &mut File) -> Result<bool> {
    let len = file.metadata().await?.len();
    if len == 0 {
        return Ok(false);
    }

    file.seek(SeekFrom::Start(len - 1)).await?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last).await?;
    Ok(last[0] != b'\n')
}

/// Valid records belonging to `elevator`; anything else is skipped
fn parse_valid(elevator: ElevatorId, line: &str) -> Option<StatusEvent> {
    match parse_line(line) {
        Ok(Some(event)) if event.elevator != elevator => {
            debug!(
                "Skipping record for elevator {} found in {} log",
                event.elevator, elevator
            );
            None
        }
        Ok(event) => event,
        Err(e) => {
            debug!("Skipping malformed line in {} log: {}", elevator, e);
            None
        }
    }
}
