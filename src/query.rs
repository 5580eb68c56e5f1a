//! Current-status queries derived from the event logs

use crate::elevator::ElevatorId;
use crate::errors::Result;
use crate::event_log::EventLogStore;
use crate::status::Status;

#[derive(Debug, Clone)]
pub struct StatusQuery {
    store: EventLogStore,
}

impl StatusQuery {
    pub fn new(store: EventLogStore) -> Self {
        Self { store }
    }

    /// Status of the most recent valid record, if any
    pub async fn last_status(&self, elevator: ElevatorId) -> Result<Option<Status>> {
        let last = self.store.read_last_n(elevator, 1).await?;
        Ok(last.into_iter().next().map(|e| e.status))
    }

    /// Up to `n` most recent statuses in chronological order
    pub async fn last_n_statuses(&self, elevator: ElevatorId, n: usize) -> Result<Vec<Status>> {
        let events = self.store.read_last_n(elevator, n).await?;
        Ok(events.into_iter().map(|e| e.status).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Reporter;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use std::io::Write;
    use tempfile::TempDir;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 9)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    async fn seeded(statuses: &[Status]) -> (TempDir, StatusQuery, ElevatorId) {
        let dir = TempDir::new().unwrap();
        let store = EventLogStore::new(dir.path());
        let id = ElevatorId::parse("8242").unwrap();

        for (i, status) in statuses.iter().enumerate() {
            store
                .append(id, *status, Reporter::new(1, None, None), base() + Duration::minutes(i as i64))
                .await
                .unwrap();
        }

        (dir, StatusQuery::new(store), id)
    }

    #[tokio::test]
    async fn test_last_status_absent_log() {
        let (_dir, query, id) = seeded(&[]).await;
        assert_eq!(query.last_status(id).await.unwrap(), None);
        assert!(query.last_n_statuses(id, 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_last_status_is_latest_append() {
        let (_dir, query, id) = seeded(&[Status::Ok, Status::Bad, Status::Warn]).await;
        assert_eq!(query.last_status(id).await.unwrap(), Some(Status::Warn));
    }

    #[tokio::test]
    async fn test_last_status_skips_trailing_garbage() {
        let (dir, query, id) = seeded(&[Status::Bad]).await;
        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .open(dir.path().join("8242.log"))
            .unwrap();
        writeln!(file, "not json at all").unwrap();
        writeln!(file).unwrap();

        assert_eq!(query.last_status(id).await.unwrap(), Some(Status::Bad));
    }

    #[tokio::test]
    async fn test_entirely_malformed_log_has_no_status() {
        let (dir, query, id) = seeded(&[]).await;
        std::fs::write(dir.path().join("8242.log"), "{\n}\n[1,2]\n").unwrap();

        assert_eq!(query.last_status(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_last_n_statuses_skips_interleaved_garbage() {
        let (dir, query, id) = seeded(&[Status::Ok, Status::Warn]).await;
        {
            let mut file = std::fs::OpenOptions::new()
                .append(true)
                .open(dir.path().join("8242.log"))
                .unwrap();
            writeln!(file, "{{\"status\": ").unwrap();
        }
        query
            .store
            .append(id, Status::Bad, Reporter::new(2, None, None), base() + Duration::hours(1))
            .await
            .unwrap();

        assert_eq!(
            query.last_n_statuses(id, 2).await.unwrap(),
            vec![Status::Warn, Status::Bad]
        );
        assert_eq!(
            query.last_n_statuses(id, 5).await.unwrap(),
            vec![Status::Ok, Status::Warn, Status::Bad]
        );
    }
}
