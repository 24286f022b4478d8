//! SQLite-backed store of cleaning session summaries.

use crate::error::{Result, ServiceError};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// One stored run: what was asked, what came out, how long it took.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Record id
    pub id: Uuid,
    /// When the run was stored (UTC)
    pub timestamp: DateTime<Utc>,
    /// Number of move commands in the request
    pub commands: i64,
    /// Distinct cells visited
    pub result: i64,
    /// Wall-clock computation time in seconds
    pub duration: f64,
}

/// Session store over a SQLite file.
///
/// Connections are opened per operation; SQLite serializes writers
/// internally, so concurrent request handlers need no coordination here.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Open the store, creating the database file and schema if needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let store = Self { path };
        store.connect()?.execute(
            "CREATE TABLE IF NOT EXISTS sessions (
                id        TEXT PRIMARY KEY,
                timestamp TEXT NOT NULL,
                commands  INTEGER NOT NULL,
                result    INTEGER NOT NULL,
                duration  REAL NOT NULL
            )",
            [],
        )?;
        Ok(store)
    }

    /// Store a finished run and return the stored record.
    pub fn insert(&self, commands: i64, result: i64, duration: f64) -> Result<SessionSummary> {
        let summary = SessionSummary {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            commands,
            result,
            duration,
        };
        self.connect()?.execute(
            "INSERT INTO sessions (id, timestamp, commands, result, duration)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                summary.id.to_string(),
                summary.timestamp.to_rfc3339(),
                summary.commands,
                summary.result,
                summary.duration,
            ],
        )?;
        Ok(summary)
    }

    /// All stored summaries, oldest first.
    pub fn list(&self) -> Result<Vec<SessionSummary>> {
        let connection = self.connect()?;
        let mut statement = connection.prepare(
            "SELECT id, timestamp, commands, result, duration
             FROM sessions ORDER BY timestamp",
        )?;
        let rows = statement.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, i64>(3)?,
                row.get::<_, f64>(4)?,
            ))
        })?;

        let mut summaries = Vec::new();
        for row in rows {
            let (id, timestamp, commands, result, duration) = row?;
            summaries.push(SessionSummary {
                id: Uuid::parse_str(&id)
                    .map_err(|e| ServiceError::Data(format!("session id {:?}: {}", id, e)))?,
                timestamp: DateTime::parse_from_rfc3339(&timestamp)
                    .map_err(|e| ServiceError::Data(format!("timestamp {:?}: {}", timestamp, e)))?
                    .with_timezone(&Utc),
                commands,
                result,
                duration,
            });
        }
        Ok(summaries)
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Database file location.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (SessionStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("sessions.db")).unwrap();
        (store, dir)
    }

    #[test]
    fn test_insert_and_list_round_trip() {
        let (store, _dir) = temp_store();

        let stored = store.insert(12, 44, 0.001).unwrap();
        assert_eq!(stored.commands, 12);
        assert_eq!(stored.result, 44);

        let listed = store.list().unwrap();
        assert_eq!(listed, vec![stored]);
    }

    #[test]
    fn test_list_empty_store() {
        let (store, _dir) = temp_store();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_records_get_distinct_ids() {
        let (store, _dir) = temp_store();
        let first = store.insert(1, 2, 0.0).unwrap();
        let second = store.insert(1, 2, 0.0).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn test_reopen_keeps_existing_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions.db");

        let store = SessionStore::open(&path).unwrap();
        store.insert(3, 7, 0.5).unwrap();
        drop(store);

        let reopened = SessionStore::open(&path).unwrap();
        assert_eq!(reopened.list().unwrap().len(), 1);
    }
}
