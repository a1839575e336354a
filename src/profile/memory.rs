//! Session Timeline
//!
//! Append-only record of what happened in each session (session start,
//! profile loads, exports, clears). Backed by SQLite, on disk or in memory.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Result as SqlResult, Row};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

// ============================================================
// TIMELINE EVENT TYPES
// ============================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventType {
    SessionStarted,
    ProfileLoaded,
    ProfileExported,
    ProfileCleared,
}

impl TimelineEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineEventType::SessionStarted => "session_started",
            TimelineEventType::ProfileLoaded => "profile_loaded",
            TimelineEventType::ProfileExported => "profile_exported",
            TimelineEventType::ProfileCleared => "profile_cleared",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "session_started" => Some(TimelineEventType::SessionStarted),
            "profile_loaded" => Some(TimelineEventType::ProfileLoaded),
            "profile_exported" => Some(TimelineEventType::ProfileExported),
            "profile_cleared" => Some(TimelineEventType::ProfileCleared),
            _ => None,
        }
    }
}

// ============================================================
// TIMELINE EVENT
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    pub session_id: String,
    pub timestamp: DateTime<Utc>,
    pub event_type: TimelineEventType,
    pub description: String,
}

impl TimelineEvent {
    pub fn new(session_id: &str, event_type: TimelineEventType, description: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            session_id: session_id.to_string(),
            timestamp: Utc::now(),
            event_type,
            description: description.to_string(),
        }
    }
}

// ============================================================
// TIMELINE STORE (SQLite-backed)
// ============================================================

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS timeline_events (
        id TEXT PRIMARY KEY,
        session_id TEXT NOT NULL,
        timestamp TEXT NOT NULL,
        event_type TEXT NOT NULL,
        description TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_timeline_session_id ON timeline_events(session_id);";

pub struct TimelineStore {
    conn: Arc<Mutex<Connection>>,
}

impl TimelineStore {
    /// Open (or create) a timeline database file
    pub fn open(path: &Path) -> SqlResult<Self> {
        Self::init(Connection::open(path)?)
    }

    /// In-memory store, dropped with the process
    pub fn in_memory() -> SqlResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> SqlResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        // a panic while holding the lock leaves the connection usable
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn record_event(&self, event: &TimelineEvent) -> SqlResult<()> {
        let conn = self.lock();
        conn.execute(
            "INSERT INTO timeline_events (id, session_id, timestamp, event_type, description)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                event.id,
                event.session_id,
                event.timestamp.to_rfc3339(),
                event.event_type.as_str(),
                event.description,
            ],
        )?;
        Ok(())
    }

    /// All events for a session, oldest first
    pub fn session_timeline(&self, session_id: &str) -> SqlResult<Vec<TimelineEvent>> {
        let conn = self.lock();
        let mut stmt = conn.prepare(
            "SELECT id, session_id, timestamp, event_type, description
             FROM timeline_events
             WHERE session_id = ?1
             ORDER BY timestamp ASC, rowid ASC",
        )?;

        let events = stmt.query_map([session_id], event_from_row)?;
        events.collect()
    }
}

fn event_from_row(row: &Row<'_>) -> SqlResult<TimelineEvent> {
    let timestamp_str: String = row.get(2)?;
    let event_type_str: String = row.get(3)?;

    let timestamp = DateTime::parse_from_rfc3339(&timestamp_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
        })?;
    let event_type = TimelineEventType::parse(&event_type_str).ok_or_else(|| {
        rusqlite::Error::InvalidColumnType(3, event_type_str.clone(), rusqlite::types::Type::Text)
    })?;

    Ok(TimelineEvent {
        id: row.get(0)?,
        session_id: row.get(1)?,
        timestamp,
        event_type,
        description: row.get(4)?,
    })
}

// ============================================================
// HELPER FUNCTIONS
// ============================================================

pub fn record_session_started(store: &TimelineStore, session_id: &str) -> SqlResult<()> {
    let event = TimelineEvent::new(session_id, TimelineEventType::SessionStarted, "Session started");
    store.record_event(&event)
}

pub fn record_profile_loaded(store: &TimelineStore, session_id: &str, profile_name: &str) -> SqlResult<()> {
    let event = TimelineEvent::new(
        session_id,
        TimelineEventType::ProfileLoaded,
        &format!("Loaded example profile: {}", profile_name),
    );
    store.record_event(&event)
}

pub fn record_profile_exported(store: &TimelineStore, session_id: &str, file_name: &str) -> SqlResult<()> {
    let event = TimelineEvent::new(
        session_id,
        TimelineEventType::ProfileExported,
        &format!("Exported profile as {}", file_name),
    );
    store.record_event(&event)
}

pub fn record_profile_cleared(store: &TimelineStore, session_id: &str) -> SqlResult<()> {
    let event = TimelineEvent::new(session_id, TimelineEventType::ProfileCleared, "Cleared existing profile");
    store.record_event(&event)
}
