use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// One scheduled instance of a recurring mega-event series. The status
/// mirrors the proposal/expense workflow and is written only by the
/// approval engine; occurrences are never deleted, only superseded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Occurrence {
    pub id: u64,
    pub series_id: u64,
    pub title: String,
    pub scheduled_start_date: String,
    pub scheduled_end_date: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccurrenceInput {
    pub title: String,
    pub scheduled_start_date: String,
    pub scheduled_end_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub occurrences: Vec<Occurrence>,
}
