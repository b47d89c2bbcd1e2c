// File: crates/tardy-chart/src/task.rs
// Summary: Task wire model (`GET /api/v1/tasks` JSON) and the charted point it reduces to.

use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;

use crate::error::ChartError;

/// One charted record: task id on X, days late on Y.
/// `days` may be negative (completed early) or positive (completed late).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskAgePoint {
    pub id: u64,
    pub days: i64,
}

impl TaskAgePoint {
    pub const fn new(id: u64, days: i64) -> Self {
        Self { id, days }
    }
}

/// Task as served by the API: identity, title, schedule timestamps, and the
/// precomputed lateness in whole days.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Task {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub due_date: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    #[serde(default)]
    pub days: i64,
}

impl Task {
    /// Lateness recomputed from the timestamps: completed minus due, in
    /// whole 24h periods, truncated toward zero.
    pub fn days_late(&self) -> i64 {
        (self.completed_at - self.due_date).num_hours() / 24
    }

    /// Tasks without a due date are not charted. The upstream encoder emits
    /// the zero timestamp (year 1) for unset dates.
    pub fn has_due_date(&self) -> bool {
        self.due_date.year() > 1
    }

    pub fn point(&self) -> TaskAgePoint {
        TaskAgePoint { id: self.id, days: self.days }
    }
}

/// Decode the `GET /api/v1/tasks` response body.
pub fn parse_tasks(body: &[u8]) -> Result<Vec<Task>, ChartError> {
    Ok(serde_json::from_slice(body)?)
}

/// Reduce tasks to chartable points, dropping tasks with no due date.
pub fn points(tasks: &[Task]) -> Vec<TaskAgePoint> {
    tasks.iter().filter(|t| t.has_due_date()).map(Task::point).collect()
}
