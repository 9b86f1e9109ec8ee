//! Task record model.
//!
//! Defines the [`Task`] entity, its [`TaskStatus`] lifecycle and the portable
//! form used for the on-disk JSON representation. This module performs no I/O.
//!
//! ## Portable Form
//!
//! Each task is stored as a flat JSON object:
//!
//! ```text
//! {
//!   "id": 1,
//!   "desc": "write spec",
//!   "status": "In Progress",
//!   "createdAt": "2025-01-15T09:30:00.000000+02:00",
//!   "updatedAt": "2025-01-15T11:02:41.512008+02:00"
//! }
//! ```
//!
//! [`Task::from_portable`] is the single validation point for records read
//! from disk: unknown status labels, non-positive or non-integer ids and
//! unparsable timestamps are rejected with [`MalformedRecord`].
//!
//! ## Usage
//!
//! ```rust
//! use tasked::libs::task::{Task, TaskStatus};
//!
//! let task = Task::new(1, "Review code");
//! assert_eq!(task.status, TaskStatus::Todo);
//!
//! let done = task.with_status(TaskStatus::Done);
//! assert!(done.updated_at > done.created_at);
//!
//! // Nothing differs, nothing to write
//! assert!(done.revised(Some("Review code"), Some(TaskStatus::Done)).is_none());
//! ```

use crate::db::error::DbError;
use chrono::{DateTime, Duration, Local, NaiveDateTime, SecondsFormat, SubsecRound, TimeZone};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Keyword selecting every task in bulk operations.
pub const TARGET_ALL: &str = "all";

/// Offset-less ISO-8601 layout written by earlier versions of the tool.
const NAIVE_ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Lifecycle status of a task.
///
/// Transitions are not ordered: any status may be set to any other.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// The literal label stored in the database file.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "Todo",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Parses a stored label. Any string other than the three labels is rejected.
    pub fn from_label(label: &str) -> Result<Self, MalformedRecord> {
        match label {
            "Todo" => Ok(TaskStatus::Todo),
            "In Progress" => Ok(TaskStatus::InProgress),
            "Done" => Ok(TaskStatus::Done),
            other => Err(MalformedRecord::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Reasons a portable record cannot be turned into a [`Task`].
#[derive(Debug, Error)]
pub enum MalformedRecord {
    #[error("record has an unexpected shape: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("id must be a positive integer, got {0}")]
    InvalidId(i64),

    #[error("unknown status '{0}'")]
    UnknownStatus(String),

    #[error("field '{field}' is not an ISO-8601 timestamp: '{value}'")]
    InvalidTimestamp { field: &'static str, value: String },
}

/// One trackable unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u32,
    pub desc: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
}

/// JSON-serializable representation of a [`Task`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortableTask {
    pub id: i64,
    pub desc: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Task {
    /// Creates a new `Todo` task stamped with the current time.
    pub fn new(id: u32, desc: &str) -> Self {
        let now = now();
        Task {
            id,
            desc: desc.to_string(),
            status: TaskStatus::Todo,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the fields that differ from the current values.
    ///
    /// Returns `None` when nothing would change, so callers can skip the write.
    pub fn revised(&self, desc: Option<&str>, status: Option<TaskStatus>) -> Option<Self> {
        let desc = desc.filter(|desc| *desc != self.desc);
        let status = status.filter(|status| *status != self.status);
        if desc.is_none() && status.is_none() {
            return None;
        }

        Some(
            Task {
                desc: desc.map_or_else(|| self.desc.clone(), str::to_string),
                status: status.unwrap_or(self.status),
                ..self.clone()
            }
            .touched(),
        )
    }

    /// Returns a copy carrying `status` and a fresh `updated_at`.
    pub fn with_status(self, status: TaskStatus) -> Self {
        Task { status, ..self }.touched()
    }

    /// Bumps `updated_at`; the new value is always strictly later than the old one.
    fn touched(mut self) -> Self {
        let now = now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
        self
    }

    pub fn to_portable(&self) -> PortableTask {
        PortableTask {
            id: i64::from(self.id),
            desc: self.desc.clone(),
            status: self.status.label().to_string(),
            created_at: self.created_at.to_rfc3339_opts(SecondsFormat::Micros, false),
            updated_at: self.updated_at.to_rfc3339_opts(SecondsFormat::Micros, false),
        }
    }

    /// Builds a task from one element of the database array.
    pub fn from_portable(value: serde_json::Value) -> Result<Self, MalformedRecord> {
        let portable: PortableTask = serde_json::from_value(value)?;
        Self::try_from(portable)
    }
}

impl TryFrom<PortableTask> for Task {
    type Error = MalformedRecord;

    fn try_from(portable: PortableTask) -> Result<Self, Self::Error> {
        let id = u32::try_from(portable.id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or(MalformedRecord::InvalidId(portable.id))?;

        Ok(Task {
            id,
            desc: portable.desc,
            status: TaskStatus::from_label(&portable.status)?,
            created_at: parse_timestamp("createdAt", &portable.created_at)?,
            updated_at: parse_timestamp("updatedAt", &portable.updated_at)?,
        })
    }
}

/// Current local time at the precision kept in the database file.
fn now() -> DateTime<Local> {
    Local::now().trunc_subsecs(6)
}

/// Accepts RFC 3339 with any offset, or an offset-less ISO-8601 value read as local time.
fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Local>, MalformedRecord> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Local));
    }

    NaiveDateTime::parse_from_str(value, NAIVE_ISO_FORMAT)
        .ok()
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .ok_or_else(|| MalformedRecord::InvalidTimestamp {
            field,
            value: value.to_string(),
        })
}

/// Selects either a single task or every task in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskTarget {
    All,
    Id(u32),
}

impl FromStr for TaskTarget {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == TARGET_ALL {
            return Ok(TaskTarget::All);
        }
        parse_id(s).map(TaskTarget::Id)
    }
}

impl fmt::Display for TaskTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskTarget::All => write!(f, "{}", TARGET_ALL),
            TaskTarget::Id(id) => write!(f, "{}", id),
        }
    }
}

/// Parses a task id given on the command line.
pub fn parse_id(s: &str) -> Result<u32, DbError> {
    s.trim()
        .parse::<u32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| DbError::InvalidInput(format!("'{}' is not a valid task id", s)))
}
