//! Per-field string forms of tasks for display.
//!
//! The database layer exposes only data; this module turns a [`Task`] into
//! the strings shown in the task table. Timestamps use a configurable
//! strftime pattern, defaulting to [`DEFAULT_DATE_FORMAT`].
//!
//! ## Examples
//!
//! ```rust
//! use tasked::libs::formatter::{FormattedTask, DEFAULT_DATE_FORMAT};
//! use tasked::libs::task::Task;
//!
//! let task = Task::new(1, "Review code");
//! let row = FormattedTask::new(&task, DEFAULT_DATE_FORMAT);
//! assert_eq!(row.id, "1");
//! assert_eq!(row.status, "Todo");
//! ```

use super::task::Task;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

/// Day-month-year with a 12-hour clock, e.g. "05-03-2025 02:30 PM".
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y %I:%M %p";

/// String representation of every displayed task field.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedTask {
    pub id: String,
    pub desc: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl FormattedTask {
    pub fn new(task: &Task, date_format: &str) -> Self {
        FormattedTask {
            id: task.id.to_string(),
            desc: task.desc.clone(),
            status: task.status.label().to_string(),
            created_at: format_timestamp(&task.created_at, date_format),
            updated_at: format_timestamp(&task.updated_at, date_format),
        }
    }
}

/// Formats `timestamp` with a strftime pattern.
///
/// An invalid pattern falls back to [`DEFAULT_DATE_FORMAT`] instead of
/// panicking inside `Display`.
pub fn format_timestamp(timestamp: &DateTime<Local>, pattern: &str) -> String {
    let pattern = if is_valid_pattern(pattern) { pattern } else { DEFAULT_DATE_FORMAT };
    timestamp.format(pattern).to_string()
}

/// Checks that chrono understands every specifier in `pattern`.
pub fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
