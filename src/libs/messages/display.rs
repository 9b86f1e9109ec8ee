//! Display implementation for tasked messages.
//!
//! All user-facing text is defined here, in one match, so wording stays
//! consistent across commands.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === DATABASE MESSAGES ===
            Message::DatabaseInitialized(path) => format!("Initialized empty database: {}", path),
            Message::ConfirmResetDatabase(path) => format!("Replace {} with an empty database?", path),
            Message::UsingDatabase(path) => format!("Using database: {}", path),

            // === TASK MESSAGES ===
            Message::TaskCreated { id, desc } => format!("Created task #{}: {}", id, desc),
            Message::TaskDeleted { id, desc } => format!("Removed task #{}: {}", id, desc),
            Message::TasksDeletedCount(count) => format!("Removed {} task(s).", count),
            Message::ConfirmDeleteAllTasks(count) => format!("Are you sure you want to delete ALL {} tasks?", count),
            Message::TaskUpdated(id) => format!("Updated task #{}", id),
            Message::NoChangesProvided => "No changes provided.".to_string(),
            Message::NoTasks => "No tasks.".to_string(),
            Message::NoTasksWithStatus(status) => format!("No tasks with status: {}", status),
            Message::TaskMarked { id, desc, status } => format!("{}: {} marked {}", id, desc, status),
            Message::TasksMarkedAll { count, status } => format!("Marked all {} task(s) as {}.", count, status),

            // === CONFIGURATION MESSAGES ===
            Message::InvalidDateFormat(pattern) => {
                format!("Invalid date format '{}' in config, using the default", pattern)
            }
            Message::InvalidDateFormatArg(pattern) => format!("Invalid date format: '{}'", pattern),
            Message::ConfigSaved(path) => format!("Configuration saved: {}", path),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::CommandFailed(error) => error.to_string(),
        };

        write!(f, "{}", text)
    }
}
