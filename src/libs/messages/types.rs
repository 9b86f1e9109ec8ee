use crate::libs::task::TaskStatus;

/// Every piece of text tasked shows to the user.
///
/// Text lives in the `Display` impl in `display.rs`; call sites only pick a
/// variant and its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === DATABASE MESSAGES ===
    DatabaseInitialized(String), // path
    ConfirmResetDatabase(String), // path
    UsingDatabase(String),       // path

    // === TASK MESSAGES ===
    TaskCreated { id: u32, desc: String },
    TaskDeleted { id: u32, desc: String },
    TasksDeletedCount(usize),
    ConfirmDeleteAllTasks(usize),
    TaskUpdated(u32),
    NoChangesProvided,
    NoTasks,
    NoTasksWithStatus(TaskStatus),
    TaskMarked { id: u32, desc: String, status: TaskStatus },
    TasksMarkedAll { count: usize, status: TaskStatus },

    // === CONFIGURATION MESSAGES ===
    InvalidDateFormat(String), // pattern
    InvalidDateFormatArg(String), // pattern
    ConfigSaved(String),          // path

    // === GENERAL MESSAGES ===
    OperationCancelled,
    CommandFailed(String), // error
}
