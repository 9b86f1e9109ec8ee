//! Database layer for the tasked application.
//!
//! The database is a single JSON file holding every task. It is loaded wholly
//! into memory once per invocation and rewritten in full after each mutation.
//!
//! ## Modules
//!
//! - **`storage`**: reading and writing the JSON file
//! - **`tasks`**: the in-memory collection and its operations
//! - **`error`**: the error taxonomy shared by both
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasked::db::tasks::{Tasks, Updated};
//! use tasked::libs::task::{TaskStatus, TaskTarget};
//!
//! let mut tasks = Tasks::open("/tmp/todo.json")?;
//! let task = tasks.add("Review code")?;
//! tasks.set_status(TaskTarget::Id(task.id), TaskStatus::InProgress)?;
//!
//! if let Updated::NoChanges = tasks.update(task.id, Some("Review code"), None)? {
//!     println!("nothing to do");
//! }
//! # Ok::<(), tasked::db::error::DbError>(())
//! ```
//!
//! ## Concurrency
//!
//! There is no locking. Two invocations writing the same file race and the
//! last save wins.

pub mod error;
pub mod storage;
pub mod tasks;
