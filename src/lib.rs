//! # Tasked - a command-line task tracker
//!
//! Keeps short text tasks, each with a lifecycle status, in a single JSON
//! file that persists across invocations.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, delete and list tasks
//! - **Status Tracking**: Todo, In Progress and Done, settable per task or in bulk
//! - **Plain Storage**: A pretty-printed JSON array you can read and edit by hand
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasked::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
