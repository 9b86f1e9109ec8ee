//! Core library modules for the tasked application.
//!
//! - **Record Model**: `task`
//! - **Configuration**: `config`, `data_storage`
//! - **Presentation**: `formatter`, `view`, `messages`

pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod task;
pub mod view;
