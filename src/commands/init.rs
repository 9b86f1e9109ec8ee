//! Database initialization command.
//!
//! Creates the database file, or resets an existing one to an empty task
//! list. Resetting a file that still holds tasks, or that cannot be read,
//! asks for confirmation unless `--force` is given.

use super::confirm;
use crate::{
    db::tasks::Tasks,
    libs::messages::Message,
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing database without asking
    #[arg(short, long)]
    force: bool,
}

pub fn cmd(init_args: InitArgs, db_path: &Path) -> Result<()> {
    if !init_args.force && needs_confirmation(db_path) && !confirm(Message::ConfirmResetDatabase(db_path.display().to_string()))? {
        msg_warning!(Message::OperationCancelled);
        return Ok(());
    }

    let tasks = Tasks::init(db_path)?;

    msg_success!(Message::DatabaseInitialized(tasks.path().display().to_string()));
    Ok(())
}

/// True when resetting would drop tasks or replace a file we cannot read.
fn needs_confirmation(db_path: &Path) -> bool {
    db_path.exists() && Tasks::open(db_path).map_or(true, |tasks| !tasks.is_empty())
}
