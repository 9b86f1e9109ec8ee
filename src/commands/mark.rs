//! `mark-in-progress` and `mark-complete`.
//!
//! Both commands share one argument shape and differ only in the status they
//! set; `all` changes every task and writes the file once.

use crate::{
    db::tasks::{Marked, Tasks},
    libs::{
        messages::Message,
        task::{TaskStatus, TaskTarget},
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MarkArgs {
    /// Task id, or `all` to mark every task
    target: TaskTarget,
}

pub fn cmd(mark_args: MarkArgs, tasks: &mut Tasks, status: TaskStatus) -> Result<()> {
    match tasks.set_status(mark_args.target, status)? {
        Marked::All { count, status } => msg_success!(Message::TasksMarkedAll { count, status }),
        Marked::One(task) => msg_success!(Message::TaskMarked {
            id: task.id,
            desc: task.desc,
            status: task.status
        }),
    }

    Ok(())
}
