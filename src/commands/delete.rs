use super::confirm;
use crate::{
    db::tasks::{Deleted, Tasks},
    libs::{messages::Message, task::TaskTarget},
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id, or `all` to remove every task
    target: TaskTarget,

    /// Skip the confirmation asked before deleting all tasks
    #[arg(short, long)]
    force: bool,
}

pub fn cmd(delete_args: DeleteArgs, tasks: &mut Tasks) -> Result<()> {
    if delete_args.target == TaskTarget::All
        && !delete_args.force
        && !tasks.is_empty()
        && !confirm(Message::ConfirmDeleteAllTasks(tasks.len()))?
    {
        msg_warning!(Message::OperationCancelled);
        return Ok(());
    }

    match tasks.delete(delete_args.target)? {
        Deleted::All { count } => msg_success!(Message::TasksDeletedCount(count)),
        Deleted::One(task) => msg_success!(Message::TaskDeleted {
            id: task.id,
            desc: task.desc
        }),
    }

    Ok(())
}
