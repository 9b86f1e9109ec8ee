use crate::{
    db::tasks::{Tasks, Updated},
    libs::{
        messages::Message,
        task::{parse_id, TaskStatus},
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Id of the task to change
    #[arg(value_parser = parse_id)]
    id: u32,

    /// New description for the task
    #[arg(short, long)]
    description: Option<String>,

    /// New status for the task
    #[arg(short, long, value_enum)]
    status: Option<TaskStatus>,
}

pub fn cmd(update_args: UpdateArgs, tasks: &mut Tasks) -> Result<()> {
    match tasks.update(update_args.id, update_args.description.as_deref(), update_args.status)? {
        Updated::Changed(task) => msg_success!(Message::TaskUpdated(task.id)),
        Updated::NoChanges => msg_info!(Message::NoChangesProvided),
    }

    Ok(())
}
