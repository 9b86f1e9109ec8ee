use crate::{
    db::tasks::Tasks,
    libs::messages::Message,
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Text of the new task
    #[arg(required = true)]
    description: String,
}

pub fn cmd(add_args: AddArgs, tasks: &mut Tasks) -> Result<()> {
    let task = tasks.add(&add_args.description)?;

    msg_success!(Message::TaskCreated {
        id: task.id,
        desc: task.desc
    });
    Ok(())
}
