use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        formatter::{is_valid_pattern, DEFAULT_DATE_FORMAT},
        messages::Message,
        task::TaskStatus,
        view::View,
    },
    msg_info, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only tasks with this status
    #[arg(short, long, value_enum)]
    status: Option<TaskStatus>,
}

pub fn cmd(list_args: ListArgs, tasks: &Tasks, config: &Config) -> Result<()> {
    let selected = tasks.list(list_args.status);

    if selected.is_empty() {
        match list_args.status {
            Some(status) if !tasks.is_empty() => msg_info!(Message::NoTasksWithStatus(status)),
            _ => msg_info!(Message::NoTasks),
        }
        return Ok(());
    }

    let date_format = if is_valid_pattern(config.date_format()) {
        config.date_format()
    } else {
        msg_warning!(Message::InvalidDateFormat(config.date_format().to_string()));
        DEFAULT_DATE_FORMAT
    };

    View::tasks(&selected, date_format)
}
