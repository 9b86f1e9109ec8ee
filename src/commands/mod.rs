//! Command-line interface for tasked.
//!
//! Each subcommand lives in its own module with an `Args` struct and a `cmd`
//! function. The database is loaded once here and handed to the command as
//! an explicit value.

pub mod add;
pub mod config;
pub mod delete;
pub mod init;
pub mod list;
pub mod mark;
pub mod update;

use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message, task::TaskStatus},
    msg_debug,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create an empty database file (or reset it to empty)")]
    Init(init::InitArgs),
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "Delete a task by id, or all tasks with 'all'")]
    Delete(delete::DeleteArgs),
    #[command(about = "Update the description or status of a task", arg_required_else_help = true)]
    Update(update::UpdateArgs),
    #[command(about = "List tasks")]
    List(list::ListArgs),
    #[command(about = "Mark a task (or all tasks) in progress")]
    MarkInProgress(mark::MarkArgs),
    #[command(about = "Mark a task (or all tasks) complete")]
    MarkComplete(mark::MarkArgs),
    #[command(about = "Show or change the stored settings")]
    Config(config::ConfigArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Path to the JSON database file
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    /// Resolves the database, runs exactly one command, and returns its result.
    pub fn run(self) -> Result<()> {
        // Settings stay editable even when the config file does not parse
        let Cli { db, command } = self;
        let command = match command {
            Commands::Config(args) => return config::cmd(args),
            command => command,
        };

        let config = Config::read()?;
        let db_path = config.resolve_db_path(db);
        msg_debug!(Message::UsingDatabase(db_path.display().to_string()));

        match command {
            Commands::Config(args) => config::cmd(args),
            Commands::Init(args) => init::cmd(args, &db_path),
            Commands::Add(args) => add::cmd(args, &mut Tasks::open(&db_path)?),
            Commands::Delete(args) => delete::cmd(args, &mut Tasks::open(&db_path)?),
            Commands::Update(args) => update::cmd(args, &mut Tasks::open(&db_path)?),
            Commands::List(args) => list::cmd(args, &Tasks::open(&db_path)?, &config),
            Commands::MarkInProgress(args) => mark::cmd(args, &mut Tasks::open(&db_path)?, TaskStatus::InProgress),
            Commands::MarkComplete(args) => mark::cmd(args, &mut Tasks::open(&db_path)?, TaskStatus::Done),
        }
    }
}

/// Asks a yes/no question; the default answer is no.
fn confirm(prompt: Message) -> Result<bool> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?;
    Ok(confirmed)
}
