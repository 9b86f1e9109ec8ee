//! Configuration command.
//!
//! Writes `db_path` and `date_format` to the config file, or prints the
//! current settings when called without options. The task database is not
//! opened.

use crate::{
    libs::{config::Config, formatter::is_valid_pattern, messages::Message},
    msg_success,
};
use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Database file used when neither --db nor TASKED_DB is given
    #[arg(long, value_name = "PATH")]
    db_path: Option<PathBuf>,

    /// strftime pattern for the date columns of `list`
    #[arg(long, value_name = "FORMAT")]
    date_format: Option<String>,

    /// Drop every stored setting before applying the options above
    #[arg(long)]
    reset: bool,
}

pub fn cmd(config_args: ConfigArgs) -> Result<()> {
    if !config_args.reset && config_args.db_path.is_none() && config_args.date_format.is_none() {
        println!("{}", serde_json::to_string_pretty(&Config::read()?)?);
        return Ok(());
    }

    if let Some(pattern) = config_args.date_format.as_deref().filter(|pattern| !is_valid_pattern(pattern)) {
        bail!(Message::InvalidDateFormatArg(pattern.to_string()));
    }

    let mut config = if config_args.reset { Config::default() } else { Config::read()? };
    if let Some(db_path) = config_args.db_path {
        config.db_path = Some(db_path);
    }
    if let Some(date_format) = config_args.date_format {
        config.date_format = Some(date_format);
    }

    let path = config.save()?;
    msg_success!(Message::ConfigSaved(path.display().to_string()));
    Ok(())
}
