use dotenv::dotenv;
use std::process::ExitCode;
use tasked::commands::Cli;
use tasked::libs::messages::{macros::is_debug_mode, Message};
use tasked::msg_error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Load .env file if it exists
    let _ = dotenv();

    if is_debug_mode() {
        init_tracing();
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(Message::CommandFailed(format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
