use anyhow::Result;
use colored::Colorize;

use datatable_ajax::cli::Command;
use datatable_ajax::{handle_check, handle_completions, handle_payload, handle_request, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Check { file } => handle_check(file),
        Command::Payload { file } => handle_payload(file),
        Command::Request { file } => handle_request(file),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
