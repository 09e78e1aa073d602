pub mod ajax;
pub mod cli;
pub mod config;
pub mod document;
pub mod errors;
pub mod request;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use colored::Colorize;
use std::io;
use std::path::Path;

use crate::cli::Command;
use crate::document::load_source;
use crate::request::AjaxRequest;

pub use ajax::{AjaxSourceConfig, HttpMethod, RequestPayload};
pub use errors::ValidationError;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_check(file: &Path) -> Result<()> {
    let source = load_source(file)?;
    println!("{} {}", "ok".green().bold(), source.name());
    Ok(())
}

pub fn handle_payload(file: &Path) -> Result<()> {
    let source = load_source(file)?;
    let payload = serde_json::Value::Object(source.request_payload());
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

pub fn handle_request(file: &Path) -> Result<()> {
    let source = load_source(file)?;
    let request = AjaxRequest::from_source(&source);
    println!("{}", serde_json::to_string_pretty(&request.to_datatables_options())?);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
