use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect DataTables ajax source definitions")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Validate a source document
    Check {
        /// JSON file with `name` and `options`
        file: PathBuf,
    },
    /// Print the request payload sent to the endpoint
    Payload {
        /// JSON file with `name` and `options`
        file: PathBuf,
    },
    /// Print the ajax option object for the DataTables client
    Request {
        /// JSON file with `name` and `options`
        file: PathBuf,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
