use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::settings::{DEFAULT_BASE_URL, DEFAULT_PORT};
use crate::view::ALL_TEAMS;

#[derive(Parser, Debug)]
#[command(author, version, about = "Chinese Dota 2 player directory")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Serve the player directory over HTTP
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Load the directory from a running server and display it
    Browse {
        /// Base URL of the server
        #[arg(short, long, default_value = DEFAULT_BASE_URL)]
        url: String,
        /// Initial search text, matched against handle and real name
        #[arg(short, long, default_value = "")]
        search: String,
        /// Initial team selection, "all" for every team
        #[arg(short, long, default_value = ALL_TEAMS)]
        team: String,
        /// Keep reading search text and commands from stdin
        #[arg(short, long)]
        interactive: bool,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
