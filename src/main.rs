use anyhow::Result;

use dota_players::cli::Command;
use dota_players::services::browser::BrowseOptions;
use dota_players::{handle_browse, handle_completions, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(port),
        Command::Browse {
            url,
            search,
            team,
            interactive,
        } => handle_browse(BrowseOptions {
            base_url: url,
            search,
            team,
            interactive,
        }),
        Command::Completions { shell } => handle_completions(shell),
    }
}
