use anyhow::Result;
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::settings::AppConfig;
use crate::view::render::{render_page, render_team_options};
use crate::view::{DirectoryClient, DirectoryView, LoadState, TeamFilter};

pub struct BrowseOptions {
    pub base_url: String,
    pub search: String,
    pub team: String,
    pub interactive: bool,
}

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    Search(String),
    Team(TeamFilter),
    ListTeams,
    Quit,
}

pub fn parse_command(line: &str) -> ViewCommand {
    match line.trim_end() {
        ":quit" | ":q" => ViewCommand::Quit,
        ":teams" => ViewCommand::ListTeams,
        ":team" => ViewCommand::Team(TeamFilter::All),
        other => match other.strip_prefix(":team ") {
            Some(team) => ViewCommand::Team(TeamFilter::from(team.trim())),
            None => ViewCommand::Search(line.to_string()),
        },
    }
}

/// Drives the directory view: a single fetch, then local re-renders.
pub struct BrowserService {
    client: DirectoryClient,
    view: DirectoryView,
    interactive: bool,
    date_format: &'static str,
}

impl BrowserService {
    pub fn new(options: BrowseOptions, config: &AppConfig) -> Result<Self> {
        let client = DirectoryClient::new(&options.base_url, config.view.user_agent)?;

        let mut view = DirectoryView::new();
        view.set_search(options.search);
        view.set_team(TeamFilter::from(options.team.as_str()));

        Ok(Self {
            client,
            view,
            interactive: options.interactive,
            date_format: config.view.date_format,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        self.print_page();

        info!("Fetching directory from {}", self.client.endpoint());
        let fetched = self.client.fetch().await;
        self.view.settle(fetched);
        self.print_page();

        if self.interactive && matches!(self.view.state(), LoadState::Ready(_)) {
            self.interact().await?;
        }
        Ok(())
    }

    async fn interact(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            match parse_command(&line) {
                ViewCommand::Quit => break,
                ViewCommand::ListTeams => print!("{}", render_team_options(&self.view)),
                ViewCommand::Search(search) => {
                    self.view.set_search(search);
                    self.print_page();
                }
                ViewCommand::Team(team) => {
                    self.view.set_team(team);
                    self.print_page();
                }
            }
        }
        Ok(())
    }

    fn print_page(&self) {
        print!("{}", render_page(&self.view, self.date_format));
    }
}
