use log::{info, warn};

use crate::api::models::PlayerListEnvelope;
use crate::directory::Player;
use super::filter::{directory_stats, filter_players, team_options, DirectoryStats, TeamFilter};

/// Shown for any failure that did not come with a server message
pub const LOAD_FAILED: &str = "Failed to load data";

/// Lifecycle of one page load. Loading settles exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Error(String),
    Ready(Vec<Player>),
}

/// Page-local state of the directory view
#[derive(Debug, Clone)]
pub struct DirectoryView {
    state: LoadState,
    search: String,
    team: TeamFilter,
}

impl Default for DirectoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryView {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            search: String::new(),
            team: TeamFilter::All,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn team(&self) -> &TeamFilter {
        &self.team
    }

    /// Apply the outcome of the initial fetch. Ignored once settled.
    pub fn settle(&mut self, fetched: anyhow::Result<PlayerListEnvelope>) {
        if self.state != LoadState::Loading {
            warn!("Directory view already settled, ignoring fetch result");
            return;
        }

        self.state = match fetched {
            Ok(envelope) if envelope.success => {
                info!("Loaded {} players", envelope.players.len());
                LoadState::Ready(envelope.players)
            }
            Ok(envelope) => {
                let message = envelope.error.unwrap_or_else(|| LOAD_FAILED.to_string());
                warn!("Server reported failure: {}", message);
                LoadState::Error(message)
            }
            Err(e) => {
                warn!("Failed to load directory: {:?}", e);
                LoadState::Error(LOAD_FAILED.to_string())
            }
        };
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn set_team(&mut self, team: TeamFilter) {
        self.team = team;
    }

    /// Full player list, empty unless ready
    pub fn players(&self) -> &[Player] {
        match &self.state {
            LoadState::Ready(players) => players.as_slice(),
            _ => &[],
        }
    }

    pub fn displayed(&self) -> Vec<&Player> {
        filter_players(self.players(), &self.search, &self.team)
    }

    pub fn team_options(&self) -> Vec<TeamFilter> {
        team_options(self.players())
    }

    pub fn stats(&self) -> DirectoryStats {
        directory_stats(self.players())
    }
}
