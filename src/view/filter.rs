use std::collections::HashSet;
use std::fmt;

use crate::directory::Player;

/// Sentinel value of the team selector meaning no restriction
pub const ALL_TEAMS: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TeamFilter {
    #[default]
    All,
    Team(String),
}

impl TeamFilter {
    pub fn matches(&self, player: &Player) -> bool {
        match self {
            TeamFilter::All => true,
            TeamFilter::Team(team) => player.team == *team,
        }
    }

    /// Value as it appears in the selector
    pub fn value(&self) -> &str {
        match self {
            TeamFilter::All => ALL_TEAMS,
            TeamFilter::Team(team) => team.as_str(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TeamFilter::All => "All Teams",
            TeamFilter::Team(team) => team.as_str(),
        }
    }
}

impl From<&str> for TeamFilter {
    fn from(value: &str) -> Self {
        if value == ALL_TEAMS {
            TeamFilter::All
        } else {
            TeamFilter::Team(value.to_string())
        }
    }
}

impl fmt::Display for TeamFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Players matching both the search text and the team selection, in
/// directory order.
pub fn filter_players<'a>(players: &'a [Player], search: &str, team: &TeamFilter) -> Vec<&'a Player> {
    let needle = search.to_lowercase();
    players
        .iter()
        .filter(|player| matches_search(player, &needle) && team.matches(player))
        .collect()
}

fn matches_search(player: &Player, needle: &str) -> bool {
    player.name.to_lowercase().contains(needle) || player.real_name.to_lowercase().contains(needle)
}

/// Selector options: the sentinel first, then each team by first occurrence.
pub fn team_options(players: &[Player]) -> Vec<TeamFilter> {
    let mut seen = HashSet::new();
    let mut options = vec![TeamFilter::All];
    for player in players {
        if seen.insert(player.team.as_str()) {
            options.push(TeamFilter::Team(player.team.clone()));
        }
    }
    options
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryStats {
    pub players: usize,
    pub teams: usize,
    pub tournaments: usize,
}

/// Aggregates over the whole list, independent of the active filters.
pub fn directory_stats(players: &[Player]) -> DirectoryStats {
    let teams: HashSet<&str> = players.iter().map(|p| p.team.as_str()).collect();
    let tournaments: HashSet<&str> = players
        .iter()
        .flat_map(|p| p.tournaments.iter().map(|t| t.name.as_str()))
        .collect();

    DirectoryStats {
        players: players.len(),
        teams: teams.len(),
        tournaments: tournaments.len(),
    }
}
