use std::fmt::Write as _;

use chrono::NaiveDate;
use colored::Colorize;

use crate::directory::{Player, Tournament};
use super::state::{DirectoryView, LoadState};

pub const TITLE: &str = "Chinese Dota 2 Players";
pub const SUBTITLE: &str = "Tier 1 Tournament Participants in 2025";
pub const LOADING_TEXT: &str = "Loading Chinese Dota 2 players data...";
pub const NO_RESULTS_TEXT: &str = "No players found matching your search criteria.";
pub const FOOTER_TEXT: &str =
    "Data represents Chinese Dota 2 players participating in Liquipedia Tier 1 tournaments during 2025";

/// Render the whole page for the current view state.
pub fn render_page(view: &DirectoryView, date_format: &str) -> String {
    match view.state() {
        LoadState::Loading => format!("{}\n", LOADING_TEXT.dimmed()),
        LoadState::Error(message) => format!("{}\n", format!("Error: {}", message).red().bold()),
        LoadState::Ready(_) => render_ready(view, date_format),
    }
}

fn render_ready(view: &DirectoryView, date_format: &str) -> String {
    let mut out = String::new();
    render_header(&mut out, view);
    render_filters(&mut out, view);

    let displayed = view.displayed();
    if displayed.is_empty() {
        let _ = writeln!(out, "{}\n", NO_RESULTS_TEXT.yellow());
    } else {
        for player in displayed {
            render_card(&mut out, player, date_format);
        }
    }

    let _ = writeln!(out, "{}", FOOTER_TEXT.dimmed());
    out
}

fn render_header(out: &mut String, view: &DirectoryView) {
    let stats = view.stats();
    let _ = writeln!(out, "{}", TITLE.bold());
    let _ = writeln!(out, "{}\n", SUBTITLE);
    let _ = writeln!(
        out,
        "  {} Total Players   {} Teams   {} Tournaments\n",
        stats.players.to_string().bold(),
        stats.teams.to_string().bold(),
        stats.tournaments.to_string().bold(),
    );
}

fn render_filters(out: &mut String, view: &DirectoryView) {
    let _ = writeln!(out, "Search: \"{}\"   Team: {}\n", view.search(), view.team().label().cyan());
}

fn render_card(out: &mut String, player: &Player, date_format: &str) {
    let _ = writeln!(out, "{}  [{}]", player.name.bold(), player.team.magenta());
    let _ = writeln!(out, "{}", player.real_name.italic());
    let _ = writeln!(out, "Tournaments ({})", player.tournaments.len());
    for tournament in &player.tournaments {
        render_tournament(out, tournament, date_format);
    }
    out.push('\n');
}

fn render_tournament(out: &mut String, tournament: &Tournament, date_format: &str) {
    let _ = writeln!(
        out,
        "  - {}  {}",
        tournament.name,
        format_date(tournament.date, date_format).dimmed()
    );
}

pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    date.format(date_format).to_string()
}

/// Team selector options, one per line, marking the active one.
pub fn render_team_options(view: &DirectoryView) -> String {
    let mut out = String::new();
    for option in view.team_options() {
        let marker = if &option == view.team() { "*" } else { " " };
        let _ = writeln!(out, "{} {}", marker, option.label());
    }
    out
}
