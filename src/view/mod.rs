pub mod client;
pub mod filter;
pub mod render;
pub mod state;

pub use client::DirectoryClient;
pub use filter::{filter_players, TeamFilter, ALL_TEAMS};
pub use state::{DirectoryView, LoadState};
