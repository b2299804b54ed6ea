pub mod models;
mod roster;

use anyhow::Result;

pub use models::{Player, Tournament};

/// The full directory in declaration order. Same slice on every call.
pub fn list_players() -> &'static [Player] {
    &roster::ROSTER
}

/// Where the endpoint reads players from
pub trait PlayerSource: Send + Sync {
    fn players(&self) -> Result<&[Player]>;
}

/// The built-in static directory
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDirectory;

impl PlayerSource for StaticDirectory {
    fn players(&self) -> Result<&[Player]> {
        Ok(list_players())
    }
}
