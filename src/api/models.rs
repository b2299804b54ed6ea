use serde::{Deserialize, Serialize};

use crate::directory::Player;

/// Message sent to clients whenever the directory cannot be served
pub const PLAYER_DATA_UNAVAILABLE: &str = "Failed to fetch player data";

#[derive(Serialize)]
pub struct PlayerListResponse<'a> {
    pub success: bool,
    pub count: usize,
    pub players: &'a [Player],
}

impl<'a> PlayerListResponse<'a> {
    pub fn new(players: &'a [Player]) -> Self {
        Self {
            success: true,
            count: players.len(),
            players,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Either envelope as read back by a client.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerListEnvelope {
    pub success: bool,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub error: Option<String>,
}
