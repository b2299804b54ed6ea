use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::{debug, error};
use std::sync::Arc;

use crate::api::models::{ErrorResponse, PLAYER_DATA_UNAVAILABLE, PlayerListResponse};
use super::AppState;

pub async fn get_players(State(state): State<Arc<AppState>>) -> Response {
    match state.directory.players() {
        Ok(players) => {
            debug!("Serving {} players", players.len());
            Json(PlayerListResponse::new(players)).into_response()
        }
        Err(e) => {
            error!("Failed to read player directory: {:?}", e);
            unavailable_response()
        }
    }
}

pub fn unavailable_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(PLAYER_DATA_UNAVAILABLE)),
    )
        .into_response()
}
