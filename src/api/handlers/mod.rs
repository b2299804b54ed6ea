use std::sync::Arc;

use crate::directory::PlayerSource;

pub mod players;

pub struct AppState {
    pub directory: Arc<dyn PlayerSource>,
}

impl AppState {
    pub fn new(directory: Arc<dyn PlayerSource>) -> Self {
        Self { directory }
    }
}
