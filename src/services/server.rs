use anyhow::{Context, Result};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::create_router;
use crate::api::handlers::AppState;
use crate::config::settings::AppConfig;
use crate::directory::StaticDirectory;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let state = Arc::new(AppState::new(Arc::new(StaticDirectory)));

        let app = create_router(state)
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::new(self.config.server.bind_host, self.port);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        info!("Server listening on {}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
