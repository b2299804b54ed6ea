use anyhow::{Context, Result};
use reqwest::Client;

use crate::api::models::PlayerListEnvelope;
use crate::errors::{client_context, decode_context, request_context};

pub const PLAYERS_PATH: &str = "/api/players";

/// HTTP client for the directory endpoint. No timeout and no retries: a
/// hung request keeps the view loading.
pub struct DirectoryClient {
    client: Client,
    endpoint: String,
}

impl DirectoryClient {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let client = Self::build_client(user_agent).with_context(|| client_context(base_url))?;
        let endpoint = Self::endpoint_url(base_url);

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the envelope. Both 200 and 500 bodies decode; only transport
    /// and decoding failures are errors.
    pub async fn fetch(&self) -> Result<PlayerListEnvelope> {
        let response = self.send_get_request().await?;
        response
            .json::<PlayerListEnvelope>()
            .await
            .with_context(|| decode_context(&self.endpoint))
    }

    fn build_client(user_agent: &str) -> reqwest::Result<Client> {
        Client::builder().user_agent(user_agent).build()
    }

    fn endpoint_url(base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), PLAYERS_PATH)
    }

    async fn send_get_request(&self) -> Result<reqwest::Response> {
        self.client
            .get(&self.endpoint)
            .send()
            .await
            .with_context(|| request_context(&self.endpoint))
    }
}
