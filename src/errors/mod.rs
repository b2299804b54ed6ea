/// Context for a request to the directory endpoint that never got a response
pub fn request_context(url: &str) -> String {
    format!("Request to {} did not complete", url)
}

/// Context for a response body that is not a player list envelope
pub fn decode_context(url: &str) -> String {
    format!("Response from {} is not a player list envelope", url)
}

/// Context for a client that could not be constructed
pub fn client_context(base_url: &str) -> String {
    format!("Failed to build directory client for {}", base_url)
}
