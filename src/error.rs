// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (offline, DNS, CORS...).
    #[error("network error: {0}")]
    Network(String),

    #[error("malformed {endpoint} body: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl From<gloo_net::Error> for FetchError {
    fn from(e: gloo_net::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}
