mod client;
mod response;

pub use client::Client;
pub use response::Response;

use serde_json::Value;
use thiserror::Error;

/// Anything that can carry one JSON POST to a URL.
pub trait Transport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Response, Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to send webhook: {status} {body}")]
    Status { status: u16, body: String },
    #[error("Error sending webhook")]
    Transport {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseText {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Cannot build the http client")]
    BuildClient {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to serialize message")]
    Serialize {
        #[source]
        cause: serde_json::Error,
    },
}
