//! Error taxonomy for remote-store calls.
//!
//! Every gateway call resolves to either a decoded result set or one of
//! these variants. An empty result set is `Ok(vec![])`, never an error;
//! the distinction matters to the views, which render "no data" and
//! failure states differently.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never produced an HTTP response (DNS, TLS, aborted fetch).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected row shape.
    #[error("could not decode rows: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GatewayError {
    /// Shorthand used by fixtures and tests to simulate a server failure.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }
}
