//! Trello REST adapter
//!
//! - [`types`] - Wire types as the REST API returns them
//! - [`url`] - Request signing
//! - `client` - Async HTTP client and blocking [`BoardSource`](crate::core::ports::BoardSource)
//!   (requires the `trello` feature)

#[cfg(feature = "trello")]
mod client;
pub mod types;
pub mod url;

#[cfg(feature = "trello")]
pub use client::{TrelloClient, TrelloSource};
pub use types::{BoardSnapshot, TrelloBoard, TrelloCard, TrelloLabel, TrelloList};
pub use url::{Credentials, signed_url};

use thiserror::Error;

/// Errors talking to the Trello API
#[derive(Debug, Error)]
pub enum TrelloError {
    /// No API key or token configured
    #[error(
        "missing Trello credentials: set TRELLO_API_KEY and TRELLO_TOKEN, \
         or add them to the config file"
    )]
    MissingCredentials,

    /// Transport or decoding failure
    #[cfg(feature = "trello")]
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("Trello returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as returned
        body: String,
    },
}
