//! Signal client errors.

use chat_router::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignalError {
    #[error("Signal API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from one of the REST endpoints.
    #[error("Signal API {endpoint} returned {status}: {body}")]
    Api {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error("account {0} is not registered")]
    NotRegistered(String),
}

impl From<SignalError> for TransportError {
    fn from(err: SignalError) -> Self {
        TransportError::new(err)
    }
}
