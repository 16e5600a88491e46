//! Signal CLI REST API client and chat transport.

mod client;
mod error;
mod receiver;
mod transport;
mod types;

pub use client::{attachment_data_uri, SignalClient};
pub use error::SignalError;
pub use receiver::MessageReceiver;
pub use types::*;
