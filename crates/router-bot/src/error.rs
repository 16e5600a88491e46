//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Router configuration error: {0}")]
    RouterConfig(#[from] chat_router::ConfigError),

    #[error("Registry error: {0}")]
    Registry(#[from] chat_router::RegistryError),

    #[error("Router error: {0}")]
    Router(#[from] chat_router::RouterError),

    #[error("Signal error: {0}")]
    Signal(#[from] signal_client::SignalError),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
