//! Signal chat bot built on the command router.

pub mod commands;
pub mod config;
pub mod error;
