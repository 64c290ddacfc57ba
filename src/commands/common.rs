//! Common utilities shared across commands.

use serde::Serialize;

use crate::{
    core::{config::ClientConfig, http::ApiClient},
    Result,
};

/// Resources every command needs
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub api: ApiClient,
    pub as_json: bool,
}

impl CommandContext {
    /// Resolve config (flag > env > file > default) and build the client.
    pub fn new(base_url: Option<String>, as_json: bool) -> Result<Self> {
        let config = ClientConfig::resolve(base_url)?;
        Self::from_config(&config, as_json)
    }

    pub fn from_config(config: &ClientConfig, as_json: bool) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(config)?,
            as_json,
        })
    }
}

pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Surfaced view-model errors go to stderr with a warning marker.
pub fn warn_line(context: &str, message: &str) -> String {
    format!("⚠ {}: {}", context, message)
}
