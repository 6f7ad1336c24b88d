//! Host configuration
//!
//! Process-wide, read-only lookups supplied by the embedding host: which
//! services may embed, whether playback is consent-gated, whether external
//! thumbnails are fetched, and the public server name injected into
//! parent-locked services. The configuration is injected into the resolver
//! and assembler rather than read from ambient state, so the core stays
//! testable without a live host.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing host configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse configuration TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Read-only host configuration for one request
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Service allow-list; empty means every registered service is allowed
    pub enabled_services: Vec<String>,

    /// Gate playback behind an explicit click
    pub require_consent: bool,

    /// Fetch thumbnails from the external service
    pub fetch_external_thumbnails: bool,

    /// Public server name, injected as `parent` for services that demand it
    pub server_name: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            enabled_services: vec![],
            require_consent: false,
            fetch_external_thumbnails: true,
            server_name: "localhost".to_string(),
        }
    }
}

impl HostConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load host configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load host configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the service allow-list
    pub fn with_enabled_services(mut self, services: Vec<String>) -> Self {
        self.enabled_services = services;
        self
    }

    /// Enable or disable the consent gate
    pub fn with_require_consent(mut self, require: bool) -> Self {
        self.require_consent = require;
        self
    }

    /// Enable or disable external thumbnail fetching
    pub fn with_fetch_external_thumbnails(mut self, fetch: bool) -> Self {
        self.fetch_external_thumbnails = fetch;
        self
    }

    /// Set the public server name
    pub fn with_server_name(mut self, name: impl Into<String>) -> Self {
        self.server_name = name.into();
        self
    }

    /// Whether a service passes the allow-list. An empty list allows all.
    pub fn service_enabled(&self, name: &str) -> bool {
        self.enabled_services.is_empty() || self.enabled_services.iter().any(|s| s == name)
    }
}
