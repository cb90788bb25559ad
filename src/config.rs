//! Projector configuration.

use serde::{Deserialize, Serialize};

/// Settings for a [`crate::Projector`]. Every field has a default, so a
/// partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectorConfig {
    /// Service name reported in error context.
    pub service_name: String,
    /// Server the service runs on, if known.
    pub server_name: Option<String>,
    /// Memoize element-only views.
    pub memoize: bool,
    /// Entries kept before the memo cache is cleared.
    pub cache_capacity: usize,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            service_name: "metaview".to_owned(),
            server_name: None,
            memoize: false,
            cache_capacity: 1024,
        }
    }
}

impl ProjectorConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self { service_name: service_name.into(), ..Default::default() }
    }

    pub fn with_server_name(mut self, server_name: impl Into<String>) -> Self {
        self.server_name = Some(server_name.into());
        self
    }

    pub fn with_memoize(mut self, capacity: usize) -> Self {
        self.memoize = true;
        self.cache_capacity = capacity;
        self
    }

    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// `service@server` when the server is known.
    pub fn attribution(&self) -> String {
        match &self.server_name {
            Some(server) => format!("{}@{}", self.service_name, server),
            None => self.service_name.clone(),
        }
    }
}
