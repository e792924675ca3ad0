use crate::config::{default_container_name, default_engine};

use serde::{Deserialize, Serialize};

/// Monitored container configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerConfig {
    /// Name of the container to monitor, as listed by the engine.
    #[serde(default = "default_container_name")]
    pub name: String,
    /// Container engine CLI binary (`podman`, `docker`, ...).
    #[serde(default = "default_engine")]
    pub engine: String,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            name: default_container_name(),
            engine: default_engine(),
        }
    }
}
