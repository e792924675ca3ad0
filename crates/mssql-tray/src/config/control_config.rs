use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Control script configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControlConfig {
    /// Path of the start/stop/restart script. When unset, the script is
    /// looked up next to the executable.
    #[serde(default)]
    pub script_path: Option<PathBuf>,
}
