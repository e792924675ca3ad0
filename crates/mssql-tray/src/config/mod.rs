#[allow(clippy::module_inception)]
mod config;
mod container_config;
mod control_config;
mod polling_config;

pub(crate) use {
    config::Config, container_config::ContainerConfig, control_config::ControlConfig,
    polling_config::PollingConfig,
};

pub(crate) const DEFAULT_CONTAINER_NAME: &str = "mssql-server";
pub(crate) const DEFAULT_ENGINE: &str = "podman";
pub(crate) const DEFAULT_CONTROL_SCRIPT: &str = "mssql.sh";
pub(crate) const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;
pub(crate) const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

pub(crate) fn default_container_name() -> String {
    DEFAULT_CONTAINER_NAME.to_string()
}

pub(crate) fn default_engine() -> String {
    DEFAULT_ENGINE.to_string()
}

pub(crate) fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

pub(crate) fn default_probe_timeout_secs() -> u64 {
    DEFAULT_PROBE_TIMEOUT_SECS
}
