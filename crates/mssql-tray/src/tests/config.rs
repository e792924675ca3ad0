use crate::config::{
    Config, DEFAULT_CONTAINER_NAME, DEFAULT_CONTROL_SCRIPT, DEFAULT_ENGINE,
    DEFAULT_POLL_INTERVAL_MS, DEFAULT_PROBE_TIMEOUT_SECS,
};

use std::{path::PathBuf, time::Duration};

/// WHAT: An empty TOML document deserializes to the documented defaults
/// WHY: Every field is optional; a fresh or hand-trimmed config must work
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_toml_when_parsing_then_defaults_apply() {
    // Given/When: Parsing an empty document
    let config: Config = toml::from_str("").unwrap();

    // Then: Documented defaults everywhere
    assert_eq!(config.container.name, DEFAULT_CONTAINER_NAME);
    assert_eq!(config.container.engine, DEFAULT_ENGINE);
    assert!(config.control.script_path.is_none());
    assert_eq!(config.polling.interval_ms, DEFAULT_POLL_INTERVAL_MS);
    assert_eq!(config.polling.probe_timeout_secs, DEFAULT_PROBE_TIMEOUT_SECS);
}

/// WHAT: Partial sections override only what they name
/// WHY: Poll interval and probe timeout are runtime-tunable via the file
#[test]
#[allow(clippy::unwrap_used)]
fn given_partial_overrides_when_parsing_then_rest_stays_default() {
    let doc = r#"
        [container]
        name = "mssql-server-test"

        [polling]
        interval_ms = 1000
    "#;

    let config: Config = toml::from_str(doc).unwrap();

    assert_eq!(config.container.name, "mssql-server-test");
    assert_eq!(config.container.engine, DEFAULT_ENGINE);
    assert_eq!(config.poll_interval(), Duration::from_millis(1000));
    assert_eq!(
        config.probe_timeout(),
        Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS)
    );
}

/// WHAT: A configured script path wins over the executable-relative default
/// WHY: Users can keep the control script anywhere
#[test]
#[allow(clippy::unwrap_used)]
fn given_explicit_script_path_when_resolving_then_used_verbatim() {
    let doc = r#"
        [control]
        script_path = "/opt/mssql/mssql.sh"
    "#;

    let config: Config = toml::from_str(doc).unwrap();

    assert_eq!(
        config.control_script().unwrap(),
        PathBuf::from("/opt/mssql/mssql.sh")
    );
}

/// WHAT: With no configured path, the script resolves next to the executable
/// WHY: The default deployment drops mssql.sh beside the binary
#[test]
#[allow(clippy::unwrap_used)]
fn given_no_script_path_when_resolving_then_next_to_executable() {
    let config = Config::default();

    let resolved = config.control_script().unwrap();

    assert_eq!(
        resolved.file_name().and_then(|n| n.to_str()),
        Some(DEFAULT_CONTROL_SCRIPT)
    );
    let exe_dir = std::env::current_exe().unwrap();
    assert_eq!(resolved.parent(), exe_dir.parent());
}
