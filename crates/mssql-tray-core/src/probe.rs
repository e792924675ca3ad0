//! Status probing against the container engine CLI.
//!
//! A probe is a single bounded invocation of `<engine> ps --format
//! {{.Names}}`. Every possible outcome maps onto exactly one
//! [`ContainerStatus`]; probes never return errors, never retry, and mutate
//! no shared state. Re-probing is the monitor's job on the next tick.

use crate::ContainerStatus;

use std::{process::Stdio, time::Duration};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument};

/// A point-in-time sample of the container's run-state.
///
/// The trait seam exists so the monitor can be driven by scripted probes in
/// tests without spawning real processes.
#[async_trait]
pub trait StatusProbe: Send {
    /// Classify the current run-state of `container_name`.
    async fn probe(&self, container_name: &str) -> ContainerStatus;
}

/// Probe backed by the real container engine CLI.
#[derive(Debug, Clone)]
pub struct EngineProbe {
    engine: String,
    timeout: Duration,
}

impl EngineProbe {
    /// Create a probe for the given engine binary (`podman`, `docker`, ...)
    /// with a hard per-invocation timeout.
    pub fn new(engine: impl Into<String>, timeout: Duration) -> Self {
        Self {
            engine: engine.into(),
            timeout,
        }
    }
}

#[async_trait]
impl StatusProbe for EngineProbe {
    #[instrument(skip(self), fields(engine = %self.engine))]
    async fn probe(&self, container_name: &str) -> ContainerStatus {
        // kill_on_drop: a timed-out query must not linger as an orphaned
        // engine process behind the next tick.
        let output = Command::new(&self.engine)
            .args(["ps", "--format", "{{.Names}}"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .output();

        match tokio::time::timeout(self.timeout, output).await {
            Ok(Ok(output)) => {
                // Exit code is deliberately not inspected: an engine that
                // answers with an empty list and a nonzero code still means
                // the container is not running.
                let stdout = String::from_utf8_lossy(&output.stdout);
                classify_names(&stdout, container_name)
            }
            Ok(Err(e)) => {
                debug!(error = %e, "Engine query failed to execute");
                ContainerStatus::Unknown
            }
            Err(_) => {
                debug!(timeout_ms = self.timeout.as_millis() as u64, "Engine query timed out");
                ContainerStatus::Unknown
            }
        }
    }
}

/// Classify newline-separated container names from the engine.
///
/// Matching is exact per line (`mssql-server-test-2` must not match
/// `mssql-server-test`); trailing `\r` from a Windows engine is tolerated.
pub(crate) fn classify_names(stdout: &str, container_name: &str) -> ContainerStatus {
    if stdout.lines().any(|line| line.trim_end() == container_name) {
        ContainerStatus::Running
    } else {
        ContainerStatus::Stopped
    }
}
