//! Edge-triggered container monitor.
//!
//! The monitor samples the engine through a [`StatusProbe`] and fires its
//! change callback only when the classified status differs from the last
//! observation. The engine offers no push notifications, so this is a
//! Moore-style edge detector over a sampled source.

use crate::{
    ContainerAction, ContainerStatus, StatusProbe,
    error::{MonitorError, Result},
};

use std::{
    panic::Location,
    path::PathBuf,
    process::{Command, Stdio},
};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Single-subscriber change callback, invoked with the freshly observed status.
pub type StatusCallback = Box<dyn FnMut(ContainerStatus) + Send>;

/// Polls the engine for one container's status and dispatches control actions.
///
/// One instance lives for the process lifetime. Only `poll` writes
/// `last_status`, and the caller drives `poll` from a single task, so polls
/// never overlap and no locking is needed.
pub struct ContainerMonitor<P: StatusProbe> {
    container_name: String,
    control_script: PathBuf,
    probe: P,
    last_status: Option<ContainerStatus>,
    on_status_change: Option<StatusCallback>,
}

impl<P: StatusProbe> ContainerMonitor<P> {
    /// Create a monitor for `container_name`, controlled via the script at
    /// `control_script`. No probe happens until the first [`poll`](Self::poll).
    pub fn new(container_name: impl Into<String>, control_script: PathBuf, probe: P) -> Self {
        Self {
            container_name: container_name.into(),
            control_script,
            probe,
            last_status: None,
            on_status_change: None,
        }
    }

    /// Register the status-change callback.
    ///
    /// Single slot: registering again replaces the previous subscriber.
    pub fn set_on_status_change<F>(&mut self, callback: F)
    where
        F: FnMut(ContainerStatus) + Send + 'static,
    {
        self.on_status_change = Some(Box::new(callback));
    }

    /// Probe the engine once and notify on change.
    ///
    /// The callback fires synchronously, before `poll` returns, exactly when
    /// the classification differs from the previous one. The very first poll
    /// always notifies: there is no previous value to equal.
    #[instrument(skip(self), fields(container = %self.container_name))]
    pub async fn poll(&mut self) {
        let current = self.probe.probe(&self.container_name).await;

        if self.last_status != Some(current) {
            info!(status = ?current, "Container status changed");
            self.last_status = Some(current);
            if let Some(callback) = self.on_status_change.as_mut() {
                callback(current);
            }
        } else {
            debug!(status = ?current, "Container status unchanged");
        }
    }

    /// Start the container via the control script.
    pub fn start(&self) -> Result<()> {
        self.dispatch(ContainerAction::Start)
    }

    /// Stop the container via the control script.
    pub fn stop(&self) -> Result<()> {
        self.dispatch(ContainerAction::Stop)
    }

    /// Restart the container via the control script.
    pub fn restart(&self) -> Result<()> {
        self.dispatch(ContainerAction::Restart)
    }

    /// Launch `<control_script> <action>` fire-and-forget.
    ///
    /// The child is detached, never awaited, and its exit code is never read;
    /// success or failure only becomes visible once a later poll observes the
    /// engine's state. Only a launch-time spawn fault is reported.
    #[track_caller]
    #[instrument(skip(self), fields(script = ?self.control_script))]
    pub fn dispatch(&self, action: ContainerAction) -> Result<()> {
        Command::new(&self.control_script)
            .arg(action.as_arg())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| MonitorError::ActionDispatchFailed {
                action,
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(action = %action, "Control action dispatched");

        Ok(())
    }
}
