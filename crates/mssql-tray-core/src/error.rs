use crate::ContainerAction;

use error_location::ErrorLocation;
use thiserror::Error;

/// Monitor errors with source location tracking.
///
/// Probe failures never appear here: they are absorbed into
/// [`ContainerStatus::Unknown`](crate::ContainerStatus::Unknown) so the poll
/// loop keeps running whatever the engine's health. Only launch-time faults
/// of the control script surface as errors.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// The control script could not be spawned for an action.
    #[error("Failed to launch control script for '{action}': {source} {location}")]
    ActionDispatchFailed {
        /// The action that was being dispatched.
        action: ContainerAction,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`MonitorError`].
pub type Result<T> = std::result::Result<T, MonitorError>;
