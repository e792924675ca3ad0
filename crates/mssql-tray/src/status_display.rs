//! Presentation attributes for container statuses and pending actions.
//!
//! Pure mappings only. The core compares statuses; the tray displays them.

use mssql_tray_core::{ContainerAction, ContainerStatus};

const GREEN: [u8; 4] = [0x2e, 0xa0, 0x43, 0xff];
const RED: [u8; 4] = [0xd1, 0x24, 0x2f, 0xff];
const YELLOW: [u8; 4] = [0xd4, 0xa7, 0x2d, 0xff];

/// Human label for a status, used in tooltip and menu text.
pub(crate) fn status_label(status: ContainerStatus) -> &'static str {
    match status {
        ContainerStatus::Running => "Running",
        ContainerStatus::Stopped => "Stopped",
        ContainerStatus::Unknown => "Unknown",
    }
}

/// RGBA color of the tray dot for a status.
pub(crate) fn status_color(status: ContainerStatus) -> [u8; 4] {
    match status {
        ContainerStatus::Running => GREEN,
        ContainerStatus::Stopped => RED,
        ContainerStatus::Unknown => YELLOW,
    }
}

/// Label shown while an action has been dispatched but not yet observed.
pub(crate) fn pending_label(action: ContainerAction) -> &'static str {
    match action {
        ContainerAction::Start => "Starting...",
        ContainerAction::Stop => "Stopping...",
        ContainerAction::Restart => "Restarting...",
    }
}
