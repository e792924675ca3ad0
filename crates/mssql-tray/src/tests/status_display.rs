use crate::status_display::{pending_label, status_color, status_label};

use mssql_tray_core::{ContainerAction, ContainerStatus};

/// WHAT: Each status has its documented human label
/// WHY: Tooltip and menu text are built from these labels
#[test]
fn given_each_status_when_labelling_then_documented_text() {
    assert_eq!(status_label(ContainerStatus::Running), "Running");
    assert_eq!(status_label(ContainerStatus::Stopped), "Stopped");
    assert_eq!(status_label(ContainerStatus::Unknown), "Unknown");
}

/// WHAT: Statuses map to green, red and yellow dots
/// WHY: The dot color is the primary at-a-glance signal in the tray
#[test]
fn given_each_status_when_coloring_then_green_red_yellow() {
    let green = status_color(ContainerStatus::Running);
    let red = status_color(ContainerStatus::Stopped);
    let yellow = status_color(ContainerStatus::Unknown);

    // Fully opaque, and dominant channels as expected
    for color in [green, red, yellow] {
        assert_eq!(color[3], 0xff);
    }
    assert!(green[1] > green[0] && green[1] > green[2]);
    assert!(red[0] > red[1] && red[0] > red[2]);
    assert!(yellow[0] > yellow[2] && yellow[1] > yellow[2]);
}

/// WHAT: Pending labels match the dispatched action
/// WHY: The tray shows the in-flight action until a poll confirms it
#[test]
fn given_each_action_when_pending_then_progressive_label() {
    assert_eq!(pending_label(ContainerAction::Start), "Starting...");
    assert_eq!(pending_label(ContainerAction::Stop), "Stopping...");
    assert_eq!(pending_label(ContainerAction::Restart), "Restarting...");
}
