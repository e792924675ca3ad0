use mssql_tray_core::{ContainerAction, ContainerStatus};

/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`),
/// so all tray mutations flow through this enum via the event-loop proxy.
#[derive(Debug, Clone, Copy)]
pub enum TrayCommand {
    /// Show a freshly observed container status.
    SetStatus(ContainerStatus),
    /// Show that an action was dispatched and its outcome is not yet known.
    SetPending(ContainerAction),
    /// Shut down the application. The main thread will exit the event loop.
    Shutdown,
}
