use mssql_tray_core::ContainerAction;

/// Commands sent from tray menu handling to the main application loop.
#[derive(Debug, Clone, Copy)]
pub enum AppCommand {
    /// Dispatch a container control action.
    Dispatch(ContainerAction),
    /// Request application shutdown.
    Shutdown,
}
