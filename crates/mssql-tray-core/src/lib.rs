//! MSSQL Tray Core Library
//!
//! Container run-state monitoring over an external engine CLI: a bounded
//! status probe, an edge-triggered polling monitor, and fire-and-forget
//! control-script dispatch.
//!
//! # Example
//!
//! ```no_run
//! use mssql_tray_core::{ContainerMonitor, CoreResult, EngineProbe};
//!
//! use std::{path::PathBuf, time::Duration};
//!
//! #[tokio::main]
//! async fn main() -> CoreResult<()> {
//!     let probe = EngineProbe::new("podman", Duration::from_secs(10));
//!     let mut monitor =
//!         ContainerMonitor::new("mssql-server", PathBuf::from("./mssql.sh"), probe);
//!
//!     monitor.set_on_status_change(|status| println!("status is now {:?}", status));
//!
//!     monitor.poll().await; // first poll always notifies
//!     monitor.restart()?;
//!     Ok(())
//! }
//! ```

mod action;
mod error;
mod monitor;
mod probe;
mod status;

pub use {
    action::ContainerAction,
    error::{MonitorError, Result as CoreResult},
    monitor::{ContainerMonitor, StatusCallback},
    probe::{EngineProbe, StatusProbe},
    status::ContainerStatus,
};

#[cfg(test)]
mod tests;
