//! MSSQL Tray: desktop indicator for a podman-hosted MSSQL container.

mod app;
mod app_command;
mod config;
mod error;
mod status_display;
#[cfg(test)]
mod tests;
mod tray_command;
mod tray_manager;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    tray_command::TrayCommand,
    tray_manager::TrayManager,
};

use crate::config::Config;

use mssql_tray_core::{ContainerMonitor, EngineProbe};
use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tokio::sync::mpsc;
use tracing::{error, warn};

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("mssql_tray=debug")
        .init();

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new() {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => {
                match cmd {
                    TrayCommand::SetStatus(status) => {
                        if let Err(e) = tray_manager.update_status(status) {
                            error!(error = ?e, "Failed to update tray icon");
                        }
                    }
                    TrayCommand::SetPending(action) => {
                        if let Err(e) = tray_manager.show_pending(action) {
                            error!(error = ?e, "Failed to show pending action");
                        }
                    }
                    TrayCommand::Shutdown => {
                        *control_flow = ControlFlow::ExitWithCode(0);
                    }
                }
                return;
            }
            Event::NewEvents(tao::event::StartCause::Init) => {
                let config = match Config::load() {
                    Ok(c) => c,
                    Err(e) => {
                        error!("Failed to load config: {:?}", e);
                        std::process::exit(1);
                    }
                };

                let control_script = match config.control_script() {
                    Ok(path) => path,
                    Err(e) => {
                        error!("Failed to resolve control script path: {:?}", e);
                        std::process::exit(1);
                    }
                };

                // Not fatal: status monitoring works without the script, and
                // action launches report their own faults.
                if !control_script.exists() {
                    warn!(
                        script = ?control_script,
                        "Control script not found; start/stop/restart will fail until it exists"
                    );
                }

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                let probe = EngineProbe::new(config.container.engine.clone(), config.probe_timeout());
                let monitor =
                    ContainerMonitor::new(config.container.name.clone(), control_script, probe);

                let (command_tx, command_rx) = mpsc::channel(32);

                let tray_proxy = tray_proxy.clone();
                let poll_interval = config.poll_interval();
                let start_menu_id = tray_manager.start_item_id().clone();
                let stop_menu_id = tray_manager.stop_item_id().clone();
                let restart_menu_id = tray_manager.restart_item_id().clone();
                let quit_menu_id = tray_manager.quit_item_id().clone();

                // Spawn tokio runtime on separate thread.
                // TrayManager stays on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        let app = App {
                            monitor,
                            tray_proxy,
                            command_tx,
                            command_rx,
                            poll_interval,
                            start_menu_id,
                            stop_menu_id,
                            restart_menu_id,
                            quit_menu_id,
                        };

                        if let Err(e) = app.run().await {
                            error!(error = ?e, "App error");
                        }
                    });
                });
            }
            _ => {}
        }
    });
}
