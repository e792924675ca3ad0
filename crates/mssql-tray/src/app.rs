use crate::{AppCommand, AppError, AppResult, TrayCommand};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use mssql_tray_core::{ContainerAction, ContainerMonitor, EngineProbe};
use tao::event_loop::EventLoopProxy;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, instrument};
use tray_icon::menu::{MenuEvent, MenuId};

/// Main application state.
///
/// Runs on the async runtime thread and drives the polling cadence.
/// Communicates tray icon updates back to the main thread via the event-loop
/// proxy because `TrayIcon` is `!Send` and must remain on the UI thread.
pub struct App {
    pub(crate) monitor: ContainerMonitor<EngineProbe>,
    pub(crate) tray_proxy: EventLoopProxy<TrayCommand>,
    pub(crate) command_tx: mpsc::Sender<AppCommand>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) poll_interval: Duration,
    pub(crate) start_menu_id: MenuId,
    pub(crate) stop_menu_id: MenuId,
    pub(crate) restart_menu_id: MenuId,
    pub(crate) quit_menu_id: MenuId,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("MSSQL Tray starting");

        // Every status edge the monitor sees is forwarded to the UI thread.
        // The callback slot is single-subscriber; this is the one subscriber.
        let proxy = self.tray_proxy.clone();
        self.monitor.set_on_status_change(move |status| {
            let _ = proxy.send_event(TrayCommand::SetStatus(status));
        });

        // Tray event forwarding via single persistent blocking task.
        //
        // MenuEvent::receiver() returns a crossbeam_channel::Receiver which
        // HAS blocking recv() -- zero polling, instant response, one thread.
        //
        // Shutdown: when tray_event_rx is dropped (main loop breaks),
        // tray_event_tx.blocking_send() fails, breaking the blocking loop.
        let (tray_event_tx, mut tray_event_rx) = mpsc::channel(32);
        let tray_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if tray_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        // The first tick fires immediately, so the tray gets an initial
        // status without waiting a full interval. Polls run to completion
        // inside this single task and therefore never overlap.
        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.monitor.poll().await;
                }

                Some(event) = tray_event_rx.recv() => {
                    if let Err(e) = self.handle_tray_event(event).await {
                        error!(error = ?e, "Failed to handle tray event");
                    }
                }

                Some(cmd) = self.command_rx.recv() => {
                    match cmd {
                        AppCommand::Dispatch(action) => {
                            if let Err(e) = self.dispatch_action(action) {
                                error!(action = %action, error = ?e, "Failed to launch control action");
                            }
                        }
                        AppCommand::Shutdown => {
                            info!("Shutdown requested");
                            break;
                        }
                    }
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        drop(tray_event_rx);

        match tokio::time::timeout(Duration::from_secs(1), tray_handle).await {
            Ok(Ok(())) => info!("Tray event forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Tray event forwarder task panicked"),
            Err(_) => info!(
                "Tray event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }

        info!("MSSQL Tray shut down successfully");

        Ok(())
    }

    /// Launch a control action and show it as pending in the tray.
    ///
    /// Fire-and-forget: the launch either succeeds or reports a spawn fault;
    /// the action's actual effect only becomes visible on a later poll.
    #[instrument(skip(self))]
    fn dispatch_action(&self, action: ContainerAction) -> AppResult<()> {
        let _ = self.tray_proxy.send_event(TrayCommand::SetPending(action));
        self.monitor.dispatch(action)?;
        Ok(())
    }

    /// Handle tray menu events.
    #[instrument(skip(self))]
    async fn handle_tray_event(&mut self, event: MenuEvent) -> AppResult<()> {
        let event_id = &event.id;

        let action = if *event_id == self.start_menu_id {
            Some(ContainerAction::Start)
        } else if *event_id == self.stop_menu_id {
            Some(ContainerAction::Stop)
        } else if *event_id == self.restart_menu_id {
            Some(ContainerAction::Restart)
        } else {
            None
        };

        if let Some(action) = action {
            self.command_tx
                .send(AppCommand::Dispatch(action))
                .await
                .map_err(|e| AppError::ChannelSendFailed {
                    message: format!("Failed to send Dispatch: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        } else if *event_id == self.quit_menu_id {
            info!("Exit requested from tray menu");
            let _ = self.tray_proxy.send_event(TrayCommand::Shutdown);
            if let Err(e) = self.command_tx.send(AppCommand::Shutdown).await {
                error!(error = ?e, "Failed to send shutdown command");
            }
        }

        Ok(())
    }
}
