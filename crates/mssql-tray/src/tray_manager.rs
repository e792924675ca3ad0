//! System tray icon with status-driven updates.
//!
//! Shows a colored dot for the container's run-state and a context menu
//! with a status line, Start/Stop/Restart actions and Quit.

use crate::{AppError, AppResult, status_display};

use std::panic::Location;

use error_location::ErrorLocation;
use image::{Rgba, RgbaImage};
use mssql_tray_core::{ContainerAction, ContainerStatus};
use tracing::{info, instrument};
use tray_icon::menu::{Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const ICON_SIZE: u32 = 22;
const ICON_MARGIN: f32 = 2.0;

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    status_item: MenuItem,
    start_item_id: MenuId,
    stop_item_id: MenuId,
    restart_item_id: MenuId,
    quit_item_id: MenuId,
}

impl TrayManager {
    /// Create the tray icon with its menu, in the "checking" state.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let menu = Menu::new();

        let status_item = MenuItem::new("Status: checking...", false, None);
        let start_item = MenuItem::new("Start", true, None);
        let stop_item = MenuItem::new("Stop", true, None);
        let restart_item = MenuItem::new("Restart", true, None);
        let quit_item = MenuItem::new("Quit", true, None);

        let start_id = start_item.id().clone();
        let stop_id = stop_item.id().clone();
        let restart_id = restart_item.id().clone();
        let quit_id = quit_item.id().clone();

        menu.append_items(&[
            &status_item,
            &PredefinedMenuItem::separator(),
            &start_item,
            &stop_item,
            &restart_item,
            &PredefinedMenuItem::separator(),
            &quit_item,
        ])
        .map_err(|e| AppError::TrayError {
            reason: format!("Failed to build tray menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let icon = Self::status_icon(ContainerStatus::Unknown)?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip("MSSQL: checking...")
            .with_menu(Box::new(menu))
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            status_item,
            start_item_id: start_id,
            stop_item_id: stop_id,
            restart_item_id: restart_id,
            quit_item_id: quit_id,
        })
    }

    /// Show a freshly observed container status.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn update_status(&mut self, status: ContainerStatus) -> AppResult<()> {
        let label = status_display::status_label(status);
        self.apply(
            Self::status_icon(status)?,
            &format!("MSSQL: {label}"),
            &format!("Status: {label}"),
        )
    }

    /// Show a dispatched-but-unconfirmed action.
    ///
    /// The dot reverts to the Unknown color until a later poll observes the
    /// action's effect (or its absence).
    #[track_caller]
    #[instrument(skip(self))]
    pub fn show_pending(&mut self, action: ContainerAction) -> AppResult<()> {
        let label = status_display::pending_label(action);
        self.apply(
            Self::status_icon(ContainerStatus::Unknown)?,
            &format!("MSSQL: {label}"),
            &format!("Status: {label}"),
        )
    }

    #[track_caller]
    fn apply(&mut self, icon: Icon, tooltip: &str, status_text: &str) -> AppResult<()> {
        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.tray_icon
            .set_tooltip(Some(tooltip))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.status_item.set_text(status_text);

        Ok(())
    }

    /// Build the colored status dot for a status.
    ///
    /// The dot is rendered in code; there are no bundled icon assets.
    #[track_caller]
    fn status_icon(status: ContainerStatus) -> AppResult<Icon> {
        let dot = render_dot(status_display::status_color(status));
        let (width, height) = (dot.width(), dot.height());

        Icon::from_rgba(dot.into_raw(), width, height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Get the Start menu item ID.
    pub fn start_item_id(&self) -> &MenuId {
        &self.start_item_id
    }

    /// Get the Stop menu item ID.
    pub fn stop_item_id(&self) -> &MenuId {
        &self.stop_item_id
    }

    /// Get the Restart menu item ID.
    pub fn restart_item_id(&self) -> &MenuId {
        &self.restart_item_id
    }

    /// Get the Quit menu item ID.
    pub fn quit_item_id(&self) -> &MenuId {
        &self.quit_item_id
    }
}

/// Render a filled circle on a transparent background, with a 1px soft edge.
fn render_dot(color: [u8; 4]) -> RgbaImage {
    let center = ICON_SIZE as f32 / 2.0;
    let radius = center - ICON_MARGIN;

    RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        let dist = (dx * dx + dy * dy).sqrt();

        if dist <= radius - 0.5 {
            Rgba(color)
        } else if dist < radius + 0.5 {
            let coverage = radius + 0.5 - dist;
            Rgba([color[0], color[1], color[2], (color[3] as f32 * coverage) as u8])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}
