mod config;
mod status_display;
