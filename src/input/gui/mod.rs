//! Windowed explorer: winit for the window and input, pixels for the
//! framebuffer and egui for the control panel.

mod app;
mod panel;

pub use app::{GuiError, GuiOptions, run_gui};
