use std::time::Instant;

use egui::Context;
use egui_winit::State as EguiWinitState;
use thiserror::Error;
use tracing::{error, info, warn};
use winit::{
    dpi::{LogicalSize, PhysicalPosition},
    error::{EventLoopError, OsError},
    event::{ElementState, Event, MouseButton, MouseScrollDelta, Touch, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::config::EngineConfig;
use crate::controllers::viewport::channel::EventSender;
use crate::controllers::viewport::controller::ViewportController;
use crate::controllers::viewport::gestures::{GestureTranslator, TouchPhase};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::ScreenPoint;
use crate::core::data::shareable_state::ShareableState;
use crate::core::viewport::events::{FractalCommand, ViewportEvent};
use crate::input::gui::panel::{PanelState, show_panel};
use crate::presenters::pixels::presenter::{PixelsPresenter, PresentError};

/// Pixels per wheel "line" when the platform reports pixel deltas.
const PIXELS_PER_LINE: f64 = 40.0;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error(transparent)]
    EventLoop(#[from] EventLoopError),
    #[error(transparent)]
    Window(#[from] OsError),
    #[error(transparent)]
    Present(#[from] PresentError),
    #[error(transparent)]
    PixelRect(#[from] PixelRectError),
}

#[derive(Debug, Clone, Default)]
pub struct GuiOptions {
    pub config: EngineConfig,
    pub shared: Option<ShareableState>,
    pub width: u32,
    pub height: u32,
}

struct GuiApp {
    controller: ViewportController,
    sender: EventSender,
    gestures: GestureTranslator,
    presenter: PixelsPresenter,
    panel: PanelState,
    last_frame: Instant,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl GuiApp {
    fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        options: &GuiOptions,
    ) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let viewport = PixelRect::new(size.width.max(1), size.height.max(1))?;

        let mut controller =
            ViewportController::new(viewport, options.config.viewport, options.config.auto_zoom);
        if let Some(shared) = options.shared {
            controller.apply_command(FractalCommand::ApplyShared(shared));
        }
        let sender = controller.connect();

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Ok(Self {
            controller,
            sender,
            gestures: GestureTranslator::default(),
            presenter: PixelsPresenter::new(window)?,
            panel: PanelState::default(),
            last_frame: Instant::now(),
            egui_ctx,
            egui_state,
        })
    }

    fn post(&self, event: ViewportEvent) {
        if let Err(error) = self.sender.send(event) {
            warn!(%error, "dropping gesture");
        }
    }

    fn handle_input(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let event = self.gestures.cursor_moved(screen_point(*position));
                self.post(event);
            }
            WindowEvent::CursorLeft { .. } => self.gestures.cursor_left(),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let event = match state {
                    ElementState::Pressed => self.gestures.button_pressed(),
                    ElementState::Released => Some(self.gestures.button_released()),
                };
                if let Some(event) = event {
                    self.post(event);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines_up = match delta {
                    MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
                    MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_LINE,
                };
                if let Some(event) = self.gestures.wheel(lines_up) {
                    self.post(event);
                }
            }
            WindowEvent::Touch(Touch {
                id, phase, location, ..
            }) => {
                let phase = match phase {
                    winit::event::TouchPhase::Started => TouchPhase::Started,
                    winit::event::TouchPhase::Moved => TouchPhase::Moved,
                    winit::event::TouchPhase::Ended => TouchPhase::Ended,
                    winit::event::TouchPhase::Cancelled => TouchPhase::Cancelled,
                };
                for event in self.gestures.touch(*id, phase, screen_point(*location)) {
                    self.post(event);
                }
            }
            _ => {}
        }
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.presenter.resize(width, height)?;
        self.post(ViewportEvent::Resize { width, height });
        Ok(())
    }

    fn redraw(&mut self, window: &Window) -> Result<(), GuiError> {
        let now = Instant::now();
        let params = self.controller.tick(now - self.last_frame);
        self.last_frame = now;

        let raw_input = self.egui_state.take_egui_input(window);
        let state = *self.controller.state();
        let status = self.controller.display_status();
        let mut commands = Vec::new();
        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            commands = show_panel(ctx, &state, &status, &mut self.panel);
        });
        self.egui_state
            .handle_platform_output(window, egui_output.platform_output.clone());

        self.presenter.present(&params, egui_output, &self.egui_ctx)?;

        for command in commands {
            self.controller.apply_command(command);
        }

        Ok(())
    }
}

fn screen_point(position: PhysicalPosition<f64>) -> ScreenPoint {
    ScreenPoint::new(position.x, position.y)
}

/// Opens the explorer window and blocks until it is closed.
pub fn run_gui(options: GuiOptions) -> Result<(), GuiError> {
    let event_loop = EventLoop::new()?;

    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fractal Zoomer")
            .with_inner_size(LogicalSize::new(
                f64::from(options.width.max(200)),
                f64::from(options.height.max(200)),
            ))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let mut app = GuiApp::new(window, &event_loop, &options)?;
    info!("explorer window open");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => {
            let consumed = app.egui_state.on_window_event(window, event).consumed;

            match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::RedrawRequested => {
                    if let Err(error) = app.redraw(window) {
                        error!(%error, "frame failed");
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    if let Err(error) = app.resize(size.width, size.height) {
                        error!(%error, "resize failed");
                        elwt.exit();
                    }
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                }
                _ if !consumed => app.handle_input(event),
                _ => {}
            }
        }
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;

    Ok(())
}
