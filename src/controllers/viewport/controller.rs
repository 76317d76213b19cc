use std::time::Duration;

use tracing::{debug, info, warn};

use crate::controllers::viewport::auto_zoom::AutoZoomDriver;
use crate::controllers::viewport::channel::{EventReceiver, EventSender, event_channel};
use crate::core::colouring::animation::AnimationClock;
use crate::core::colouring::kinds::PaletteKind;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::ScreenPoint;
use crate::core::data::shareable_state::ShareableState;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::viewport::events::{FractalCommand, TouchPoints, ViewportEvent};
use crate::core::viewport::frame::FrameParams;
use crate::core::viewport::interaction::{GestureMode, InteractionState, Velocity};
use crate::core::viewport::limits::{AutoZoomLimits, ViewportLimits};
use crate::core::viewport::mapping::normalized_offset;
use crate::core::viewport::motion::{advance, pan_by_pixels, zoom_at};
use crate::core::viewport::policy::{PrecisionMode, depth_label, iteration_budget, precision_for};
use crate::core::viewport::state::{
    FractalState, MAX_ANIMATION_SPEED, MIN_ANIMATION_SPEED, ViewState,
};

const FPS_SMOOTHING: f64 = 0.1;

/// Values the UI shows alongside the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayStatus {
    pub center: Complex,
    pub zoom: f64,
    pub max_iterations: u32,
    pub precision: PrecisionMode,
    pub fps: f64,
    pub depth_label: String,
}

/// Owns the camera and gesture state and produces one [`FrameParams`] per tick.
pub struct ViewportController {
    state: FractalState,
    view: ViewState,
    interaction: InteractionState,
    viewport: PixelRect,
    limits: ViewportLimits,
    auto_zoom: AutoZoomDriver,
    clock: AnimationClock,
    elapsed: Duration,
    fps: f64,
    precision: PrecisionMode,
    receiver: Option<EventReceiver>,
}

impl ViewportController {
    #[must_use]
    pub fn new(viewport: PixelRect, limits: ViewportLimits, auto_zoom_limits: AutoZoomLimits) -> Self {
        let state = FractalState::default();
        let limits = limits.validate().map_or_else(
            |error| {
                warn!(%error, "viewport limits rejected, using defaults");
                ViewportLimits::default()
            },
            |()| limits,
        );
        let auto_zoom_limits = auto_zoom_limits.validate().map_or_else(
            |error| {
                warn!(%error, "auto-zoom limits rejected, using defaults");
                AutoZoomLimits::default()
            },
            |()| auto_zoom_limits,
        );

        Self {
            state,
            view: ViewState::at(state.center, state.zoom),
            interaction: InteractionState::default(),
            viewport,
            limits,
            auto_zoom: AutoZoomDriver::new(auto_zoom_limits),
            clock: AnimationClock::default(),
            elapsed: Duration::ZERO,
            fps: 0.0,
            precision: precision_for(state.zoom, &limits),
            receiver: None,
        }
    }

    #[must_use]
    pub fn with_defaults(viewport: PixelRect) -> Self {
        Self::new(viewport, ViewportLimits::default(), AutoZoomLimits::default())
    }

    /// Opens the gesture hand-off; events sent on the returned sender are
    /// applied at the start of the next [`tick`](Self::tick).
    pub fn connect(&mut self) -> EventSender {
        let (sender, receiver) = event_channel();
        self.receiver = Some(receiver);
        sender
    }

    #[must_use]
    pub fn state(&self) -> &FractalState {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    #[must_use]
    pub fn viewport(&self) -> PixelRect {
        self.viewport
    }

    #[must_use]
    pub fn shareable_state(&self) -> ShareableState {
        ShareableState::from_state(&self.state)
    }

    #[must_use]
    pub fn display_status(&self) -> DisplayStatus {
        DisplayStatus {
            center: self.state.center,
            zoom: self.state.zoom,
            max_iterations: self.state.max_iterations,
            precision: self.precision,
            fps: self.fps,
            depth_label: depth_label(self.view.zoom),
        }
    }

    pub fn handle_event(&mut self, event: ViewportEvent) {
        match event {
            ViewportEvent::WheelZoom { position, delta_y } => self.wheel_zoom(position, delta_y),
            ViewportEvent::PointerDown { position } => self.begin_drag(position),
            ViewportEvent::PointerMove { position } => self.drag_to(position),
            ViewportEvent::PointerUp => self.end_drag(),
            ViewportEvent::TouchStart { touches } => match touches {
                TouchPoints::One(position) => self.begin_drag(position),
                TouchPoints::Two(a, b) => self.begin_pinch(a, b),
            },
            ViewportEvent::TouchMove { touches } => match touches {
                TouchPoints::One(position) => self.drag_to(position),
                TouchPoints::Two(a, b) => self.pinch_to(a, b),
            },
            ViewportEvent::TouchEnd => {
                if self.interaction.is_pinching() {
                    self.interaction.velocity = Velocity::ZERO;
                }
                self.interaction.release();
            }
            ViewportEvent::Resize { width, height } => match PixelRect::new(width, height) {
                Ok(viewport) => self.viewport = viewport,
                Err(error) => warn!(%error, "ignoring resize"),
            },
        }
    }

    pub fn apply_command(&mut self, command: FractalCommand) {
        match command {
            FractalCommand::ResetView => {
                let defaults = FractalState::default();
                self.state.center = defaults.center;
                self.state.zoom = defaults.zoom;
                self.state.max_iterations = defaults.max_iterations;
                self.state.colour_palette = defaults.colour_palette;
                self.state.is_julia = defaults.is_julia;
                self.state.julia_c = defaults.julia_c;
                self.view = ViewState::at(defaults.center, defaults.zoom);
                self.interaction = InteractionState::default();
                info!("view reset");
            }
            FractalCommand::ToggleJulia => self.state.is_julia = !self.state.is_julia,
            FractalCommand::SetJulia(is_julia) => self.state.is_julia = is_julia,
            FractalCommand::SetJuliaConstant(julia_c) => {
                if julia_c.is_finite() {
                    self.state.julia_c = julia_c;
                } else {
                    warn!(?julia_c, "rejecting non-finite julia constant");
                }
            }
            FractalCommand::SetMaxIterations(max_iterations) => {
                self.state.max_iterations = self.clamp_iterations(max_iterations);
            }
            FractalCommand::SetPalette(index) => {
                self.state.colour_palette = PaletteKind::from_index(index).index();
            }
            FractalCommand::SetAutoZoom(enabled) => {
                if enabled && !self.state.auto_zoom {
                    self.auto_zoom.reset();
                }
                self.state.auto_zoom = enabled;
            }
            FractalCommand::SetAnimationSpeed(speed) => {
                self.state.animation_speed = speed.clamp(MIN_ANIMATION_SPEED, MAX_ANIMATION_SPEED);
            }
            FractalCommand::ApplyShared(shared) => self.apply_shared(shared),
        }
    }

    /// Advances one frame: drains queued gestures, runs auto-zoom, eases the
    /// camera and resolves precision and budget for the sampler.
    pub fn tick(&mut self, dt: Duration) -> FrameParams {
        let pending: Vec<ViewportEvent> = match &self.receiver {
            Some(receiver) => receiver.drain().collect(),
            None => Vec::new(),
        };
        for event in pending {
            self.handle_event(event);
        }

        if self.state.auto_zoom {
            let result = self.auto_zoom.advance(
                dt,
                self.state.animation_speed,
                self.view.target_zoom,
                &self.limits,
            );
            if result.state_changed {
                self.view.target_zoom = result.target_zoom;
                self.on_zoom_changed();
            }
        }

        let dt_ms = dt.as_secs_f64() * 1000.0;
        (self.view, self.interaction) =
            advance(self.view, self.interaction, dt_ms, self.viewport, &self.limits);
        self.state.center = self.view.target_center;

        let precision = precision_for(self.view.zoom, &self.limits);
        if precision != self.precision {
            debug!(zoom = self.view.zoom, %precision, "precision mode switched");
            self.precision = precision;
        }

        self.update_fps(dt);
        self.elapsed += dt;

        self.frame_params()
    }

    #[must_use]
    pub fn frame_params(&self) -> FrameParams {
        FrameParams {
            pixel_rect: self.viewport,
            center: self.view.center,
            zoom: self.view.zoom,
            precision: self.precision,
            max_iterations: self.state.max_iterations,
            palette: PaletteKind::from_index(self.state.colour_palette),
            kind: FractalKind::from_julia_flag(self.state.is_julia),
            julia_c: self.state.julia_c,
            time_phase: self.clock.phase(self.elapsed),
        }
    }

    fn wheel_zoom(&mut self, position: ScreenPoint, delta_y: f64) {
        if !position.is_finite() || !delta_y.is_finite() {
            warn!(?position, delta_y, "ignoring non-finite wheel event");
            return;
        }

        let factor = if delta_y < 0.0 {
            self.limits.zoom_in_factor
        } else if delta_y > 0.0 {
            self.limits.zoom_out_factor
        } else {
            return;
        };

        self.zoom_around(position, factor);
    }

    fn zoom_around(&mut self, position: ScreenPoint, factor: f64) {
        let anchor = normalized_offset(position, self.viewport);
        self.view = zoom_at(self.view, anchor, factor, &self.limits);
        self.on_zoom_changed();
    }

    fn begin_drag(&mut self, position: ScreenPoint) {
        self.interaction = InteractionState {
            mode: GestureMode::Dragging,
            last_pointer: position.is_finite().then_some(position),
            velocity: Velocity::ZERO,
            last_pinch_distance: None,
        };
    }

    fn drag_to(&mut self, position: ScreenPoint) {
        if !self.interaction.is_dragging() || !position.is_finite() {
            return;
        }

        if let Some(last) = self.interaction.last_pointer {
            let dx = position.x - last.x;
            let dy = position.y - last.y;
            self.view = pan_by_pixels(self.view, dx, dy, self.viewport);
            self.state.center = self.view.target_center;
            self.interaction.velocity = Velocity { x: dx, y: dy };
        }

        self.interaction.last_pointer = Some(position);
    }

    fn end_drag(&mut self) {
        if self.interaction.is_dragging() {
            self.interaction.release();
        }
    }

    fn begin_pinch(&mut self, a: ScreenPoint, b: ScreenPoint) {
        let distance = a.distance_to(b);

        self.interaction = InteractionState {
            mode: GestureMode::Pinching,
            last_pointer: None,
            velocity: Velocity::ZERO,
            last_pinch_distance: (distance.is_finite() && distance > 0.0).then_some(distance),
        };
    }

    fn pinch_to(&mut self, a: ScreenPoint, b: ScreenPoint) {
        if !self.interaction.is_pinching() {
            self.begin_pinch(a, b);
            return;
        }

        let distance = a.distance_to(b);
        if !distance.is_finite() || distance <= 0.0 {
            return;
        }

        if let Some(last_distance) = self.interaction.last_pinch_distance {
            self.zoom_around(a.midpoint(b), distance / last_distance);
        }

        self.interaction.last_pinch_distance = Some(distance);
    }

    fn apply_shared(&mut self, shared: ShareableState) {
        let mut next = shared.apply_to(self.state);

        if !next.center.is_finite() {
            warn!(x = shared.x, y = shared.y, "rejecting non-finite shared center");
            next.center = self.state.center;
        }
        if !next.zoom.is_finite() || next.zoom <= 0.0 {
            warn!(zoom = shared.zoom, "rejecting invalid shared zoom");
            next.zoom = self.state.zoom;
        }
        if !next.julia_c.is_finite() {
            warn!(jx = shared.jx, jy = shared.jy, "rejecting non-finite shared julia constant");
            next.julia_c = self.state.julia_c;
        }
        next.zoom = self.limits.clamp_zoom(next.zoom);
        next.max_iterations = self.clamp_iterations(next.max_iterations);
        next.colour_palette = PaletteKind::from_index(next.colour_palette).index();

        self.state = next;
        self.view = ViewState::at(next.center, next.zoom);
        self.interaction = InteractionState::default();
        self.precision = precision_for(next.zoom, &self.limits);

        info!(
            x = next.center.real,
            y = next.center.imag,
            zoom = next.zoom,
            iterations = next.max_iterations,
            "applied shared state"
        );
    }

    fn on_zoom_changed(&mut self) {
        self.state.center = self.view.target_center;
        self.state.zoom = self.view.target_zoom;
        self.state.max_iterations = iteration_budget(self.view.target_zoom, &self.limits);
    }

    fn clamp_iterations(&self, max_iterations: u32) -> u32 {
        max_iterations.clamp(1, self.limits.max_iterations.max(1))
    }

    fn update_fps(&mut self, dt: Duration) {
        let seconds = dt.as_secs_f64();
        if seconds <= 0.0 {
            return;
        }

        let instantaneous = seconds.recip();
        self.fps = if self.fps == 0.0 {
            instantaneous
        } else {
            self.fps + (instantaneous - self.fps) * FPS_SMOOTHING
        };
    }
}
