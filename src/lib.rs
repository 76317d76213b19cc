//! Real-time Mandelbrot and Julia explorer with smooth colouring and an
//! extended-precision path for deep zooms.

mod adapters;
mod config;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod storage;
mod telemetry;

pub use adapters::share_link::{ShareStateError, from_query, to_query};
pub use config::{ConfigError, EngineConfig};
pub use controllers::cli::{CliArgs, CliError, FrameSize, run as run_cli};
pub use controllers::viewport::{
    AutoZoomDriver, AutoZoomResult, DisplayStatus, EventChannelError, EventReceiver, EventSender,
    GestureTranslator, TouchPhase, ViewportController, event_channel,
};
pub use crate::core::actions::render_frame::{
    FrameShader, RenderFrameError, render_frame, render_frame_rgba, render_frame_serial,
};
pub use crate::core::colouring::{AnimationClock, CosinePalette, IN_SET_COLOUR, PaletteKind, palette, shade};
pub use crate::core::data::colour::{Colour, Rgb};
pub use crate::core::data::complex::{Complex, Complex32};
pub use crate::core::data::double_float::{ComplexDoubleFloat, DoubleFloat, Limb};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::{Point, ScreenPoint};
pub use crate::core::data::shareable_state::ShareableState;
pub use crate::core::fractals::escape_time::{
    ESCAPE_RADIUS_SQUARED, EscapeTimeEvaluator, EvaluatorError, HARD_ITERATION_CAP, SampleResult,
    smooth_iteration,
};
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::core::viewport::{
    AutoZoomLimits, FractalCommand, FractalState, FrameParams, GestureMode, InteractionState,
    PrecisionMode, TouchPoints, VIEW_SPAN, Velocity, ViewState, ViewportEvent, ViewportLimits,
    depth_label, iteration_budget, normalized_offset, pixel_centre, pixel_uv, precision_for,
    screen_to_world,
};
pub use storage::write_ppm::{WritePpmError, encode_ppm, write_ppm};
pub use telemetry::{InitError, init_tracing};

#[cfg(feature = "gui")]
pub use input::gui::{GuiError, GuiOptions, run_gui};
