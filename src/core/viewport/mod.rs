//! Camera model: gesture events, easing and inertia, and the depth policies
//! that decide precision and iteration budget for each frame.

pub mod events;
pub mod frame;
pub mod interaction;
pub mod limits;
pub mod mapping;
pub mod motion;
pub mod policy;
pub mod state;

pub use events::{FractalCommand, TouchPoints, ViewportEvent};
pub use frame::FrameParams;
pub use interaction::{GestureMode, InteractionState, Velocity};
pub use limits::{AutoZoomLimits, ViewportLimits};
pub use mapping::{VIEW_SPAN, normalized_offset, pixel_centre, pixel_uv, screen_to_world};
pub use motion::{advance, lerp_factor, pan_by_pixels, zoom_at};
pub use policy::{PrecisionMode, depth_label, iteration_budget, precision_for};
pub use state::{FractalState, ViewState};
