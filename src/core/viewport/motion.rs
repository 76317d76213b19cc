use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::viewport::interaction::{InteractionState, Velocity};
use crate::core::viewport::limits::ViewportLimits;
use crate::core::viewport::mapping::VIEW_SPAN;
use crate::core::viewport::state::ViewState;

/// Exponential easing weight for one frame; stalls snap instead of overshooting.
#[must_use]
pub fn lerp_factor(dt_ms: f64, limits: &ViewportLimits) -> f64 {
    if !dt_ms.is_finite() || dt_ms <= 0.0 {
        return 0.0;
    }

    (dt_ms * limits.lerp_rate_per_ms).min(1.0)
}

fn ease(current: f64, target: f64, factor: f64) -> f64 {
    if factor >= 1.0 {
        target
    } else {
        current + (target - current) * factor
    }
}

/// Moves the target centre so the content follows a pointer displacement of `(dx, dy)` pixels.
#[must_use]
pub fn pan_by_pixels(view: ViewState, dx: f64, dy: f64, viewport: PixelRect) -> ViewState {
    if !dx.is_finite() || !dy.is_finite() {
        return view;
    }

    let scale = VIEW_SPAN / (f64::from(viewport.height()) * view.target_zoom);
    let target_center = view.target_center - Complex::new(dx, -dy).scale(scale);

    if !target_center.is_finite() {
        return view;
    }

    ViewState {
        target_center,
        ..view
    }
}

/// Multiplies the target zoom by `factor` while keeping the world point at
/// normalized offset `anchor` fixed.
#[must_use]
pub fn zoom_at(view: ViewState, anchor: Complex, factor: f64, limits: &ViewportLimits) -> ViewState {
    if !factor.is_finite() || factor <= 0.0 || !anchor.is_finite() {
        return view;
    }

    let world = view.target_center + anchor.scale(view.target_zoom.recip());
    let target_zoom = limits.clamp_zoom(view.target_zoom * factor);
    let target_center = world - anchor.scale(target_zoom.recip());

    ViewState {
        target_center,
        target_zoom,
        ..view
    }
}

/// One frame of camera motion: inertial coasting while idle, then easing of
/// the current view toward its target.
#[must_use]
pub fn advance(
    view: ViewState,
    interaction: InteractionState,
    dt_ms: f64,
    viewport: PixelRect,
    limits: &ViewportLimits,
) -> (ViewState, InteractionState) {
    let mut view = view;
    let mut interaction = interaction;

    if interaction.is_idle() {
        if interaction.velocity.magnitude() > limits.inertia_threshold {
            let velocity = interaction.velocity;
            view = pan_by_pixels(view, velocity.x, velocity.y, viewport);

            interaction.velocity = velocity.scale(limits.inertia_decay);
        }

        if interaction.velocity.magnitude() <= limits.inertia_threshold {
            interaction.velocity = Velocity::ZERO;
        }
    }

    let factor = lerp_factor(dt_ms, limits);
    view.center = Complex::new(
        ease(view.center.real, view.target_center.real, factor),
        ease(view.center.imag, view.target_center.imag, factor),
    );
    view.zoom = ease(view.zoom, view.target_zoom, factor);

    (view, interaction)
}
