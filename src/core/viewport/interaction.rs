use crate::core::data::point::ScreenPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureMode {
    #[default]
    Idle,
    Dragging,
    Pinching,
}

/// Pointer displacement in pixels per event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Velocity {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    pub mode: GestureMode,
    pub last_pointer: Option<ScreenPoint>,
    pub velocity: Velocity,
    pub last_pinch_distance: Option<f64>,
}

impl InteractionState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.mode == GestureMode::Dragging
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.mode == GestureMode::Pinching
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.mode == GestureMode::Idle
    }

    /// Returns to idle, keeping `velocity` so the camera can coast.
    pub fn release(&mut self) {
        self.mode = GestureMode::Idle;
        self.last_pointer = None;
        self.last_pinch_distance = None;
    }
}
