use std::time::Duration;

use crate::core::colouring::shading::fract;

/// Palette cycles per second of wall time.
pub const PALETTE_CYCLE_RATE: f64 = 0.02;

/// Turns elapsed wall time into the palette rotation phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClock {
    rate: f64,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self { rate: PALETTE_CYCLE_RATE }
    }
}

impl AnimationClock {
    #[must_use]
    pub fn phase(&self, elapsed: Duration) -> f32 {
        // Wrap before narrowing to f32.
        let cycles = elapsed.as_secs_f64() * self.rate;
        fract((cycles - cycles.floor()) as f32)
    }
}
