use std::f32::consts::TAU;

use crate::core::colouring::kinds::PaletteKind;
use crate::core::data::colour::Rgb;

/// Procedural gradient `a + b * cos(2pi * (c * t + d))`, per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosinePalette {
    pub a: [f32; 3],
    pub b: [f32; 3],
    pub c: [f32; 3],
    pub d: [f32; 3],
}

const HALF: [f32; 3] = [0.5, 0.5, 0.5];

impl CosinePalette {
    pub const NEBULA: Self = Self {
        a: HALF,
        b: HALF,
        c: [1.0, 1.0, 1.0],
        d: [0.0, 0.10, 0.20],
    };

    pub const PLASMA: Self = Self {
        a: HALF,
        b: HALF,
        c: [1.0, 1.0, 0.5],
        d: [0.8, 0.9, 0.3],
    };

    pub const INFERNO: Self = Self {
        a: HALF,
        b: HALF,
        c: [1.0, 0.7, 0.4],
        d: [0.0, 0.15, 0.20],
    };

    pub const ARCTIC: Self = Self {
        a: HALF,
        b: HALF,
        c: [2.0, 1.0, 0.0],
        d: [0.5, 0.20, 0.25],
    };

    #[must_use]
    pub const fn for_kind(kind: PaletteKind) -> Self {
        match kind {
            PaletteKind::Nebula => Self::NEBULA,
            PaletteKind::Plasma => Self::PLASMA,
            PaletteKind::Inferno => Self::INFERNO,
            PaletteKind::Arctic => Self::ARCTIC,
        }
    }

    #[must_use]
    pub fn sample(&self, t: f32) -> Rgb {
        let channel = |i: usize| self.a[i] + self.b[i] * (TAU * (self.c[i] * t + self.d[i])).cos();

        Rgb::new(channel(0), channel(1), channel(2))
    }
}

#[must_use]
pub fn palette(t: f32, palette_index: u32) -> Rgb {
    CosinePalette::for_kind(PaletteKind::from_index(palette_index)).sample(t)
}
