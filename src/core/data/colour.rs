/// 8-bit RGB output colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Linear RGB in `[0, 1]` (values may stray outside before the final clamp).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }

    #[must_use]
    pub fn to_colour(self) -> Colour {
        Colour {
            r: channel_to_u8(self.r),
            g: channel_to_u8(self.g),
            b: channel_to_u8(self.b),
        }
    }
}

fn channel_to_u8(value: f32) -> u8 {
    if !value.is_finite() {
        return 0;
    }

    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_colour_scales_unit_range() {
        let colour = Rgb::new(0.0, 0.5, 1.0).to_colour();

        assert_eq!(colour, Colour { r: 0, g: 128, b: 255 });
    }

    #[test]
    fn to_colour_clamps_out_of_range_channels() {
        let colour = Rgb::new(-0.5, 1.7, 0.25).to_colour();

        assert_eq!(colour.r, 0);
        assert_eq!(colour.g, 255);
        assert_eq!(colour.b, 64);
    }

    #[test]
    fn to_colour_maps_nan_to_black() {
        let colour = Rgb::new(f32::NAN, f32::INFINITY, 0.0).to_colour();

        assert_eq!(colour, Colour::default());
    }

    #[test]
    fn map_applies_to_every_channel() {
        let doubled = Rgb::new(0.1, 0.2, 0.3).map(|c| c * 2.0);

        assert!((doubled.r - 0.2).abs() < 1e-6);
        assert!((doubled.g - 0.4).abs() < 1e-6);
        assert!((doubled.b - 0.6).abs() < 1e-6);
    }
}
