pub mod animation;
pub mod kinds;
pub mod palette;
pub mod shading;

pub use animation::AnimationClock;
pub use kinds::PaletteKind;
pub use palette::{CosinePalette, palette};
pub use shading::{IN_SET_COLOUR, fract, normalize, shade};
