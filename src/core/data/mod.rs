pub mod colour;
pub mod complex;
pub mod double_float;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod shareable_state;
