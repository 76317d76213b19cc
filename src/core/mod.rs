pub mod actions;
pub mod colouring;
pub mod data;
pub mod fractals;
pub mod viewport;
