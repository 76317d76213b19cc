pub mod cli;
pub mod viewport;
