pub mod frame_shader;
pub mod render_frame;

pub use frame_shader::FrameShader;
pub use render_frame::{RenderFrameError, render_frame, render_frame_rgba, render_frame_serial};
