use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;
use tracing::info;

use crate::adapters::share_link::{ShareStateError, from_query};
use crate::config::{ConfigError, EngineConfig};
use crate::controllers::viewport::controller::ViewportController;
use crate::core::actions::render_frame::{RenderFrameError, render_frame};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::viewport::events::FractalCommand;
use crate::storage::write_ppm::{WritePpmError, write_ppm};

const DEFAULT_OUTPUT: &str = "output/fractal.ppm";
const DEFAULT_SIZE: FrameSize = FrameSize {
    width: 800,
    height: 600,
};
const SETTLE_FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    PixelRect(#[from] PixelRectError),
    #[error(transparent)]
    Share(#[from] ShareStateError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RenderFrameError),
    #[error(transparent)]
    Write(#[from] WritePpmError),
}

/// Output dimensions given on the command line as `WIDTHxHEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for FrameSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

fn parse_size(size: &str) -> Result<FrameSize, String> {
    let invalid = || format!("invalid size '{size}', expected WIDTHxHEIGHT");
    let (width, height) = size.split_once(['x', 'X']).ok_or_else(invalid)?;

    Ok(FrameSize {
        width: width.trim().parse().map_err(|_| invalid())?,
        height: height.trim().parse().map_err(|_| invalid())?,
    })
}

/// Renders a Mandelbrot or Julia frame from a share link.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "fractal_zoomer", version)]
pub struct CliArgs {
    /// Share-link query such as `x=-0.75&y=0.1&zoom=40`.
    #[arg(long)]
    pub query: Option<String>,
    /// JSON file with engine tunables.
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, value_parser = parse_size, default_value_t = DEFAULT_SIZE)]
    pub size: FrameSize,
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
    /// Simulated time to let the camera ease before rendering.
    #[arg(long, default_value_t = 0)]
    pub settle_ms: u64,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            query: None,
            config: None,
            size: DEFAULT_SIZE,
            output: PathBuf::from(DEFAULT_OUTPUT),
            settle_ms: 0,
        }
    }
}

/// Renders one still frame and returns the path it was written to.
pub fn run(args: &CliArgs) -> Result<PathBuf, CliError> {
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let pixel_rect = PixelRect::new(args.size.width, args.size.height)?;
    let mut controller = ViewportController::new(pixel_rect, config.viewport, config.auto_zoom);

    if let Some(query) = &args.query {
        controller.apply_command(FractalCommand::ApplyShared(from_query(query)?));
    }

    let mut params = controller.tick(SETTLE_FRAME);
    let mut settled = SETTLE_FRAME;
    while settled < Duration::from_millis(args.settle_ms) {
        params = controller.tick(SETTLE_FRAME);
        settled += SETTLE_FRAME;
    }

    let status = controller.display_status();
    info!(
        x = status.center.real,
        y = status.center.imag,
        depth = %status.depth_label,
        iterations = status.max_iterations,
        precision = %status.precision,
        "rendering still frame"
    );

    let buffer = render_frame(&params)?;
    write_ppm(&buffer, &args.output)?;

    Ok(args.output.clone())
}
