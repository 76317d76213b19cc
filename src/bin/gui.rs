use clap::Parser;
use fractal_zoomer::{CliArgs, EngineConfig, GuiOptions, from_query, init_tracing, run_gui};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let shared = args.query.as_deref().map(from_query).transpose()?;

    run_gui(GuiOptions {
        config,
        shared,
        width: args.size.width,
        height: args.size.height,
    })?;

    Ok(())
}
