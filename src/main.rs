use clap::Parser;
use fractal_zoomer::{CliArgs, init_tracing, run_cli};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let args = CliArgs::parse();
    let written = run_cli(&args)?;
    println!("{}", written.display());

    Ok(())
}
