use clap::Parser;
use tracing_subscriber::EnvFilter;

use gaitview::app;
use gaitview::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    app::run(&args)?;
    Ok(())
}
