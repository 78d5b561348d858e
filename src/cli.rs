use clap::Parser;

/// Display information and time series for a given gait trial.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// The subject identifier
    #[arg(long)]
    pub subject: u32,

    /// The trial identifier
    #[arg(long)]
    pub trial: u32,

    /// Comma-separated channel names to plot
    #[arg(long, default_value = "RAV,RAZ,RRY,LAV,LAZ,LRY")]
    pub channels: String,

    /// Path to config TOML
    #[arg(long, default_value = "gaitview.toml")]
    pub config: String,

    /// Enable debug-level logging
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}
