use tracing::info;

use crate::channel::Channel;
use crate::cli::Args;
use crate::config::AppConfig;
use crate::error::GaitError;
use crate::plot::render_channel_plots;
use crate::report::write_report;
use crate::trial::catalog::TrialCatalog;
use crate::trial::code::TrialCode;
use crate::trial::metadata::TrialMetadata;
use crate::trial::signal::Signal;

/// Run one invocation: validate, load, report, plot.
///
/// Channel names are resolved first so a bad token aborts before any file is
/// opened or written, the config default write-back included.
pub fn run(args: &Args) -> Result<(), GaitError> {
    let channels = Channel::parse_list(&args.channels)?;

    let config = AppConfig::load_or_default(&args.config);

    let code = TrialCode::new(args.subject, args.trial);
    let catalog = TrialCatalog::scan(&config.data.folder)?;
    catalog.require(&code)?;

    let metadata = TrialMetadata::load(&catalog.metadata_path(&code))?;
    let signal = Signal::load(&catalog.signal_path(&code))?;
    info!(%code, samples = signal.n_samples(), "loaded trial");

    write_report(&config.report.path, &metadata, &signal)?;
    info!(path = %config.report.path.display(), "wrote trial report");

    let written = render_channel_plots(
        &config.plot.out_dir,
        &signal,
        &metadata,
        &channels,
        &config.plot,
    )?;
    info!(plots = written.len(), "done");

    Ok(())
}
