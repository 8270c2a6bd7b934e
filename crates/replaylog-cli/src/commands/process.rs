use std::path::PathBuf;

use color_eyre::eyre::eyre;
use tracing::debug;
use watch_etl_config::Config;
use watch_etl_core::run_pipeline;

use crate::output::Output;

pub fn run_process(
    input_dir: PathBuf,
    output_file: Option<PathBuf>,
    config_path: Option<PathBuf>,
    output: &Output,
) -> color_eyre::Result<()> {
    debug!(
        input_dir = %input_dir.display(),
        config = ?config_path,
        "starting process run"
    );

    let mut config = Config::load(config_path.as_deref()).map_err(|err| eyre!("{err:#}"))?;
    if let Some(path) = output_file {
        config.output.path = path;
    }

    let report = run_pipeline(&config, &input_dir).map_err(|err| eyre!("{err:#}"))?;
    output.report(&report);

    Ok(())
}
