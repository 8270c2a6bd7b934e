use std::path::PathBuf;

use color_eyre::eyre::eyre;
use watch_etl_config::Config;

use crate::output::Output;

/// Print the configuration the process command would run with.
pub fn run_config(config_path: Option<PathBuf>, output: &Output) -> color_eyre::Result<()> {
    let config = Config::load(config_path.as_deref()).map_err(|err| eyre!("{err:#}"))?;
    let rendered = toml::to_string_pretty(&config).map_err(|err| eyre!("{err}"))?;
    output.info(rendered.trim_end());

    Ok(())
}
