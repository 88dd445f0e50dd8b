//! `eduinsight config` – show where the config lives and what it holds.

use anyhow::Result;
use eduinsight_core::config;
use std::process::ExitCode;

pub fn run_config() -> Result<ExitCode> {
    let path = config::config_path()?;
    let cfg = config::load_or_init()?;
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(&cfg)?);
    Ok(ExitCode::SUCCESS)
}
