use anyhow::{Context, Result};
use build_faker::{FakerConfig, PropStore};
use log::info;
use std::fs;

pub fn run(input: &str, output: &str) -> Result<()> {
    let props = PropStore::load(input)?;
    let config = FakerConfig::from_props(&props);
    let toml = config.to_toml()?;
    fs::write(output, toml).with_context(|| format!("failed to write {output}"))?;
    info!("Converted {} properties from {} to {}", props.len(), input, output);
    Ok(())
}
