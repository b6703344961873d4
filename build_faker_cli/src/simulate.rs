use anyhow::{Context, Result};
use build_faker::{maybe_spoof_build, BuildInfo, BuildStore, FakerConfig, PropStore};
use std::fs;
use std::path::Path;

// 支持 TOML 配置和 system.prop 两种输入
fn load_config(path: &str) -> Result<FakerConfig> {
    if Path::new(path).extension().is_some_and(|ext| ext == "toml") {
        let content =
            fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
        FakerConfig::from_toml(&content)
    } else {
        Ok(FakerConfig::from_props(&PropStore::load(path)?))
    }
}

fn print_build(info: &BuildInfo) {
    println!("  BRAND        = {}", info.brand);
    println!("  DEVICE       = {}", info.device);
    println!("  FINGERPRINT  = {}", info.fingerprint);
    println!("  MANUFACTURER = {}", info.manufacturer);
    println!("  MODEL        = {}", info.model);
    println!("  PRODUCT      = {}", info.product);
}

pub fn show(config_path: &str) -> Result<()> {
    let config = load_config(config_path)?;
    println!("Build identity:");
    print_build(&config.build);
    println!("Spoof policy:");
    println!("  needs_model_edit  = {}", config.spoof.needs_model_edit);
    println!("  stock_fingerprint = {}", config.spoof.stock_fingerprint);
    Ok(())
}

pub fn run(config_path: &str, package: &str) -> Result<()> {
    let config = load_config(config_path)?;
    let store = BuildStore::new(config.build.clone());
    maybe_spoof_build(&store, &config.spoof, package);
    let after = store.snapshot();

    let diffs = field_diffs(&config.build, &after);
    if diffs.is_empty() {
        println!("{package}: no override");
    } else {
        println!("{package}:");
        for (key, before, now) in diffs {
            println!("  {key}: {before} -> {now}");
        }
    }
    Ok(())
}

fn field_diffs(before: &BuildInfo, after: &BuildInfo) -> Vec<(&'static str, String, String)> {
    [
        ("BRAND", &before.brand, &after.brand),
        ("DEVICE", &before.device, &after.device),
        ("FINGERPRINT", &before.fingerprint, &after.fingerprint),
        ("MANUFACTURER", &before.manufacturer, &after.manufacturer),
        ("MODEL", &before.model, &after.model),
        ("PRODUCT", &before.product, &after.product),
    ]
    .into_iter()
    .filter(|(_, b, a)| b != a)
    .map(|(key, b, a)| (key, b.clone(), a.clone()))
    .collect()
}
