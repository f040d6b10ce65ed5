//! Arguments shared by several commands.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use calc_content::ContentFactory;
use calc_core::{DamageType, PlayerStats, PrecomputedAowData, PrecomputedData};
use clap::Args;
use console::style;
use tracing::debug;

/// Where the data bundles live.
#[derive(Args, Debug)]
pub struct DataArgs {
    /// Directory holding weapons.{json,ron}, aow.{json,ron} and config.toml
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,
}

impl DataArgs {
    pub fn factory(&self) -> ContentFactory {
        debug!(dir = %self.data_dir.display(), "using data directory");
        ContentFactory::new(&self.data_dir)
    }

    pub fn weapons(&self) -> Result<PrecomputedData> {
        let (data, findings) = self.factory().load_weapons()?;
        warn_findings(findings.len());
        Ok(data)
    }

    pub fn aow(&self) -> Result<PrecomputedAowData> {
        let (data, findings) = self.factory().load_aow()?;
        warn_findings(findings.len());
        Ok(data)
    }
}

fn warn_findings(count: usize) {
    if count > 0 {
        eprintln!(
            "{} {} dangling reference(s) in bundle; run `cargo xtask validate` for details",
            style("!").yellow().bold(),
            count
        );
    }
}

/// Character attributes.
#[derive(Args, Debug, Clone, Copy)]
pub struct StatArgs {
    #[arg(long = "str", default_value_t = 10)]
    pub strength: i32,
    #[arg(long = "dex", default_value_t = 10)]
    pub dexterity: i32,
    #[arg(long = "int", default_value_t = 10)]
    pub intelligence: i32,
    #[arg(long = "fai", default_value_t = 10)]
    pub faith: i32,
    #[arg(long = "arc", default_value_t = 10)]
    pub arcane: i32,
}

impl StatArgs {
    pub fn stats(&self) -> PlayerStats {
        PlayerStats::new(
            self.strength,
            self.dexterity,
            self.intelligence,
            self.faith,
            self.arcane,
        )
    }
}

/// Parse `TYPE=VALUE`, e.g. `physical=327`.
pub fn parse_typed_value(raw: &str) -> Result<(DamageType, f64)> {
    let (kind, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected TYPE=VALUE, got `{raw}`"))?;
    let kind: DamageType = kind
        .trim()
        .parse()
        .with_context(|| format!("unknown damage type `{kind}`"))?;
    let value: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("invalid number `{value}`"))?;
    Ok((kind, value))
}

/// Print a value as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
    println!("{json}");
    Ok(())
}

/// `label: value` row.
pub fn row(label: &str, value: impl std::fmt::Display) {
    println!("  {:<18} {}", style(label).cyan(), value);
}

pub fn heading(text: &str) {
    println!("{}", style(text).bold().green());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_values() {
        assert_eq!(
            parse_typed_value("physical=327").unwrap(),
            (DamageType::Physical, 327.0)
        );
        assert_eq!(parse_typed_value("Fire = -20").unwrap(), (DamageType::Fire, -20.0));
        assert!(parse_typed_value("physical").is_err());
        assert!(parse_typed_value("frost=3").is_err());
    }
}
