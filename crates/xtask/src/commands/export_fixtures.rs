//! Export the built-in sample bundles.

use std::path::PathBuf;

use anyhow::{Context, Result};
use calc_content::write_bundle;
use calc_core::{CalcConfig, fixtures};
use clap::Parser;
use console::style;

/// Write the built-in sample bundles to a directory
#[derive(Parser, Debug)]
pub struct ExportFixtures {
    /// Output directory (created if missing)
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    out: PathBuf,

    /// Bundle format
    #[arg(short, long, value_enum, default_value = "json")]
    format: Format,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Format {
    Json,
    Ron,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Ron => "ron",
        }
    }
}

impl ExportFixtures {
    pub fn execute(self) -> Result<()> {
        std::fs::create_dir_all(&self.out)
            .with_context(|| format!("Failed to create {}", self.out.display()))?;

        let extension = self.format.extension();
        let weapons = self.out.join(format!("weapons.{extension}"));
        let aow = self.out.join(format!("aow.{extension}"));
        let config = self.out.join("config.toml");

        write_bundle(&weapons, &fixtures::weapon_data())?;
        write_bundle(&aow, &fixtures::aow_data())?;
        let rendered =
            toml::to_string_pretty(&CalcConfig::default()).context("Failed to render config")?;
        std::fs::write(&config, rendered)
            .with_context(|| format!("Failed to write {}", config.display()))?;

        for path in [weapons, aow, config] {
            println!("{} {}", style("wrote").green().bold(), path.display());
        }
        Ok(())
    }
}
