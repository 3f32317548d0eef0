use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::cli::Args;

// settings that rarely change between invocations and therefore live in an
// optional file instead of being passed on every call
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    pub output: PathBuf,
    pub dpi: u32,
    pub width_inches: f64,
    pub height_inches: f64,
    pub show: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("bench.png"),
            dpi: 150,
            width_inches: 6.4,
            height_inches: 4.8,
            show: true,
        }
    }
}

impl PlotConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;

        toml::from_str(&config_str)
            .with_context(|| format!("could not parse config file {}", path.display()))
    }

    /// Defaults, overridden by the config file, overridden by the command line.
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(output) = &args.output {
            config.output = output.clone();
        }

        if args.no_show {
            config.show = false;
        }

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            bail!("dpi must be positive");
        }

        for (name, inches) in [
            ("width_inches", self.width_inches),
            ("height_inches", self.height_inches),
        ] {
            if !inches.is_finite() || inches <= 0.0 {
                bail!("{name} must be a positive number, got {inches}");
            }
        }

        let (width, height) = self.pixel_size();
        if width == 0 || height == 0 {
            bail!("figure of {width}x{height} pixels is too small to draw");
        }

        // the interactive page is written next to the image
        if self.output == self.html_output() {
            bail!(
                "output {} would be overwritten by the interactive page",
                self.output.display()
            );
        }

        Ok(())
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.width_inches * dpi).round() as u32,
            (self.height_inches * dpi).round() as u32,
        )
    }

    pub fn html_output(&self) -> PathBuf {
        self.output.with_extension("html")
    }
}
