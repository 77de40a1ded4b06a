pub mod toml_config;

use crate::app::progress::{SELECT_SKIP_STEP, WIZARD_STEPS};
use crate::app::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};

#[cfg(feature = "cli")]
use crate::adapters::http::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_POSTCODE: &str = "LE10";
pub const DEFAULT_AREA: &str = "Hinckley";

/// How the page is rendered, independent of where the data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub format: OutputFormat,
    pub current_step: u32,
    pub total_steps: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            current_step: SELECT_SKIP_STEP,
            total_steps: WIZARD_STEPS.len() as u32,
        }
    }
}

impl Validate for DisplaySettings {
    fn validate(&self) -> Result<()> {
        validate_range("total_steps", self.total_steps, 1, WIZARD_STEPS.len() as u32)?;
        validate_range("current_step", self.current_step, 1, self.total_steps)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "skip-picker")]
#[command(about = "Choose a skip size for your waste collection")]
pub struct CliConfig {
    /// Path to a TOML configuration file; replaces the source and location flags
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value = DEFAULT_POSTCODE)]
    pub postcode: String,

    #[arg(long, default_value = DEFAULT_AREA)]
    pub area: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout: u64,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Skip ids to toggle, in order; selecting the same id twice clears it
    #[arg(long = "select", value_delimiter = ',')]
    pub select: Vec<u64>,

    /// Write the rendered output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(long)]
    pub step: Option<u32>,

    #[arg(long)]
    pub total_steps: Option<u32>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Flags given on the command line win over `base`.
    pub fn display_settings(&self, base: DisplaySettings) -> DisplaySettings {
        DisplaySettings {
            format: self.format.unwrap_or(base.format),
            current_step: self.step.unwrap_or(base.current_step),
            total_steps: self.total_steps.unwrap_or(base.total_steps),
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn postcode(&self) -> &str {
        &self.postcode
    }

    fn area(&self) -> Option<&str> {
        self.area.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("endpoint", &self.endpoint)?;
        validate_positive_number("timeout", self.timeout, 1)?;
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        self.display_settings(DisplaySettings::default()).validate()
    }
}
