pub mod cli;
pub mod pool_file;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{AssignmentMode, OutputFormat};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use self::toml_config::{TomlConfig, DEFAULT_OUTPUT_PATH};

#[cfg(feature = "cli")]
const CONSOLE_ONLY: &[OutputFormat] = &[OutputFormat::Console];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "review-roster")]
#[command(about = "Assign code reviewers so every reviewee is covered and load stays even")]
pub struct CliConfig {
    /// TOML run file; flags given on the command line override its values
    #[arg(short, long)]
    pub config: Option<String>,

    /// Assignment mode
    #[arg(short, long, value_enum)]
    pub mode: Option<AssignmentMode>,

    /// Pool file (JSON). Defaults to config/single_pool.json or config/dual_pool.json
    #[arg(short, long)]
    pub pools: Option<String>,

    /// Output formats, comma separated
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub format: Vec<OutputFormat>,

    /// Report directory or file path; a timestamp is appended to file names
    #[arg(short, long)]
    pub output: Option<String>,

    /// Seed the shuffle for a reproducible assignment
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Validate and assign without writing reports")]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Command line values win over the run file.
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(mode) = self.mode {
            config.roster.mode = mode;
        }
        if let Some(pools) = &self.pools {
            config.roster.pools = pools.clone();
        }
        if !self.format.is_empty() {
            config.output.formats = self.format.clone();
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if self.seed.is_some() {
            config.roster.seed = self.seed;
        }
        config.dry_run = config.dry_run || self.dry_run;
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn mode(&self) -> AssignmentMode {
        self.mode.unwrap_or(AssignmentMode::Single)
    }

    fn pools_path(&self) -> &str {
        match (&self.pools, self.mode()) {
            (Some(path), _) => path.as_str(),
            (None, AssignmentMode::Single) => "config/single_pool.json",
            (None, AssignmentMode::Dual) => "config/dual_pool.json",
        }
    }

    fn output_path(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn formats(&self) -> &[OutputFormat] {
        if self.format.is_empty() {
            CONSOLE_ONLY
        } else {
            &self.format
        }
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("--pools", self.pools_path())?;
        validate_path("--output", self.output_path())?;
        Ok(())
    }
}
