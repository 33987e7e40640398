use crate::core::ConfigProvider;
use crate::domain::model::{AssignmentMode, OutputFormat};
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{validate_non_empty_list, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_OUTPUT_PATH: &str = ".uncommit/docs/";

/// Run file, e.g. `roster.toml`:
///
/// ```toml
/// [roster]
/// mode = "dual"
/// pools = "config/dual_pool.json"
/// seed = 42
///
/// [output]
/// path = "${REPORT_DIR}/"
/// formats = ["console", "markdown"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub roster: RosterSection,
    #[serde(default)]
    pub output: OutputSection,
    #[serde(skip)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSection {
    pub mode: AssignmentMode,
    pub pools: String,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<OutputFormat>,
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Console]
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            formats: default_formats(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RosterError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| RosterError::config(format!("TOML parsing error: {}", e)))
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| RosterError::config(format!("invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn mode(&self) -> AssignmentMode {
        self.roster.mode
    }

    fn pools_path(&self) -> &str {
        &self.roster.pools
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn formats(&self) -> &[OutputFormat] {
        &self.output.formats
    }

    fn seed(&self) -> Option<u64> {
        self.roster.seed
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("roster.pools", &self.roster.pools)?;
        validate_path("output.path", &self.output.path)?;
        validate_non_empty_list("output.formats", &self.output.formats)?;
        Ok(())
    }
}
