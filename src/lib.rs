pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::cli::LocalStorage;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{
    assigner::{assign_dual_pool, assign_single_pool, ReviewAssigner},
    roster::{RosterEngine, RosterOutcome},
    shuffle::{FisherYates, KeepOrder, Shuffler},
};
pub use crate::domain::model::{Assignment, AssignmentMode, OutputFormat, Person};
pub use crate::utils::error::{Result, RosterError};
