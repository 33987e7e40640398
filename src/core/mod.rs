pub mod assigner;
pub mod roster;
pub mod shuffle;

pub use crate::domain::model::{Assignment, AssignmentMode, OutputFormat, Person};
pub use crate::domain::ports::{ConfigProvider, PathKind, Storage};
pub use crate::utils::error::Result;
