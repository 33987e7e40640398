use crate::domain::model::{AssignmentMode, OutputFormat};
use crate::utils::error::Result;

/// What a storage path currently points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Directory,
    File,
    Missing,
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Resolved against the same root as `read_file` / `write_file`.
    fn path_kind(&self, path: &str) -> impl std::future::Future<Output = PathKind> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn mode(&self) -> AssignmentMode;
    fn pools_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn formats(&self) -> &[OutputFormat];
    fn seed(&self) -> Option<u64>;
    fn dry_run(&self) -> bool;
}
