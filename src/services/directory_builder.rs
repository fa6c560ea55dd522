use tokio::fs;
use tracing::debug;

use crate::models::plan::DirectoryPlan;
use crate::models::project::ProjectSpec;
use crate::utils::error::{Result, ScaffoldError};

/// Creates the directory skeleton of a project.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryBuilder;

impl DirectoryBuilder {
    pub const fn new() -> Self {
        Self
    }

    /// Create every directory in the project's plan, root first.
    ///
    /// Directories that already exist are left alone. The first failure stops
    /// the run; directories created before it stay on disk.
    pub async fn ensure_directories(&self, spec: &ProjectSpec) -> Result<DirectoryPlan> {
        let plan = DirectoryPlan::for_project(spec);
        debug!(directories = ?plan.directories(), "creating project directories");

        for dir in plan.iter() {
            fs::create_dir_all(dir)
                .await
                .map_err(|source| ScaffoldError::CreateDirectory {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }

        Ok(plan)
    }
}
